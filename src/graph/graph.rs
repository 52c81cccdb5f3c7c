//! 图数据结构
//!
//! 内存中的有向多重图：节点和边各自携带一个值，
//! 按节点维护关联边、出边、入边三类索引

use super::edge::{EdgeId, EdgeRecord};
use super::index::EdgeIndex;
use super::node::NodeId;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// 有向多重图
///
/// `N` 为节点值类型，`E` 为边值类型，两者均无约束。
/// 允许自环、平行边和环。
///
/// 节点 ID 和边 ID 各自从 0 开始单调递增，删除后不会复用。
/// 所有按 ID 查询的方法在 ID 不存在时返回 [`Error`]，且不修改图。
///
/// 返回 `Vec<NodeId>` / `Vec<EdgeId>` 的方法返回的是调用时刻的快照，
/// 之后对图的修改不会影响已返回的结果。
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    /// 节点值
    pub(super) nodes: IndexMap<NodeId, N>,
    /// 边记录（起点、终点、值）
    pub(super) edges: IndexMap<EdgeId, EdgeRecord<E>>,
    /// 边索引
    index: EdgeIndex,
    /// 下一个节点 ID
    next_node_id: u64,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            index: EdgeIndex::new(),
            next_node_id: 0,
            next_edge_id: 0,
        }
    }

    /// 按预计的节点数和边数预分配
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(nodes),
            edges: IndexMap::with_capacity(edges),
            index: EdgeIndex::with_capacity(nodes),
            next_node_id: 0,
            next_edge_id: 0,
        }
    }

    // ==================== 节点操作 ====================

    /// 添加节点
    pub fn add_node(&mut self, value: N) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(id, value);

        trace!(node = %id, "添加节点");
        id
    }

    /// 节点是否存在
    pub fn has_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// 获取节点的值
    pub fn node_value(&self, node_id: NodeId) -> Result<&N> {
        self.nodes
            .get(&node_id)
            .ok_or(Error::NodeNotFound(node_id))
    }

    /// 获取节点值的可变引用
    pub fn node_value_mut(&mut self, node_id: NodeId) -> Result<&mut N> {
        self.nodes
            .get_mut(&node_id)
            .ok_or(Error::NodeNotFound(node_id))
    }

    /// 设置节点的值，节点 ID 不变
    pub fn set_node_value(&mut self, node_id: NodeId, value: N) -> Result<()> {
        *self.node_value_mut(node_id)? = value;
        Ok(())
    }

    /// 删除节点
    ///
    /// 先删除所有关联边，再删除节点本身，返回节点的值。
    pub fn remove_node(&mut self, node_id: NodeId) -> Result<N> {
        self.require_node(node_id)?;

        // 删除过程中索引会变化，先取快照
        let incident: Vec<EdgeId> = self.index.incident(node_id).collect();
        for &edge_id in &incident {
            self.remove_edge(edge_id)?;
        }

        let value = self
            .nodes
            .shift_remove(&node_id)
            .ok_or(Error::NodeNotFound(node_id))?;

        debug!(node = %node_id, cascaded = incident.len(), "删除节点");
        Ok(value)
    }

    /// 所有节点 ID
    pub fn nodes(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// 获取节点数量
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 起点或终点不存在时返回错误，不会添加任何边。
    pub fn add_edge(&mut self, start: NodeId, end: NodeId, value: E) -> Result<EdgeId> {
        self.require_node(start)?;
        self.require_node(end)?;

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        self.edges.insert(id, EdgeRecord::new(start, end, value));
        self.index.add_edge(id, start, end);

        trace!(edge = %id, start = %start, end = %end, "添加边");
        Ok(id)
    }

    /// 边是否存在
    pub fn has_edge(&self, edge_id: EdgeId) -> bool {
        self.edges.contains_key(&edge_id)
    }

    /// 获取边的值
    pub fn edge_value(&self, edge_id: EdgeId) -> Result<&E> {
        self.record(edge_id).map(EdgeRecord::value)
    }

    /// 获取边值的可变引用
    pub fn edge_value_mut(&mut self, edge_id: EdgeId) -> Result<&mut E> {
        self.edges
            .get_mut(&edge_id)
            .map(EdgeRecord::value_mut)
            .ok_or(Error::EdgeNotFound(edge_id))
    }

    /// 设置边的值，边 ID 和端点不变
    pub fn set_edge_value(&mut self, edge_id: EdgeId, value: E) -> Result<()> {
        *self.edge_value_mut(edge_id)? = value;
        Ok(())
    }

    /// 删除边，返回边的值
    pub fn remove_edge(&mut self, edge_id: EdgeId) -> Result<E> {
        let record = self
            .edges
            .shift_remove(&edge_id)
            .ok_or(Error::EdgeNotFound(edge_id))?;

        self.index
            .remove_edge(edge_id, record.start(), record.end());

        trace!(edge = %edge_id, self_loop = record.is_self_loop(), "删除边");
        Ok(record.into_value())
    }

    /// 所有边 ID
    pub fn edges(&self) -> Vec<EdgeId> {
        self.edges.keys().copied().collect()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 图中是否没有任何节点
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 获取边的起点
    pub fn start_node(&self, edge_id: EdgeId) -> Result<NodeId> {
        self.record(edge_id).map(EdgeRecord::start)
    }

    /// 获取边的终点
    pub fn end_node(&self, edge_id: EdgeId) -> Result<NodeId> {
        self.record(edge_id).map(EdgeRecord::end)
    }

    /// 获取边的 (起点, 终点)
    pub fn endpoints(&self, edge_id: EdgeId) -> Result<(NodeId, NodeId)> {
        self.record(edge_id).map(|e| (e.start(), e.end()))
    }

    // ==================== 邻接查询 ====================

    /// 获取节点的出边
    pub fn out_edges(&self, node_id: NodeId) -> Result<Vec<EdgeId>> {
        self.require_node(node_id)?;
        Ok(self.index.outgoing(node_id).collect())
    }

    /// 获取节点的入边
    pub fn in_edges(&self, node_id: NodeId) -> Result<Vec<EdgeId>> {
        self.require_node(node_id)?;
        Ok(self.index.incoming(node_id).collect())
    }

    /// 获取节点的关联边（出边 ∪ 入边）
    ///
    /// 自环只出现一次。
    pub fn edge_list(&self, node_id: NodeId) -> Result<Vec<EdgeId>> {
        self.require_node(node_id)?;
        Ok(self.index.incident(node_id).collect())
    }

    /// 获取节点的出度
    pub fn out_degree(&self, node_id: NodeId) -> Result<usize> {
        self.require_node(node_id)?;
        Ok(self.index.out_degree(node_id))
    }

    /// 获取节点的入度
    pub fn in_degree(&self, node_id: NodeId) -> Result<usize> {
        self.require_node(node_id)?;
        Ok(self.index.in_degree(node_id))
    }

    /// 获取节点的关联边数量（自环计一次）
    pub fn degree(&self, node_id: NodeId) -> Result<usize> {
        self.require_node(node_id)?;
        Ok(self.index.degree(node_id))
    }

    /// 获取后继（出边指向的节点），每条出边一项
    pub fn successors(&self, node_id: NodeId) -> Result<Vec<NodeId>> {
        self.require_node(node_id)?;
        self.index
            .outgoing(node_id)
            .map(|edge_id| self.end_node(edge_id))
            .collect()
    }

    /// 获取前驱（入边来源的节点），每条入边一项
    pub fn predecessors(&self, node_id: NodeId) -> Result<Vec<NodeId>> {
        self.require_node(node_id)?;
        self.index
            .incoming(node_id)
            .map(|edge_id| self.start_node(edge_id))
            .collect()
    }

    /// 获取从 `start` 指向 `end` 的所有边（支持平行边）
    pub fn edges_between(&self, start: NodeId, end: NodeId) -> Result<Vec<EdgeId>> {
        self.require_node(start)?;
        self.require_node(end)?;

        let mut result = Vec::new();
        for edge_id in self.index.outgoing(start) {
            if self.end_node(edge_id)? == end {
                result.push(edge_id);
            }
        }
        Ok(result)
    }

    // ==================== 内部辅助 ====================

    fn require_node(&self, node_id: NodeId) -> Result<()> {
        if self.nodes.contains_key(&node_id) {
            Ok(())
        } else {
            Err(Error::NodeNotFound(node_id))
        }
    }

    fn record(&self, edge_id: EdgeId) -> Result<&EdgeRecord<E>> {
        self.edges
            .get(&edge_id)
            .ok_or(Error::EdgeNotFound(edge_id))
    }

    /// 节点是否在边索引中留有条目
    #[cfg(test)]
    pub(crate) fn has_index_entry(&self, node_id: NodeId) -> bool {
        self.index.has_entry(node_id)
    }
}
