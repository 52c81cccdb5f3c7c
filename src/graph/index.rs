//! 图索引
//!
//! 节点到关联边、出边、入边的内存索引，支持常数时间查找

use crate::graph::edge::EdgeId;
use crate::graph::node::NodeId;
use indexmap::IndexSet;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

type EdgeSets = HashMap<NodeId, IndexSet<EdgeId>>;

/// 边索引
///
/// 只为至少有一条相应边的节点保留条目，集合变空时条目随之删除。
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeIndex {
    /// 节点到关联边（出边 ∪ 入边）的映射
    incident: EdgeSets,
    /// 起点到出边的映射
    outgoing: EdgeSets,
    /// 终点到入边的映射
    incoming: EdgeSets,
}

impl EdgeIndex {
    /// 创建新索引
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 按预计的节点数预分配
    pub(crate) fn with_capacity(nodes: usize) -> Self {
        Self {
            incident: HashMap::with_capacity(nodes),
            outgoing: HashMap::with_capacity(nodes),
            incoming: HashMap::with_capacity(nodes),
        }
    }

    /// 添加边
    ///
    /// 自环会向同一个关联边集合插入两次，集合去重后只保留一份。
    pub(crate) fn add_edge(&mut self, edge_id: EdgeId, start: NodeId, end: NodeId) {
        insert(&mut self.incident, start, edge_id);
        insert(&mut self.outgoing, start, edge_id);
        insert(&mut self.incident, end, edge_id);
        insert(&mut self.incoming, end, edge_id);
    }

    /// 移除边
    pub(crate) fn remove_edge(&mut self, edge_id: EdgeId, start: NodeId, end: NodeId) {
        remove(&mut self.incident, start, edge_id);
        remove(&mut self.outgoing, start, edge_id);
        remove(&mut self.incident, end, edge_id);
        remove(&mut self.incoming, end, edge_id);
    }

    /// 获取节点的关联边
    pub(crate) fn incident(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        iter(&self.incident, node_id)
    }

    /// 获取节点的出边
    pub(crate) fn outgoing(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        iter(&self.outgoing, node_id)
    }

    /// 获取节点的入边
    pub(crate) fn incoming(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        iter(&self.incoming, node_id)
    }

    pub(crate) fn degree(&self, node_id: NodeId) -> usize {
        len(&self.incident, node_id)
    }

    pub(crate) fn out_degree(&self, node_id: NodeId) -> usize {
        len(&self.outgoing, node_id)
    }

    pub(crate) fn in_degree(&self, node_id: NodeId) -> usize {
        len(&self.incoming, node_id)
    }

    /// 节点是否在任一索引中留有条目
    #[cfg(test)]
    pub(crate) fn has_entry(&self, node_id: NodeId) -> bool {
        self.incident.contains_key(&node_id)
            || self.outgoing.contains_key(&node_id)
            || self.incoming.contains_key(&node_id)
    }
}

fn insert(sets: &mut EdgeSets, node_id: NodeId, edge_id: EdgeId) {
    sets.entry(node_id).or_default().insert(edge_id);
}

fn remove(sets: &mut EdgeSets, node_id: NodeId, edge_id: EdgeId) {
    if let Entry::Occupied(mut entry) = sets.entry(node_id) {
        entry.get_mut().shift_remove(&edge_id);
        if entry.get().is_empty() {
            entry.remove();
        }
    }
}

fn iter(sets: &EdgeSets, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
    sets.get(&node_id).into_iter().flatten().copied()
}

fn len(sets: &EdgeSets, node_id: NodeId) -> usize {
    sets.get(&node_id).map(|set| set.len()).unwrap_or(0)
}
