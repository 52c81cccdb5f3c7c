//! 值访问器
//!
//! 把返回 ID 的查询映射为对应的值，失败条件与原查询相同

use super::edge::{EdgeId, EdgeRecord};
use super::graph::Graph;
use super::node::NodeId;
use crate::error::Result;

impl<N, E> Graph<N, E> {
    /// 所有节点的值，顺序与 [`Graph::nodes`] 一致
    pub fn node_values(&self) -> Vec<&N> {
        self.nodes.values().collect()
    }

    /// 所有边的值，顺序与 [`Graph::edges`] 一致
    pub fn edge_values(&self) -> Vec<&E> {
        self.edges.values().map(EdgeRecord::value).collect()
    }

    /// 出边的值
    pub fn out_edge_values(&self, node_id: NodeId) -> Result<Vec<&E>> {
        self.edge_values_of(self.out_edges(node_id)?)
    }

    /// 入边的值
    pub fn in_edge_values(&self, node_id: NodeId) -> Result<Vec<&E>> {
        self.edge_values_of(self.in_edges(node_id)?)
    }

    /// 关联边的值
    pub fn edge_list_values(&self, node_id: NodeId) -> Result<Vec<&E>> {
        self.edge_values_of(self.edge_list(node_id)?)
    }

    /// 边起点的值
    pub fn start_node_value(&self, edge_id: EdgeId) -> Result<&N> {
        self.node_value(self.start_node(edge_id)?)
    }

    /// 边终点的值
    pub fn end_node_value(&self, edge_id: EdgeId) -> Result<&N> {
        self.node_value(self.end_node(edge_id)?)
    }

    fn edge_values_of(&self, edge_ids: Vec<EdgeId>) -> Result<Vec<&E>> {
        edge_ids
            .into_iter()
            .map(|edge_id| self.edge_value(edge_id))
            .collect()
    }
}
