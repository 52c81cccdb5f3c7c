//! 图核心模块
//!
//! 定义节点、边和图的核心数据结构

mod edge;
mod graph;
mod index;
mod node;
mod values;

pub use edge::EdgeId;
pub use graph::Graph;
pub use node::NodeId;
