//! multigraph - 有向多重图容器
//!
//! 通用的有向多重图数据结构，支持：
//! - 节点和边各自携带任意类型的值
//! - 按节点常数时间查询出边、入边和关联边
//! - 删除节点时级联删除其关联边
//! - 自环和平行边

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{EdgeId, Graph, NodeId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
