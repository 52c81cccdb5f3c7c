//! 错误类型定义

use crate::graph::{EdgeId, NodeId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 图操作错误
///
/// 所有变体都属于“未找到”一类：调用方传入的标识符当前不在图中。
/// 返回错误的操作不会修改图的任何状态。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("节点不存在: {0}")]
    NodeNotFound(NodeId),

    #[error("边不存在: {0}")]
    EdgeNotFound(EdgeId),
}

impl Error {
    /// 是否为“未找到”错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NodeNotFound(_) | Error::EdgeNotFound(_))
    }
}
