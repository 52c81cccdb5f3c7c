//! 边定义
//!
//! 边 ID 与边记录：每条边恰有一个起点和一个终点，可以相同（自环）

use crate::graph::node::NodeId;
use std::fmt;

/// 边 ID（图内唯一，与节点 ID 独立计数，删除后不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 边记录
#[derive(Debug, Clone)]
pub(crate) struct EdgeRecord<E> {
    /// 起点
    start: NodeId,
    /// 终点
    end: NodeId,
    /// 边的值
    value: E,
}

impl<E> EdgeRecord<E> {
    pub(crate) fn new(start: NodeId, end: NodeId, value: E) -> Self {
        Self { start, end, value }
    }

    pub(crate) fn start(&self) -> NodeId {
        self.start
    }

    pub(crate) fn end(&self) -> NodeId {
        self.end
    }

    pub(crate) fn value(&self) -> &E {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut E {
        &mut self.value
    }

    pub(crate) fn into_value(self) -> E {
        self.value
    }

    /// 是否为自环
    pub(crate) fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}
