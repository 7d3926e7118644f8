//! 边定义
//!
//! 有向带权边的值对象，仅用于对外报告查询结果

use std::fmt;

/// 有向边：(源标签, 目标标签, 权重)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    source: V,
    destination: V,
    weight: i64,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V, weight: i64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// 源顶点标签
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 目标顶点标签
    pub fn destination(&self) -> &V {
        &self.destination
    }

    /// 边权重
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [{}]", self.source, self.destination, self.weight)
    }
}
