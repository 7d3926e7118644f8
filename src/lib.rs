//! DenseGraph - 邻接矩阵有向带权图
//!
//! 纯内存的有向图结构，特点：
//! - 邻接矩阵存储，按稠密索引 O(1) 读写边
//! - 标签与索引的双射，增删交替下保持一致
//! - 容量翻倍扩容，空闲索引 LIFO 回收复用
//! - 单线程使用，无内部锁

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Bijection, DirectedGraph, Edge, NO_EDGE};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
