//! 图核心模块
//!
//! 定义双射、权重矩阵、边和有向图的核心数据结构

mod bijection;
mod edge;
mod graph;
mod matrix;

pub use bijection::Bijection;
pub use edge::Edge;
pub use graph::DirectedGraph;
pub use matrix::{WeightMatrix, NO_EDGE};
