//! 有向图数据结构
//!
//! 邻接矩阵存储的有向带权图，标签通过双射翻译为稠密索引

use super::bijection::Bijection;
use super::edge::Edge;
use super::matrix::{WeightMatrix, NO_EDGE};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 初始矩阵容量（顶点数）
const INITIAL_CAPACITY: usize = 10;

/// 有向带权图
///
/// 顶点由泛型标签标识，内部分配稠密索引作为矩阵行列号。
/// 被移除顶点的索引入栈回收，后进先出复用。单线程使用，无内部锁。
pub struct DirectedGraph<V> {
    /// 标签 <-> 索引双射
    map: Bijection<V>,
    /// 邻接权重矩阵
    matrix: WeightMatrix,
    /// 空闲索引栈（LIFO 复用）
    free_indices: Vec<usize>,
    /// 顶点数
    vertex_size: usize,
    /// 边数
    edge_size: usize,
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// 创建空图，初始可容纳 10 个顶点
    pub fn new() -> Self {
        Self {
            map: Bijection::new(),
            matrix: WeightMatrix::new(INITIAL_CAPACITY),
            free_indices: Vec::new(),
            vertex_size: 0,
            edge_size: 0,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 标签已存在时不做任何修改并返回 false。索引优先复用空闲栈栈顶，
    /// 否则取下一个稠密槽位，必要时先扩容矩阵。
    pub fn add_vertex(&mut self, label: V) -> bool {
        if self.contains_vertex(&label) {
            return false;
        }

        let index = match self.free_indices.pop() {
            Some(recycled) => {
                debug!(index = recycled, "复用空闲索引");
                recycled
            }
            None => self.vertex_size,
        };

        if index == self.matrix.capacity() {
            self.matrix.grow();
        }

        self.map.insert(label, index);
        self.vertex_size += 1;
        true
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, label: &V) -> bool {
        self.map.contains_label(label)
    }

    /// 顶点数
    pub fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    /// 当前所有顶点标签的集合
    pub fn vertices(&self) -> HashSet<V> {
        self.map.iter().map(|(_, label)| label.clone()).collect()
    }

    /// 移除顶点
    ///
    /// 同时清空该顶点在矩阵中的整行整列（出边和入边），释放的索引
    /// 入栈等待复用。标签不存在时返回 false。
    pub fn remove_vertex(&mut self, label: &V) -> bool {
        let Some(index) = self.map.index_of(label) else {
            return false;
        };

        let cleared = self.matrix.clear_vertex(index);
        self.edge_size -= cleared;
        self.free_indices.push(index);
        self.map.remove_by_label(label);
        self.vertex_size -= 1;
        true
    }

    // ==================== 边操作 ====================

    /// 添加有向边
    ///
    /// 权重为负时报错，检查先于一切状态修改。边已存在或任一端点
    /// 未知时不做修改并返回 false。权重 0 是合法的有效权重。
    pub fn add_edge(&mut self, source: &V, destination: &V, weight: i64) -> Result<bool> {
        if weight < 0 {
            return Err(Error::NegativeWeight(weight));
        }

        if self.contains_edge(source, destination) {
            return Ok(false);
        }

        let (Some(src), Some(dst)) = (self.map.index_of(source), self.map.index_of(destination))
        else {
            return Ok(false);
        };

        self.matrix.set(src, dst, weight);
        self.edge_size += 1;
        Ok(true)
    }

    /// 边是否存在
    ///
    /// 任一端点未知时返回 false，否则看矩阵单元格是否为哨兵。
    pub fn contains_edge(&self, source: &V, destination: &V) -> bool {
        match (self.map.index_of(source), self.map.index_of(destination)) {
            (Some(src), Some(dst)) => self.matrix.get(src, dst) != NO_EDGE,
            _ => false,
        }
    }

    /// 读取边权重
    ///
    /// 返回矩阵单元格原始值，边不存在（或端点未知）时为哨兵 [`NO_EDGE`]。
    /// 哨兵与"无边"不可区分，调用方应先用 [`contains_edge`] 判断。
    ///
    /// [`contains_edge`]: DirectedGraph::contains_edge
    pub fn edge_weight(&self, source: &V, destination: &V) -> i64 {
        match (self.map.index_of(source), self.map.index_of(destination)) {
            (Some(src), Some(dst)) => self.matrix.get(src, dst),
            _ => NO_EDGE,
        }
    }

    /// 边数
    pub fn edge_size(&self) -> usize {
        self.edge_size
    }

    /// 当前所有边的集合
    ///
    /// 全容量扫描矩阵，行列索引解析不到标签的单元格直接跳过。
    pub fn edges(&self) -> HashSet<Edge<V>> {
        let mut set = HashSet::new();
        for row in 0..self.matrix.capacity() {
            for col in 0..self.matrix.capacity() {
                let weight = self.matrix.get(row, col);
                if weight == NO_EDGE {
                    continue;
                }
                if let (Some(source), Some(destination)) =
                    (self.map.label_of(row), self.map.label_of(col))
                {
                    set.insert(Edge::new(source.clone(), destination.clone(), weight));
                }
            }
        }
        set
    }

    /// 移除有向边
    ///
    /// 单元格重置为哨兵。边不存在（含端点未知）时返回 false。
    pub fn remove_edge(&mut self, source: &V, destination: &V) -> bool {
        match (self.map.index_of(source), self.map.index_of(destination)) {
            (Some(src), Some(dst)) if self.matrix.get(src, dst) != NO_EDGE => {
                self.matrix.set(src, dst, NO_EDGE);
                self.edge_size -= 1;
                true
            }
            _ => false,
        }
    }

    // ==================== 邻接查询 ====================

    /// 顶点的出边邻居（出边指向的顶点标签）
    pub fn neighbors(&self, label: &V) -> Vec<V> {
        let Some(src) = self.map.index_of(label) else {
            return Vec::new();
        };
        (0..self.matrix.capacity())
            .filter(|&dst| self.matrix.get(src, dst) != NO_EDGE)
            .filter_map(|dst| self.map.label_of(dst).cloned())
            .collect()
    }

    /// 顶点的前驱（入边来源的顶点标签）
    pub fn predecessors(&self, label: &V) -> Vec<V> {
        let Some(dst) = self.map.index_of(label) else {
            return Vec::new();
        };
        (0..self.matrix.capacity())
            .filter(|&src| self.matrix.get(src, dst) != NO_EDGE)
            .filter_map(|src| self.map.label_of(src).cloned())
            .collect()
    }

    /// 顶点的出度，标签未知时为 0
    pub fn out_degree(&self, label: &V) -> usize {
        match self.map.index_of(label) {
            Some(src) => (0..self.matrix.capacity())
                .filter(|&dst| self.matrix.get(src, dst) != NO_EDGE)
                .count(),
            None => 0,
        }
    }

    /// 顶点的入度，标签未知时为 0
    pub fn in_degree(&self, label: &V) -> usize {
        match self.map.index_of(label) {
            Some(dst) => (0..self.matrix.capacity())
                .filter(|&src| self.matrix.get(src, dst) != NO_EDGE)
                .count(),
            None => 0,
        }
    }

    // ==================== 整体操作 ====================

    /// 清空图
    ///
    /// 双射、空闲栈、计数器全部归零，矩阵填哨兵。容量保留不回缩。
    pub fn clear(&mut self) {
        self.map.clear();
        self.free_indices.clear();
        self.matrix.reset();
        self.vertex_size = 0;
        self.edge_size = 0;
        debug!(capacity = self.matrix.capacity(), "图已清空");
    }

    /// 当前矩阵容量
    pub fn capacity(&self) -> usize {
        self.matrix.capacity()
    }
}

impl<V> Default for DirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for DirectedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut mappings: Vec<(usize, &V)> = self.map.iter().collect();
        mappings.sort_by_key(|&(index, _)| index);

        f.debug_struct("DirectedGraph")
            .field("vertex_size", &self.vertex_size)
            .field("edge_size", &self.edge_size)
            .field("capacity", &self.matrix.capacity())
            .field("free_indices", &self.free_indices)
            .field("mappings", &mappings)
            .finish()
    }
}
