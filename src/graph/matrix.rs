//! 权重矩阵
//!
//! 按稠密索引寻址的方阵，扁平 Vec 存储，容量翻倍扩容

use tracing::debug;

/// 哨兵值：单元格无边
pub const NO_EDGE: i64 = -1;

/// 邻接权重矩阵（capacity × capacity）
///
/// 单元格 `(i, j)` 保存有向边 `i -> j` 的权重，`NO_EDGE` 表示无边。
/// 容量只增不减。
#[derive(Clone)]
pub struct WeightMatrix {
    /// 扁平存储，按 `row * capacity + col` 寻址
    cells: Vec<i64>,
    /// 当前行列数
    capacity: usize,
}

impl WeightMatrix {
    /// 创建指定容量的矩阵，全部单元格初始化为哨兵
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: vec![NO_EDGE; capacity * capacity],
            capacity,
        }
    }

    /// 当前容量（行列数）
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 读取单元格
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.capacity + col]
    }

    /// 写入单元格
    pub fn set(&mut self, row: usize, col: usize, weight: i64) {
        self.cells[row * self.capacity + col] = weight;
    }

    /// 容量翻倍扩容
    ///
    /// 旧矩阵整体拷贝到新矩阵左上角子阵，新增区域填哨兵。
    pub fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity * 2;
        let mut new_cells = vec![NO_EDGE; new_capacity * new_capacity];

        for row in 0..old_capacity {
            let old_start = row * old_capacity;
            let new_start = row * new_capacity;
            new_cells[new_start..new_start + old_capacity]
                .copy_from_slice(&self.cells[old_start..old_start + old_capacity]);
        }

        self.cells = new_cells;
        self.capacity = new_capacity;
        debug!(old_capacity, new_capacity, "权重矩阵扩容");
    }

    /// 全部单元格重置为哨兵，容量保留
    pub fn reset(&mut self) {
        self.cells.fill(NO_EDGE);
    }

    /// 清空某个索引的整行整列，返回清掉的有效单元格数量
    pub fn clear_vertex(&mut self, index: usize) -> usize {
        let mut cleared = 0;
        for other in 0..self.capacity {
            if self.get(index, other) != NO_EDGE {
                self.set(index, other, NO_EDGE);
                cleared += 1;
            }
            // 对角线单元格只清一次
            if other != index && self.get(other, index) != NO_EDGE {
                self.set(other, index, NO_EDGE);
                cleared += 1;
            }
        }
        cleared
    }
}
