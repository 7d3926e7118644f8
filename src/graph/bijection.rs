//! 标签与稠密索引的双射
//!
//! 顶点标签和矩阵行列索引之间的一一映射，双向 O(1) 查找

use std::collections::HashMap;
use std::hash::Hash;

/// 双射：标签 <-> 稠密索引
///
/// 两个方向始终保持一致：`(v, i)` 存在时，`label_to_index[v] == i`
/// 且 `index_to_label[i] == v`。唯一性由调用方（图）在插入前检查。
#[derive(Debug, Clone)]
pub struct Bijection<V> {
    /// 标签到索引的映射
    label_to_index: HashMap<V, usize>,
    /// 索引到标签的映射
    index_to_label: HashMap<usize, V>,
}

impl<V> Bijection<V>
where
    V: Eq + Hash + Clone,
{
    /// 创建空双射
    pub fn new() -> Self {
        Self {
            label_to_index: HashMap::new(),
            index_to_label: HashMap::new(),
        }
    }

    /// 插入一对映射（双向）
    ///
    /// 调用方必须保证标签和索引都未被占用。
    pub fn insert(&mut self, label: V, index: usize) {
        self.label_to_index.insert(label.clone(), index);
        self.index_to_label.insert(index, label);
    }

    /// 通过标签查索引
    pub fn index_of(&self, label: &V) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    /// 通过索引查标签
    pub fn label_of(&self, index: usize) -> Option<&V> {
        self.index_to_label.get(&index)
    }

    /// 标签是否已映射
    pub fn contains_label(&self, label: &V) -> bool {
        self.label_to_index.contains_key(label)
    }

    /// 按标签移除（双向），返回是否发生了移除
    pub fn remove_by_label(&mut self, label: &V) -> bool {
        match self.label_to_index.remove(label) {
            Some(index) => {
                self.index_to_label.remove(&index);
                true
            }
            None => false,
        }
    }

    /// 映射对数量
    pub fn len(&self) -> usize {
        self.label_to_index.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.label_to_index.is_empty()
    }

    /// 清空所有映射
    pub fn clear(&mut self) {
        self.label_to_index.clear();
        self.index_to_label.clear();
    }

    /// 遍历所有 (索引, 标签) 对
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.index_to_label.iter().map(|(&i, v)| (i, v))
    }
}

impl<V> Default for Bijection<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut map = Bijection::new();
        map.insert("A", 0);
        map.insert("B", 1);

        assert_eq!(map.index_of(&"A"), Some(0));
        assert_eq!(map.index_of(&"B"), Some(1));
        assert_eq!(map.label_of(0), Some(&"A"));
        assert_eq!(map.label_of(1), Some(&"B"));
        assert!(map.contains_label(&"A"));
        assert!(!map.contains_label(&"C"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_remove_by_label() {
        let mut map = Bijection::new();
        map.insert("A", 0);

        assert!(map.remove_by_label(&"A"));
        assert!(!map.remove_by_label(&"A"));
        assert_eq!(map.index_of(&"A"), None);
        assert_eq!(map.label_of(0), None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut map = Bijection::new();
        map.insert("A", 0);
        map.insert("B", 1);
        map.clear();

        assert!(map.is_empty());
        assert_eq!(map.label_of(0), None);
        assert_eq!(map.label_of(1), None);
    }

    #[test]
    fn test_both_directions_stay_consistent() {
        let mut map = Bijection::new();
        for i in 0..50 {
            map.insert(i * 10, i);
        }
        map.remove_by_label(&200);

        assert_eq!(map.len(), 49);
        for (index, label) in map.iter() {
            assert_eq!(map.index_of(label), Some(index));
        }
    }
}
