//! 并查集
//!
//! 按秩合并 + 路径压缩，摊还近似常数的 find/union

use crate::error::{Error, Result};
use indexmap::IndexSet;
use std::fmt;
use std::hash::Hash;

/// 并查集
///
/// 在固定的元素全集上维护不相交集合划分。全集在构造时拷贝，
/// 之后按值查找元素；每个算法调用应构造一个新实例，用完即弃。
pub struct UnionFindSet<T> {
    /// 元素全集（按加入顺序）
    elements: IndexSet<T>,
    /// 父节点位置
    parent: Vec<usize>,
    /// 树深度上界（按秩合并用）
    rank: Vec<usize>,
}

impl<T> UnionFindSet<T>
where
    T: Eq + Hash + Clone + fmt::Debug,
{
    /// 从元素全集创建并查集，初始时每个元素自成一个集合
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements: IndexSet<T> = elements.into_iter().collect();
        let parent = (0..elements.len()).collect();
        let rank = vec![1; elements.len()];
        Self {
            elements,
            parent,
            rank,
        }
    }

    /// 元素个数
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// 查找元素所在集合的代表元素
    pub fn find(&mut self, elem: &T) -> Result<T> {
        let index = self.index_of(elem)?;
        let root = self.find_root(index);
        Ok(self.elements[root].clone())
    }

    /// 合并两个元素所在的集合
    ///
    /// 已在同一集合时不做任何修改。
    pub fn union_set(&mut self, elem1: &T, elem2: &T) -> Result<()> {
        let index1 = self.index_of(elem1)?;
        let index2 = self.index_of(elem2)?;
        let root1 = self.find_root(index1);
        let root2 = self.find_root(index2);
        if root1 == root2 {
            return Ok(());
        }
        if self.rank[root1] > self.rank[root2] {
            self.parent[root2] = root1;
        } else if self.rank[root1] < self.rank[root2] {
            self.parent[root1] = root2;
        } else {
            self.parent[root2] = root1;
            self.rank[root1] += 1;
        }
        Ok(())
    }

    /// 判断两个元素是否属于同一集合
    pub fn is_connected(&mut self, elem1: &T, elem2: &T) -> Result<bool> {
        let index1 = self.index_of(elem1)?;
        let index2 = self.index_of(elem2)?;
        Ok(self.find_root(index1) == self.find_root(index2))
    }

    fn index_of(&self, elem: &T) -> Result<usize> {
        self.elements
            .get_index_of(elem)
            .ok_or_else(|| Error::ElementNotFound(format!("元素 {:?} 不存在", elem)))
    }

    /// 查找根并压缩路径（两段式）
    fn find_root(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}
