//! 图遍历算法
//!
//! 深度优先（递归 / 显式栈）与广度优先遍历，
//! 以及基于遍历的路径存在性和连通性查询

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

/// 遍历引擎
///
/// 借用图直到调用结束，期间图不可被修改。
pub struct Traversal<'a, V, E> {
    graph: &'a Graph<V, E>,
}

impl<'a, V, E> Traversal<'a, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Clone,
{
    /// 创建遍历引擎
    pub fn new(graph: &'a Graph<V, E>) -> Self {
        Self { graph }
    }

    /// 深度优先遍历（递归实现）
    ///
    /// 返回访问顺序，并按该顺序对每个顶点调用一次 visitor。
    /// 邻居按矩阵行顺序展开。
    pub fn dfs_recursive<F>(&self, start: &V, mut visitor: F) -> Result<Vec<V>>
    where
        F: FnMut(&V),
    {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        let start_index = self.graph.index_of(start)?;
        let mut visited = vec![false; self.graph.order()];
        let mut sequence = Vec::new();
        self.dfs_visit(start_index, &mut visited, &mut sequence, &mut visitor);
        Ok(sequence)
    }

    fn dfs_visit<F>(&self, index: usize, visited: &mut [bool], sequence: &mut Vec<V>, visitor: &mut F)
    where
        F: FnMut(&V),
    {
        visited[index] = true;
        let vertex = self.graph.vertex_at(index);
        sequence.push(vertex.clone());
        visitor(vertex);
        for neighbour in 0..self.graph.order() {
            if self.graph.weight_between(index, neighbour).is_some() && !visited[neighbour] {
                self.dfs_visit(neighbour, visited, sequence, visitor);
            }
        }
    }

    /// 深度优先遍历（显式栈实现）
    ///
    /// 与递归实现访问同一顶点集合，访问顺序可能不同。
    pub fn dfs_iterative<F>(&self, start: &V, mut visitor: F) -> Result<Vec<V>>
    where
        F: FnMut(&V),
    {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        let start_index = self.graph.index_of(start)?;
        let mut visited = vec![false; self.graph.order()];
        let mut sequence = Vec::new();
        let mut stack = vec![start_index];
        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            let vertex = self.graph.vertex_at(current);
            sequence.push(vertex.clone());
            visitor(vertex);
            for neighbour in 0..self.graph.order() {
                if self.graph.weight_between(current, neighbour).is_some() && !visited[neighbour] {
                    stack.push(neighbour);
                }
            }
        }
        Ok(sequence)
    }

    /// 广度优先遍历
    ///
    /// 给定矩阵行顺序，访问顺序是确定的。
    pub fn bfs<F>(&self, start: &V, mut visitor: F) -> Result<Vec<V>>
    where
        F: FnMut(&V),
    {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        let start_index = self.graph.index_of(start)?;
        let mut visited = vec![false; self.graph.order()];
        let mut sequence = Vec::new();
        let mut queue = VecDeque::new();
        visited[start_index] = true;
        queue.push_back(start_index);
        while let Some(current) = queue.pop_front() {
            let vertex = self.graph.vertex_at(current);
            sequence.push(vertex.clone());
            visitor(vertex);
            for neighbour in 0..self.graph.order() {
                if self.graph.weight_between(current, neighbour).is_some() && !visited[neighbour] {
                    visited[neighbour] = true;
                    queue.push_back(neighbour);
                }
            }
        }
        Ok(sequence)
    }

    /// 判断两顶点之间是否存在路径
    ///
    /// 起点与终点相同时视为存在。
    pub fn has_path(&self, start: &V, end: &V) -> Result<bool> {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        let start_index = self.graph.index_of(start)?;
        let end_index = self.graph.index_of(end)?;
        if start_index == end_index {
            return Ok(true);
        }
        let mut found = false;
        self.bfs(start, |vertex| {
            if vertex == end {
                found = true;
            }
        })?;
        Ok(found)
    }

    /// 判断图是否连通
    ///
    /// 从第一个顶点出发的 BFS 能否覆盖所有顶点，主要用于无向图。
    pub fn is_connected(&self) -> Result<bool> {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        let first = self.graph.vertex_at(0).clone();
        let visited = self.bfs(&first, |_| {})?;
        Ok(visited.len() == self.graph.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A -> B -> D
    // |         ^
    // v         |
    // C --------+
    fn create_test_graph() -> Graph<&'static str, u32> {
        let mut graph = Graph::directed();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_vertex("C").unwrap();
        graph.add_vertex("D").unwrap();
        graph.add_edge(&"A", &"B", 1).unwrap();
        graph.add_edge(&"A", &"C", 1).unwrap();
        graph.add_edge(&"B", &"D", 1).unwrap();
        graph.add_edge(&"C", &"D", 1).unwrap();
        graph
    }

    #[test]
    fn test_bfs_order() {
        let graph = create_test_graph();
        let traversal = Traversal::new(&graph);

        let sequence = traversal.bfs(&"A", |_| {}).unwrap();
        assert_eq!(sequence, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dfs_variants_visit_same_set() {
        let graph = create_test_graph();
        let traversal = Traversal::new(&graph);

        let mut recursive = traversal.dfs_recursive(&"A", |_| {}).unwrap();
        let mut iterative = traversal.dfs_iterative(&"A", |_| {}).unwrap();
        let mut bfs = traversal.bfs(&"A", |_| {}).unwrap();

        recursive.sort_unstable();
        iterative.sort_unstable();
        bfs.sort_unstable();
        assert_eq!(recursive, iterative);
        assert_eq!(recursive, bfs);
    }

    #[test]
    fn test_dfs_recursive_order() {
        let graph = create_test_graph();
        let traversal = Traversal::new(&graph);

        // 递归实现按行顺序深入：A -> B -> D，回溯后访问 C
        let sequence = traversal.dfs_recursive(&"A", |_| {}).unwrap();
        assert_eq!(sequence, vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn test_visitor_sees_visitation_order() {
        let graph = create_test_graph();
        let traversal = Traversal::new(&graph);

        let mut seen = Vec::new();
        let sequence = traversal.bfs(&"A", |vertex| seen.push(*vertex)).unwrap();
        assert_eq!(seen, sequence);
    }

    #[test]
    fn test_traversal_covers_only_reachable() {
        let graph = create_test_graph();
        let traversal = Traversal::new(&graph);

        // D 没有出边
        let sequence = traversal.bfs(&"D", |_| {}).unwrap();
        assert_eq!(sequence, vec!["D"]);
    }

    #[test]
    fn test_has_path() {
        let graph = create_test_graph();
        let traversal = Traversal::new(&graph);

        assert!(traversal.has_path(&"A", &"D").unwrap());
        // 有向图反向不可达
        assert!(!traversal.has_path(&"D", &"A").unwrap());
        // 起点与终点相同
        assert!(traversal.has_path(&"B", &"B").unwrap());
    }

    #[test]
    fn test_has_path_missing_vertex() {
        let graph = create_test_graph();
        let traversal = Traversal::new(&graph);

        assert!(matches!(
            traversal.has_path(&"A", &"X"),
            Err(Error::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_is_connected() {
        let mut graph: Graph<&str, u32> = Graph::undirected();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_vertex("C").unwrap();
        graph.add_edge(&"A", &"B", 1).unwrap();
        graph.add_edge(&"B", &"C", 1).unwrap();

        assert!(Traversal::new(&graph).is_connected().unwrap());

        // 加入孤立顶点后不再连通
        graph.add_vertex("D").unwrap();
        assert!(!Traversal::new(&graph).is_connected().unwrap());
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<&str, u32> = Graph::directed();
        let traversal = Traversal::new(&graph);

        assert!(matches!(
            traversal.bfs(&"A", |_| {}),
            Err(Error::ContainerIsEmpty)
        ));
        assert!(matches!(
            traversal.dfs_recursive(&"A", |_| {}),
            Err(Error::ContainerIsEmpty)
        ));
        assert!(matches!(
            traversal.dfs_iterative(&"A", |_| {}),
            Err(Error::ContainerIsEmpty)
        ));
    }

    #[test]
    fn test_missing_start_vertex() {
        let graph = create_test_graph();
        let traversal = Traversal::new(&graph);

        assert!(matches!(
            traversal.bfs(&"X", |_| {}),
            Err(Error::ElementNotFound(_))
        ));
    }
}
