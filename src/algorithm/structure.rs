//! 图结构分析
//!
//! Kahn 拓扑排序与按图类型区分的环检测

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphType};
use crate::set::UnionFindSet;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 结构分析引擎
pub struct StructureAnalyzer<'a, V, E> {
    graph: &'a Graph<V, E>,
}

impl<'a, V, E> StructureAnalyzer<'a, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Clone,
{
    /// 创建结构分析引擎
    pub fn new(graph: &'a Graph<V, E>) -> Self {
        Self { graph }
    }

    /// Kahn 拓扑排序
    ///
    /// 仅支持有向图。反复取出入度为零的顶点并削减其出邻居的入度；
    /// 若最终排序长度小于顶点数，说明图中存在环，返回 CycleDetected。
    pub fn topological_sort(&self) -> Result<Vec<V>> {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        if self.graph.graph_type() != GraphType::Directed {
            return Err(Error::InvalidOperation(
                "拓扑排序仅支持有向图".to_string(),
            ));
        }
        let vertex_count = self.graph.order();
        debug!(vertex_count, "开始拓扑排序");

        let mut in_degrees = vec![0usize; vertex_count];
        for i in 0..vertex_count {
            for j in 0..vertex_count {
                if self.graph.weight_between(i, j).is_some() {
                    in_degrees[j] += 1;
                }
            }
        }
        // 入度为零的顶点按存储顺序入队
        let mut ready: VecDeque<usize> = (0..vertex_count)
            .filter(|&index| in_degrees[index] == 0)
            .collect();
        let mut sorted = Vec::with_capacity(vertex_count);
        while let Some(current) = ready.pop_front() {
            sorted.push(self.graph.vertex_at(current).clone());
            for neighbour in 0..vertex_count {
                if self.graph.weight_between(current, neighbour).is_some() {
                    in_degrees[neighbour] -= 1;
                    if in_degrees[neighbour] == 0 {
                        ready.push_back(neighbour);
                    }
                }
            }
        }
        if sorted.len() != vertex_count {
            return Err(Error::CycleDetected);
        }
        Ok(sorted)
    }

    /// 环检测
    ///
    /// 有向图使用三色标记 DFS 寻找指向“访问中”顶点的回边；
    /// 无向图使用并查集，每条边只检查一次。
    pub fn has_cycle(&self) -> Result<bool> {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        match self.graph.graph_type() {
            GraphType::Directed => Ok(self.has_directed_cycle()),
            GraphType::Undirected => self.has_undirected_cycle(),
        }
    }

    fn has_directed_cycle(&self) -> bool {
        let vertex_count = self.graph.order();
        // 0 = 未访问，1 = 访问中，2 = 已完成
        let mut colors = vec![0u8; vertex_count];
        for start in 0..vertex_count {
            if colors[start] == 0 && self.dfs_finds_back_edge(start, &mut colors) {
                return true;
            }
        }
        false
    }

    fn dfs_finds_back_edge(&self, index: usize, colors: &mut [u8]) -> bool {
        colors[index] = 1;
        for neighbour in 0..colors.len() {
            if self.graph.weight_between(index, neighbour).is_some() {
                if colors[neighbour] == 1 {
                    return true;
                }
                if colors[neighbour] == 0 && self.dfs_finds_back_edge(neighbour, colors) {
                    return true;
                }
            }
        }
        colors[index] = 2;
        false
    }

    fn has_undirected_cycle(&self) -> Result<bool> {
        let vertices = self.graph.get_vertices()?;
        let mut partitions = UnionFindSet::new(vertices.iter().cloned());
        let vertex_count = vertices.len();
        // 矩阵对称，j 从 i 开始保证每条边只看一次（含自环）
        for i in 0..vertex_count {
            for j in i..vertex_count {
                if self.graph.weight_between(i, j).is_some() {
                    if partitions.is_connected(&vertices[i], &vertices[j])? {
                        return Ok(true);
                    }
                    partitions.union_set(&vertices[i], &vertices[j])?;
                }
            }
        }
        Ok(false)
    }
}
