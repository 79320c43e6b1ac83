//! 最小生成树算法
//!
//! Prim 与 Kruskal，仅适用于连通的无向图

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, GraphType};
use crate::set::UnionFindSet;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 最小生成树引擎
///
/// 两种算法都返回新的无向图：顶点与原图一致（顺序相同），
/// 只保留生成树的边。图不连通时返回 InvalidOperation，
/// 而不是部分森林。
pub struct SpanningTree<'a, V, E> {
    graph: &'a Graph<V, E>,
}

impl<'a, V, E> SpanningTree<'a, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Clone + Ord,
{
    /// 创建最小生成树引擎
    pub fn new(graph: &'a Graph<V, E>) -> Self {
        Self { graph }
    }

    /// Prim 最小生成树
    ///
    /// 从 start 出发，每轮把距离生成树最近的顶点并入树中，
    /// 并用它的邻接边松弛其余顶点。
    pub fn prim(&self, start: &V) -> Result<Graph<V, E>> {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        if self.graph.graph_type() != GraphType::Undirected {
            return Err(Error::InvalidOperation(
                "最小生成树仅支持无向图".to_string(),
            ));
        }
        let start_index = self.graph.index_of(start)?;
        let vertex_count = self.graph.order();
        debug!(vertex_count, "开始 Prim 最小生成树构造");

        let mut in_tree = vec![false; vertex_count];
        let mut best_weight: Vec<Option<E>> = vec![None; vertex_count];
        let mut parent: Vec<Option<usize>> = vec![None; vertex_count];

        in_tree[start_index] = true;
        self.relax_from(start_index, &in_tree, &mut best_weight, &mut parent);

        for _ in 1..vertex_count {
            // 选取距离生成树最近的未加入顶点
            let mut chosen: Option<usize> = None;
            for candidate in 0..vertex_count {
                if in_tree[candidate] {
                    continue;
                }
                if let Some(weight) = &best_weight[candidate] {
                    let better = match chosen {
                        Some(current) => match &best_weight[current] {
                            Some(best) => weight < best,
                            None => true,
                        },
                        None => true,
                    };
                    if better {
                        chosen = Some(candidate);
                    }
                }
            }
            let joined = chosen.ok_or_else(|| {
                Error::InvalidOperation("图不连通，无法构造生成树".to_string())
            })?;
            in_tree[joined] = true;
            self.relax_from(joined, &in_tree, &mut best_weight, &mut parent);
        }

        let mut tree = Graph::new(GraphType::Undirected);
        for vertex in self.graph.get_vertices()? {
            tree.add_vertex(vertex)?;
        }
        for index in 0..vertex_count {
            if let (Some(parent_index), Some(weight)) = (parent[index], best_weight[index].clone())
            {
                tree.add_edge(
                    self.graph.vertex_at(parent_index),
                    self.graph.vertex_at(index),
                    weight,
                )?;
            }
        }
        Ok(tree)
    }

    /// 用新并入顶点的邻接边松弛树外顶点
    fn relax_from(
        &self,
        from: usize,
        in_tree: &[bool],
        best_weight: &mut [Option<E>],
        parent: &mut [Option<usize>],
    ) {
        for neighbour in 0..in_tree.len() {
            if in_tree[neighbour] {
                continue;
            }
            if let Some(weight) = self.graph.weight_between(from, neighbour) {
                let improved = match &best_weight[neighbour] {
                    Some(best) => weight < best,
                    None => true,
                };
                if improved {
                    best_weight[neighbour] = Some(weight.clone());
                    parent[neighbour] = Some(from);
                }
            }
        }
    }

    /// Kruskal 最小生成树
    ///
    /// 枚举全部无向边并按权重升序排序，借助并查集贪心地
    /// 选取不成环的边，凑满 V-1 条为止。
    pub fn kruskal(&self) -> Result<Graph<V, E>> {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        if self.graph.graph_type() != GraphType::Undirected {
            return Err(Error::InvalidOperation(
                "最小生成树仅支持无向图".to_string(),
            ));
        }
        let vertices = self.graph.get_vertices()?;
        let vertex_count = vertices.len();
        debug!(vertex_count, "开始 Kruskal 最小生成树构造");

        // 矩阵对称，每条边只收集一次（i < j）
        let mut edges: Vec<Edge<E>> = Vec::new();
        for i in 0..vertex_count {
            for j in (i + 1)..vertex_count {
                if let Some(weight) = self.graph.weight_between(i, j) {
                    edges.push(Edge {
                        start: i,
                        end: j,
                        weight: weight.clone(),
                    });
                }
            }
        }
        edges.sort_by(|a, b| a.weight.cmp(&b.weight));

        let mut partitions = UnionFindSet::new(vertices.iter().cloned());
        let mut tree = Graph::new(GraphType::Undirected);
        for vertex in &vertices {
            tree.add_vertex(vertex.clone())?;
        }
        let required = vertex_count - 1;
        let mut added = 0;
        for edge in edges {
            let start = &vertices[edge.start];
            let end = &vertices[edge.end];
            if !partitions.is_connected(start, end)? {
                partitions.union_set(start, end)?;
                tree.add_edge(start, end, edge.weight)?;
                added += 1;
                if added == required {
                    break;
                }
            }
        }
        if added != required {
            return Err(Error::InvalidOperation(
                "图不连通，无法构造生成树".to_string(),
            ));
        }
        Ok(tree)
    }
}
