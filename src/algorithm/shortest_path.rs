//! 最短路径算法
//!
//! 单源最短路径（Dijkstra）与全源最短路径（Floyd-Warshall）

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphType};
use num_traits::Zero;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 最短路径引擎
pub struct ShortestPath<'a, V, E> {
    graph: &'a Graph<V, E>,
}

impl<'a, V, E> ShortestPath<'a, V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Clone + Ord + Zero,
{
    /// 创建最短路径引擎
    pub fn new(graph: &'a Graph<V, E>) -> Self {
        Self { graph }
    }

    /// Dijkstra 单源最短路径
    ///
    /// 仅支持有向图。要求所有边权重非负，由调用方保证，
    /// 存在负权重时结果未定义。返回按顶点存储顺序排列的
    /// 最短距离，不可达顶点为 `None`。
    pub fn dijkstra(&self, start: &V) -> Result<Vec<Option<E>>> {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        if self.graph.graph_type() != GraphType::Directed {
            return Err(Error::InvalidOperation(
                "Dijkstra 仅支持有向图".to_string(),
            ));
        }
        let start_index = self.graph.index_of(start)?;
        let vertex_count = self.graph.order();
        debug!(vertex_count, "开始 Dijkstra 单源最短路径计算");

        let mut distances: Vec<Option<E>> = vec![None; vertex_count];
        let mut processed = vec![false; vertex_count];
        let mut frontier: PriorityQueue<usize, Reverse<E>> = PriorityQueue::new();
        distances[start_index] = Some(E::zero());
        frontier.push(start_index, Reverse(E::zero()));

        while let Some((current, _)) = frontier.pop() {
            if processed[current] {
                continue;
            }
            processed[current] = true;
            let current_distance = match distances[current].clone() {
                Some(distance) => distance,
                None => continue,
            };
            for neighbour in 0..vertex_count {
                if processed[neighbour] {
                    continue;
                }
                if let Some(weight) = self.graph.weight_between(current, neighbour) {
                    let candidate = current_distance.clone() + weight.clone();
                    let improved = match &distances[neighbour] {
                        Some(best) => candidate < *best,
                        None => true,
                    };
                    if improved {
                        distances[neighbour] = Some(candidate.clone());
                        // 重复 push 只会更新已排队顶点的优先级
                        frontier.push(neighbour, Reverse(candidate));
                    }
                }
            }
        }
        Ok(distances)
    }

    /// Floyd-Warshall 全源最短路径
    ///
    /// 支持任意图类型。返回 |V|×|V| 距离矩阵，对角线为零，
    /// 不可达为 `None`。O(V³) 时间，O(V²) 空间。
    pub fn floyd(&self) -> Result<Vec<Vec<Option<E>>>> {
        if self.graph.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        let vertex_count = self.graph.order();
        debug!(vertex_count, "开始 Floyd 全源最短路径计算");

        let mut distances: Vec<Vec<Option<E>>> = vec![vec![None; vertex_count]; vertex_count];
        for i in 0..vertex_count {
            for j in 0..vertex_count {
                if i == j {
                    distances[i][j] = Some(E::zero());
                } else {
                    distances[i][j] = self.graph.weight_between(i, j).cloned();
                }
            }
        }
        for k in 0..vertex_count {
            for i in 0..vertex_count {
                for j in 0..vertex_count {
                    // 两段都可达时才松弛，避免把“无穷大”参与加法
                    let through = match (&distances[i][k], &distances[k][j]) {
                        (Some(left), Some(right)) => Some(left.clone() + right.clone()),
                        _ => None,
                    };
                    if let Some(candidate) = through {
                        let improved = match &distances[i][j] {
                            Some(best) => candidate < *best,
                            None => true,
                        };
                        if improved {
                            distances[i][j] = Some(candidate);
                        }
                    }
                }
            }
        }
        Ok(distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dijkstra_triangle() {
        // A -> B (1), B -> C (1), A -> C (5)：经 B 中转更短
        let mut graph: Graph<&str, u64> = Graph::directed();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_vertex("C").unwrap();
        graph.add_edge(&"A", &"B", 1).unwrap();
        graph.add_edge(&"B", &"C", 1).unwrap();
        graph.add_edge(&"A", &"C", 5).unwrap();

        let distances = ShortestPath::new(&graph).dijkstra(&"A").unwrap();
        assert_eq!(distances, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let mut graph: Graph<&str, u64> = Graph::directed();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_vertex("C").unwrap();
        graph.add_edge(&"A", &"B", 2).unwrap();

        let distances = ShortestPath::new(&graph).dijkstra(&"A").unwrap();
        assert_eq!(distances[0], Some(0));
        assert_eq!(distances[1], Some(2));
        // 不可达顶点保持 None
        assert_eq!(distances[2], None);
    }

    #[test]
    fn test_dijkstra_relaxation_property() {
        let mut graph: Graph<&str, u64> = Graph::directed();
        for vertex in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(vertex).unwrap();
        }
        let edges = [
            ("A", "B", 4),
            ("A", "C", 1),
            ("C", "B", 2),
            ("B", "D", 5),
            ("C", "D", 8),
            ("D", "E", 3),
        ];
        for (start, end, weight) in edges {
            graph.add_edge(&start, &end, weight).unwrap();
        }

        let vertices = graph.get_vertices().unwrap();
        let distances = ShortestPath::new(&graph).dijkstra(&"A").unwrap();
        assert_eq!(distances[0], Some(0));

        // 对每条边 (u, v, w)：dist[v] <= dist[u] + w
        for (start, end, weight) in edges {
            let u = vertices.iter().position(|v| *v == start).unwrap();
            let v = vertices.iter().position(|x| *x == end).unwrap();
            if let Some(du) = distances[u] {
                let dv = distances[v].expect("从可达顶点出发的边终点必然可达");
                assert!(dv <= du + weight);
            }
        }
    }

    #[test]
    fn test_dijkstra_undirected_rejected() {
        let mut graph: Graph<&str, u64> = Graph::undirected();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_edge(&"A", &"B", 1).unwrap();

        assert!(matches!(
            ShortestPath::new(&graph).dijkstra(&"A"),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_dijkstra_errors() {
        let empty: Graph<&str, u64> = Graph::directed();
        assert!(matches!(
            ShortestPath::new(&empty).dijkstra(&"A"),
            Err(Error::ContainerIsEmpty)
        ));

        let mut graph: Graph<&str, u64> = Graph::directed();
        graph.add_vertex("A").unwrap();
        assert!(matches!(
            ShortestPath::new(&graph).dijkstra(&"X"),
            Err(Error::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_floyd_diagonal_and_edges() {
        let mut graph: Graph<&str, u64> = Graph::directed();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_edge(&"A", &"B", 7).unwrap();

        let distances = ShortestPath::new(&graph).floyd().unwrap();
        assert_eq!(distances[0][0], Some(0));
        assert_eq!(distances[1][1], Some(0));
        assert_eq!(distances[0][1], Some(7));
        assert_eq!(distances[1][0], None);
    }

    #[test]
    fn test_floyd_matches_dijkstra() {
        let mut graph: Graph<&str, u64> = Graph::directed();
        for vertex in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(vertex).unwrap();
        }
        graph.add_edge(&"A", &"B", 4).unwrap();
        graph.add_edge(&"A", &"C", 1).unwrap();
        graph.add_edge(&"C", &"B", 2).unwrap();
        graph.add_edge(&"B", &"D", 5).unwrap();
        graph.add_edge(&"C", &"D", 8).unwrap();
        graph.add_edge(&"D", &"E", 3).unwrap();
        graph.add_edge(&"E", &"A", 2).unwrap();

        let engine = ShortestPath::new(&graph);
        let all_pairs = engine.floyd().unwrap();
        for (i, vertex) in graph.get_vertices().unwrap().iter().enumerate() {
            let single_source = engine.dijkstra(vertex).unwrap();
            assert_eq!(all_pairs[i], single_source, "从 {:?} 出发的距离不一致", vertex);
        }
    }

    #[test]
    fn test_floyd_undirected() {
        // Floyd 对无向图同样有效
        let mut graph: Graph<&str, u64> = Graph::undirected();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_vertex("C").unwrap();
        graph.add_edge(&"A", &"B", 3).unwrap();
        graph.add_edge(&"B", &"C", 4).unwrap();

        let distances = ShortestPath::new(&graph).floyd().unwrap();
        assert_eq!(distances[0][2], Some(7));
        assert_eq!(distances[2][0], Some(7));
    }
}
