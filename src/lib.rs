//! DenseGraph - 稠密邻接矩阵图引擎
//!
//! 单机内存图引擎，顶点序列 + 稠密权重矩阵，支持：
//! - 有向图与无向图，顶点/边的增删查与度查询
//! - 深度优先（递归 / 显式栈）与广度优先遍历
//! - 最短路径（Dijkstra 单源、Floyd 全源）
//! - 拓扑排序与按图类型区分的环检测
//! - 最小生成树（Prim、Kruskal）与配套并查集

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod set;

// 重导出常用类型
pub use algorithm::{ShortestPath, SpanningTree, StructureAnalyzer, Traversal};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphType};
pub use set::UnionFindSet;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
