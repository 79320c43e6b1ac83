//! 图算法模块
//!
//! 遍历、最短路径、结构分析与最小生成树

mod shortest_path;
mod spanning_tree;
mod structure;
mod traversal;

pub use shortest_path::ShortestPath;
pub use spanning_tree::SpanningTree;
pub use structure::StructureAnalyzer;
pub use traversal::Traversal;
