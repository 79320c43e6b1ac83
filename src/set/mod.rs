//! 集合结构模块
//!
//! 供环检测与 Kruskal 算法使用的并查集

mod union_find;

pub use union_find::UnionFindSet;
