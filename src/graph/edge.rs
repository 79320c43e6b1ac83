//! 边定义
//!
//! 算法内部枚举边时使用的临时三元组

use serde::{Deserialize, Serialize};

/// 边
///
/// 以顶点在存储序列中的位置引用端点，仅在单次算法调用内有效：
/// 删除顶点会使所有后续位置失效。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<E> {
    /// 起点位置
    pub start: usize,
    /// 终点位置
    pub end: usize,
    /// 边权重
    pub weight: E,
}
