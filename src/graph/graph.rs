//! 图数据结构
//!
//! 基于稠密邻接矩阵的内存图存储

use crate::error::{Error, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// 图类型
///
/// 在构造时固定，决定度查询、环检测、最小生成树与拓扑排序的语义。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphType {
    /// 有向图
    Directed,
    /// 无向图
    Undirected,
}

/// 图
///
/// 顶点按插入顺序存储，边权重保存在 |V|×|V| 方阵中，
/// 矩阵第 i 行/列对应第 i 个顶点。`None` 表示无边，
/// 因此权重为零的边也可以正常表示。
/// 无向图的矩阵始终对称，由所有修改操作共同维护。
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    /// 图类型
    graph_type: GraphType,
    /// 顶点序列
    vertices: IndexSet<V>,
    /// 邻接矩阵
    matrix: Vec<Vec<Option<E>>>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
    E: Clone,
{
    /// 创建指定类型的空图
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            vertices: IndexSet::new(),
            matrix: Vec::new(),
        }
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(GraphType::Directed)
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(GraphType::Undirected)
    }

    /// 获取图类型
    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// 图是否为空
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 顶点值必须唯一，矩阵扩展一行一列。
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.vertices.contains(&vertex) {
            return Err(Error::DuplicateValue(format!("顶点 {:?} 已存在", vertex)));
        }
        self.vertices.insert(vertex);
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; self.vertices.len()]);
        Ok(())
    }

    /// 删除顶点
    ///
    /// 删除对应的行与列，其后所有顶点位置前移一位。
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let index = self.find_vertex_index(vertex)?;
        self.vertices.shift_remove_index(index);
        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }
        Ok(())
    }

    /// 判断顶点是否存在
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// 获取所有顶点（按插入顺序）
    pub fn get_vertices(&self) -> Result<Vec<V>> {
        if self.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        Ok(self.vertices.iter().cloned().collect())
    }

    /// 获取顶点数量
    pub fn get_vertex_count(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        Ok(self.vertices.len())
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 两端点必须已存在；同一对端点之间已有边时返回 DuplicateValue，
    /// 需要先显式删除再重新添加。无向图同时写入对称单元格。
    pub fn add_edge(&mut self, start: &V, end: &V, weight: E) -> Result<()> {
        let start_index = self.find_vertex_index(start)?;
        let end_index = self.find_vertex_index(end)?;
        if self.matrix[start_index][end_index].is_some() {
            return Err(Error::DuplicateValue(format!(
                "边 {:?} -> {:?} 已存在",
                start, end
            )));
        }
        self.matrix[start_index][end_index] = Some(weight.clone());
        if self.graph_type == GraphType::Undirected {
            self.matrix[end_index][start_index] = Some(weight);
        }
        Ok(())
    }

    /// 删除边
    ///
    /// 边不存在时不报错；端点不存在时返回 ElementNotFound。
    pub fn remove_edge(&mut self, start: &V, end: &V) -> Result<()> {
        let start_index = self.find_vertex_index(start)?;
        let end_index = self.find_vertex_index(end)?;
        self.matrix[start_index][end_index] = None;
        if self.graph_type == GraphType::Undirected {
            self.matrix[end_index][start_index] = None;
        }
        Ok(())
    }

    /// 判断边是否存在
    pub fn has_edge(&self, start: &V, end: &V) -> Result<bool> {
        let start_index = self.find_vertex_index(start)?;
        let end_index = self.find_vertex_index(end)?;
        Ok(self.matrix[start_index][end_index].is_some())
    }

    /// 获取边权重
    ///
    /// 端点合法但边不存在时返回 `Ok(None)`。
    pub fn get_edge(&self, start: &V, end: &V) -> Result<Option<E>> {
        let start_index = self.find_vertex_index(start)?;
        let end_index = self.find_vertex_index(end)?;
        Ok(self.matrix[start_index][end_index].clone())
    }

    /// 获取边数量（矩阵中非空单元格数，无向边占两个单元格）
    pub fn get_edge_count(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::ContainerIsEmpty);
        }
        let count = self
            .matrix
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum();
        Ok(count)
    }

    /// 获取顶点的邻居（出边指向的顶点，按矩阵行顺序）
    pub fn get_neighbours(&self, vertex: &V) -> Result<Vec<V>> {
        let index = self.find_vertex_index(vertex)?;
        let mut neighbours = Vec::new();
        for (i, cell) in self.matrix[index].iter().enumerate() {
            if cell.is_some() {
                neighbours.push(self.vertices[i].clone());
            }
        }
        Ok(neighbours)
    }

    // ==================== 度查询 ====================

    /// 获取顶点的度
    ///
    /// 无向图为该顶点所在行的边数；有向图为入度与出度之和。
    pub fn get_degree(&self, vertex: &V) -> Result<usize> {
        let index = self.find_vertex_index(vertex)?;
        match self.graph_type {
            GraphType::Undirected => Ok(self.row_degree(index)),
            GraphType::Directed => Ok(self.row_degree(index) + self.column_degree(index)),
        }
    }

    /// 获取顶点的入度（无向图中等于度）
    pub fn get_in_degree(&self, vertex: &V) -> Result<usize> {
        let index = self.find_vertex_index(vertex)?;
        match self.graph_type {
            GraphType::Undirected => Ok(self.row_degree(index)),
            GraphType::Directed => Ok(self.column_degree(index)),
        }
    }

    /// 获取顶点的出度（无向图中等于度）
    pub fn get_out_degree(&self, vertex: &V) -> Result<usize> {
        let index = self.find_vertex_index(vertex)?;
        Ok(self.row_degree(index))
    }

    // ==================== 其他 ====================

    /// 清空图
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.matrix.clear();
    }

    // ==================== 内部访问（算法引擎使用） ====================

    /// 顶点个数
    pub(crate) fn order(&self) -> usize {
        self.vertices.len()
    }

    /// 按位置取顶点
    pub(crate) fn vertex_at(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    /// 查找顶点位置
    pub(crate) fn index_of(&self, vertex: &V) -> Result<usize> {
        self.find_vertex_index(vertex)
    }

    /// 按位置取边权重
    pub(crate) fn weight_between(&self, start: usize, end: usize) -> Option<&E> {
        self.matrix[start][end].as_ref()
    }

    fn find_vertex_index(&self, vertex: &V) -> Result<usize> {
        self.vertices
            .get_index_of(vertex)
            .ok_or_else(|| Error::ElementNotFound(format!("顶点 {:?} 不存在", vertex)))
    }

    fn row_degree(&self, index: usize) -> usize {
        self.matrix[index].iter().filter(|cell| cell.is_some()).count()
    }

    fn column_degree(&self, index: usize) -> usize {
        self.matrix.iter().filter(|row| row[index].is_some()).count()
    }
}

/// 以文本形式输出顶点序列与邻接矩阵，`-` 表示无边
impl<V, E> fmt::Display for Graph<V, E>
where
    V: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices:")?;
        for vertex in &self.vertices {
            write!(f, "{} ", vertex)?;
        }
        writeln!(f)?;
        writeln!(f, "Edges:")?;
        for row in &self.matrix {
            for cell in row {
                match cell {
                    Some(weight) => write!(f, "{} ", weight)?,
                    None => write!(f, "- ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
