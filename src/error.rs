//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("容器为空")]
    ContainerIsEmpty,

    #[error("元素不存在: {0}")]
    ElementNotFound(String),

    #[error("值已存在: {0}")]
    DuplicateValue(String),

    #[error("当前图类型不支持该操作: {0}")]
    InvalidOperation(String),

    #[error("图中存在环")]
    CycleDetected,

    #[error("无效参数: {0}")]
    InvalidArgument(String),
}
