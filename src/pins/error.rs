use thiserror::Error;

use super::model::PinType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PinError {
    /// 对受保护路径的置顶/取消置顶（BadRequest）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Unknown {category:?} item: {key}")]
    UnknownItem { category: PinType, key: String },
    #[error("Pin request carries neither a path nor an item key")]
    MissingItem,
}
