//! Error types for fpath
//! fpath 错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("directory not found: {0}")]
  DirNotFound(Box<str>),
}
