#![cfg_attr(docsrs, feature(doc_cfg))]

//! # fpath - File path & size utilities
//! 文件路径与大小工具
//!
//! Stateless helpers for joining path fragments, formatting byte counts with
//! binary prefixes, picking collision-free filenames and splitting paths into
//! components.
//! 无状态工具：拼接路径片段、以二进制前缀格式化字节数、选择无冲突文件名、
//! 拆分路径组件。
//!
//! | Function | Purpose / 用途 |
//! |----------|----------------|
//! | [`concat_paths`] | Join fragments, normalize separators / 拼接片段并规范分隔符 |
//! | [`human_size`]   | Format byte counts (1024-based) / 格式化字节数（1024 进制） |
//! | [`avail_name`]   | Pick an unoccupied filename / 选择未占用的文件名 |
//! | [`path_info`]    | Split into dir/basename/ext/stem / 拆分路径组件 |

mod avail;
mod concat;
pub mod error;
mod human_size;
mod info;

pub use avail::avail_name;
pub use concat::{Seg, concat_paths};
pub use error::{Error, Result};
pub use human_size::{human_size, human_size_with};
pub use info::{PathInfo, ext, path_info};
