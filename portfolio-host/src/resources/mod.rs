//! # Resources 模块
//!
//! 内容读取：来源抽象、路径规范化、错误类型。

mod error;
pub mod path;
mod source;

pub use error::ResourceError;
pub use source::{FsSource, ResourceSource};
