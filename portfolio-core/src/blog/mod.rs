//! # Blog 模块
//!
//! 博客文章模型与 markdown frontmatter 解析。
//!
//! 这里只处理单篇文章的纯逻辑；目录遍历、文件读取由宿主层负责。

pub mod frontmatter;
mod post;

pub use frontmatter::Frontmatter;
pub use post::{
    BlogPost, DEFAULT_EXCERPT_CHARS, PostDefaults, find_by_slug, parse_post_date,
    sort_by_date_desc,
};
