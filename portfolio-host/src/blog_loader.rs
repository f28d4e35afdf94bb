//! # Blog Loader 模块
//!
//! 从内容目录加载博客文章。
//!
//! ## 加载规则
//!
//! - 只读取目录下的 `.md` 文件（不递归，扩展名区分大小写），按文件名排序
//! - 文章 ID 是文件在排序列表中的位置（从 1 开始）
//! - 单个文件读取或解析失败：记录日志并跳过
//! - 目录本身无法读取：整个加载失败
//! - 结果按日期倒序

use std::sync::Arc;

use portfolio_core::Logger;
use portfolio_core::blog::{BlogPost, PostDefaults, find_by_slug, sort_by_date_desc};
use tracing::{debug, warn};

use crate::resources::path::file_stem;
use crate::resources::{ResourceError, ResourceSource};

/// 博客文章仓库
#[derive(Clone)]
pub struct BlogStore {
    source: Arc<dyn ResourceSource>,
    excerpt_chars: usize,
    logger: Logger,
}

impl BlogStore {
    pub fn new(source: Arc<dyn ResourceSource>, excerpt_chars: usize, logger: Logger) -> Self {
        Self {
            source,
            excerpt_chars,
            logger,
        }
    }

    /// 以当天日期为缺省值加载全部文章
    pub fn list(&self) -> Result<Vec<BlogPost>, ResourceError> {
        self.list_with(&PostDefaults::today().with_excerpt_chars(self.excerpt_chars))
    }

    /// 使用指定缺省值加载全部文章
    pub fn list_with(&self, defaults: &PostDefaults) -> Result<Vec<BlogPost>, ResourceError> {
        let files: Vec<String> = self
            .source
            .list_files("")?
            .into_iter()
            .filter(|path| path.ends_with(".md"))
            .collect();

        let mut posts = Vec::with_capacity(files.len());
        for (index, path) in files.iter().enumerate() {
            match self.load_one(index + 1, path, defaults) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    warn!(parent: self.logger.span(), error = %e, "文章加载失败，已跳过");
                }
            }
        }

        sort_by_date_desc(&mut posts);
        debug!(parent: self.logger.span(), files = files.len(), loaded = posts.len(), "博客文章加载完成");
        Ok(posts)
    }

    /// 按 slug 查找文章
    ///
    /// ID 与列表接口保持一致，所以这里仍然加载整个目录。
    pub fn find(&self, slug: &str) -> Result<Option<BlogPost>, ResourceError> {
        let posts = self.list()?;
        Ok(find_by_slug(&posts, slug).cloned())
    }

    fn load_one(
        &self,
        id: usize,
        path: &str,
        defaults: &PostDefaults,
    ) -> Result<BlogPost, ResourceError> {
        let raw = self.source.read_string(path)?;
        BlogPost::from_markdown(id.to_string(), file_stem(path), &raw, defaults).map_err(|e| {
            ResourceError::InvalidFormat {
                path: self.source.full_path(path),
                message: e.to_string(),
            }
        })
    }
}

impl std::fmt::Debug for BlogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogStore")
            .field("root", &self.source.full_path(""))
            .field("excerpt_chars", &self.excerpt_chars)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::FsSource;
    use chrono::NaiveDate;
    use std::fs;

    fn defaults() -> PostDefaults {
        PostDefaults {
            today: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            excerpt_chars: 150,
        }
    }

    fn store(dir: &std::path::Path) -> BlogStore {
        BlogStore::new(Arc::new(FsSource::new(dir)), 150, Logger::disabled())
    }

    #[test]
    fn test_ids_follow_file_order_and_output_is_date_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a-old.md"), "---\ndate: 2025-01-01\n---\nold").unwrap();
        fs::write(dir.path().join("b-new.md"), "---\ndate: 2026-01-16\n---\nnew").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(dir.path().join("SHOUT.MD"), "---\ndate: 2027-01-01\n---\nloud").unwrap();

        let posts = store(dir.path()).list_with(&defaults()).unwrap();
        let summary: Vec<(&str, &str)> = posts
            .iter()
            .map(|p| (p.id.as_str(), p.slug.as_str()))
            .collect();
        assert_eq!(summary, vec![("2", "b-new"), ("1", "a-old")]);
    }

    #[test]
    fn test_broken_file_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\ntitle: [oops\n---\n").unwrap();
        fs::write(dir.path().join("b.md"), "---\ntitle: Fine\n---\nbody").unwrap();

        let posts = store(dir.path()).list_with(&defaults()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Fine");
        assert_eq!(posts[0].id, "2");
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = store(&dir.path().join("missing")).list_with(&defaults());
        assert!(matches!(result, Err(ResourceError::ListFailed { .. })));
    }

    #[test]
    fn test_find_by_slug() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.md"), "---\ntitle: Hi\n---\nbody").unwrap();

        let store = store(dir.path());
        assert_eq!(store.find("hello").unwrap().map(|p| p.title), Some("Hi".to_string()));
        assert_eq!(store.find("nope").unwrap(), None);
    }
}
