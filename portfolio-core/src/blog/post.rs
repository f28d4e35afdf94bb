//! # Post 模块
//!
//! 博客文章数据模型、缺省值规则与排序。

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::frontmatter;
use crate::error::BlogError;

/// 默认摘要长度（字符数）
pub const DEFAULT_EXCERPT_CHARS: usize = 150;

/// 博客文章
///
/// 序列化字段名使用 camelCase，与前端约定一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// 日期（通常为 `YYYY-MM-DD`）
    pub date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    /// markdown 正文
    pub content: String,
    /// 文件名（不含 `.md`）
    pub slug: String,
    pub banner_image: String,
}

/// frontmatter 缺失字段时使用的缺省值
#[derive(Debug, Clone, PartialEq)]
pub struct PostDefaults {
    /// 缺失 date 时使用的日期
    pub today: NaiveDate,
    /// 自动摘要截取的字符数
    pub excerpt_chars: usize,
}

impl PostDefaults {
    /// 以本地当天为缺省日期
    pub fn today() -> Self {
        Self {
            today: chrono::Local::now().date_naive(),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    pub fn with_excerpt_chars(mut self, excerpt_chars: usize) -> Self {
        self.excerpt_chars = excerpt_chars;
        self
    }
}

impl BlogPost {
    /// 从 markdown 原文构建文章
    ///
    /// # 参数
    /// - `id`: 文章 ID（由列表顺序决定）
    /// - `slug`: 文件名（不含扩展名）
    /// - `raw`: 文件全文
    pub fn from_markdown(
        id: impl Into<String>,
        slug: impl Into<String>,
        raw: &str,
        defaults: &PostDefaults,
    ) -> Result<Self, BlogError> {
        let fm = frontmatter::parse(raw)?;

        let excerpt = fm
            .string("excerpt")
            .unwrap_or_else(|| auto_excerpt(&fm.body, defaults.excerpt_chars));

        Ok(Self {
            id: id.into(),
            title: fm.string("title").unwrap_or_else(|| "Untitled".to_string()),
            date: fm
                .string("date")
                .unwrap_or_else(|| defaults.today.format("%Y-%m-%d").to_string()),
            category: fm
                .string("category")
                .unwrap_or_else(|| "Uncategorized".to_string()),
            tags: fm.string_list("tags").unwrap_or_default(),
            excerpt,
            slug: slug.into(),
            banner_image: fm.string("bannerImage").unwrap_or_default(),
            content: fm.body,
        })
    }

    /// 解析后的日期，无法识别时为 `None`
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_post_date(&self.date)
    }
}

/// 截取正文前 `max_chars` 个字符并追加 `...`
fn auto_excerpt(body: &str, max_chars: usize) -> String {
    let mut excerpt: String = body.chars().take(max_chars).collect();
    excerpt.push_str("...");
    excerpt
}

/// 解析文章日期
///
/// 支持 `2026-01-16`、RFC 3339 时间戳、`January 16, 2026`。
pub fn parse_post_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_utc());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime);
    }
    NaiveDate::parse_from_str(value, "%B %d, %Y")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// 按日期倒序排序（稳定排序，无法解析的日期排在最后）
pub fn sort_by_date_desc(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// 按 slug 查找文章
pub fn find_by_slug<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|post| post.slug == slug)
}
