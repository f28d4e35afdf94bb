//! # Frontmatter 模块
//!
//! 拆分 markdown 文件头部的 YAML 元数据与正文。
//!
//! ```text
//! ---
//! title: Hello
//! tags: [rust]
//! ---
//! 正文……
//! ```
//!
//! 没有 frontmatter 的文件：元数据为空，全文作为正文。

use serde_yaml::{Mapping, Value};

use crate::error::BlogError;

/// 分隔行
const DELIMITER: &str = "---";

/// 解析结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frontmatter {
    /// 元数据
    pub metadata: Mapping,
    /// 正文（不含 frontmatter 块）
    pub body: String,
}

impl Frontmatter {
    /// 读取字符串字段
    ///
    /// 空字符串、null、缺失都视为没有值；数字转为字符串。
    pub fn string(&self, key: &str) -> Option<String> {
        match self.metadata.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// 读取字符串列表字段
    ///
    /// 单个字符串视为只有一个元素的列表。
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.metadata.get(key)? {
            Value::Sequence(items) => Some(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::String(s) if !s.is_empty() => Some(vec![s.clone()]),
            _ => None,
        }
    }
}

/// 解析 frontmatter
pub fn parse(raw: &str) -> Result<Frontmatter, BlogError> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(rest) = strip_opening_delimiter(text) else {
        return Ok(Frontmatter {
            metadata: Mapping::new(),
            body: text.to_string(),
        });
    };

    let mut offset = 0;
    let (yaml, body) = loop {
        let line_end = rest[offset..].find('\n').map(|i| offset + i);
        let line = match line_end {
            Some(end) => &rest[offset..end],
            None => &rest[offset..],
        };

        if line.trim_end() == DELIMITER {
            let body = line_end.map(|end| &rest[end + 1..]).unwrap_or("");
            break (&rest[..offset], body);
        }

        match line_end {
            Some(end) => offset = end + 1,
            None => return Err(BlogError::UnterminatedFrontmatter),
        }
    };

    Ok(Frontmatter {
        metadata: parse_metadata(yaml)?,
        body: body.to_string(),
    })
}

/// 第一行是分隔行时返回其后的内容
fn strip_opening_delimiter(text: &str) -> Option<&str> {
    let (first, rest) = match text.find('\n') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => (text, ""),
    };
    (first.trim_end() == DELIMITER).then_some(rest)
}

fn parse_metadata(yaml: &str) -> Result<Mapping, BlogError> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let value: Value = serde_yaml::from_str(yaml).map_err(|e| BlogError::InvalidFrontmatter {
        message: e.to_string(),
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(BlogError::FrontmatterNotMapping),
    }
}
