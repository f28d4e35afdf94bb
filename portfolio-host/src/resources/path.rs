//! # 路径规范化模块
//!
//! 所有资源访问都使用**相对于来源根目录的逻辑路径**：
//! - 使用 `/` 作为路径分隔符
//! - 不包含开头的 `/` 或 `./`
//! - `..` 不会越过根目录

/// 规范化逻辑路径
///
/// - 统一使用 `/` 分隔符
/// - 跳过空组件与 `.`
/// - `..` 移除上一个组件，到根目录为止
pub fn normalize_logical_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");

    let mut components = Vec::new();
    for component in normalized.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            _ => components.push(component),
        }
    }

    components.join("/")
}

/// 提取文件名（不含扩展名）
///
/// 博客文章以此作为 slug。
pub fn file_stem(path: &str) -> &str {
    let filename = path.rsplit('/').next().unwrap_or(path);
    match filename.rfind('.') {
        Some(0) | None => filename,
        Some(dot) => &filename[..dot],
    }
}
