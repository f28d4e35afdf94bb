//! # Resource Source 模块
//!
//! 内容来源抽象层。博客 markdown 和前端静态文件都通过它读取。
//!
//! 所有路径参数都是**逻辑路径**（见 [`super::path`]）。

use std::io::ErrorKind;
use std::path::PathBuf;

use super::ResourceError;
use super::path::normalize_logical_path;

/// 资源来源 trait
pub trait ResourceSource: Send + Sync {
    /// 读取资源字节
    fn read(&self, path: &str) -> Result<Vec<u8>, ResourceError>;

    /// 读取 UTF-8 文本
    fn read_string(&self, path: &str) -> Result<String, ResourceError> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| ResourceError::LoadFailed {
            path: self.full_path(path),
            kind: "text".to_string(),
            message: e.to_string(),
        })
    }

    /// 检查资源是否存在（且是文件）
    fn exists(&self, path: &str) -> bool;

    /// 获取资源的完整路径（用于日志）
    fn full_path(&self, path: &str) -> String;

    /// 列出目录下的文件（不递归）
    ///
    /// # 返回
    /// 按文件名排序的逻辑路径列表；目录无法读取时返回错误
    fn list_files(&self, dir_path: &str) -> Result<Vec<String>, ResourceError>;
}

/// 文件系统资源来源
#[derive(Debug, Clone)]
pub struct FsSource {
    /// 根目录
    base_path: PathBuf,
}

impl FsSource {
    /// 创建文件系统资源来源
    ///
    /// # 参数
    /// - `base_path`: 根目录（如 `content/blog`）
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, logical_path: &str) -> PathBuf {
        let normalized = normalize_logical_path(logical_path);
        if normalized.is_empty() {
            self.base_path.clone()
        } else {
            self.base_path.join(normalized)
        }
    }
}

impl ResourceSource for FsSource {
    fn read(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        let full_path = self.resolve(path);

        std::fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ResourceError::NotFound {
                path: full_path.to_string_lossy().to_string(),
            },
            _ => ResourceError::LoadFailed {
                path: full_path.to_string_lossy().to_string(),
                kind: "file".to_string(),
                message: e.to_string(),
            },
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn full_path(&self, path: &str) -> String {
        self.resolve(path).to_string_lossy().to_string()
    }

    fn list_files(&self, dir_path: &str) -> Result<Vec<String>, ResourceError> {
        let full_dir = self.resolve(dir_path);
        let entries = std::fs::read_dir(&full_dir).map_err(|e| ResourceError::ListFailed {
            path: full_dir.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Ok(relative) = path.strip_prefix(&self.base_path) {
                files.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_source_read_and_list() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.md"), "bee").unwrap();
        std::fs::write(dir.path().join("a.md"), "ay").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let source = FsSource::new(dir.path());
        assert_eq!(source.list_files("").unwrap(), vec!["a.md", "b.md"]);
        assert_eq!(source.read_string("./a.md").unwrap(), "ay");
        assert!(source.exists("b.md"));
        assert!(!source.exists("nested"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::new(dir.path());
        assert!(matches!(
            source.read("missing.md"),
            Err(ResourceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_missing_dir_fails_listing() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::new(dir.path().join("nope"));
        assert!(matches!(
            source.list_files(""),
            Err(ResourceError::ListFailed { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bin.md"), [0xff, 0xfe, 0x00]).unwrap();
        let source = FsSource::new(dir.path());
        assert!(matches!(
            source.read_string("bin.md"),
            Err(ResourceError::LoadFailed { kind, .. }) if kind == "text"
        ));
    }
}
