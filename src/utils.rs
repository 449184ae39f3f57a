use thiserror::Error;
use std::path::{Path, PathBuf};

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {0:?}")]
    InvalidEncoding(PathBuf),

    #[error("Line {line} is out of range (file has {total} lines)")]
    LineOutOfRange { line: usize, total: usize },

    #[error("Validation failed at line {line}. Content: {content}")]
    MarkerMismatch { line: usize, content: String },

    #[error("Could not find closing {terminator} tag")]
    TerminatorNotFound { terminator: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PatchError {
    /// 创建带路径上下文的 IO 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 是否为校验类失败（文件保证未被修改）
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::LineOutOfRange { .. } | Self::MarkerMismatch { .. } | Self::TerminatorNotFound { .. }
        )
    }
}

/// 创建文件备份
///
/// 备份文件名为 `<原文件名>.<时间戳>.bak`，与原文件位于同一目录。
/// 同一秒内重复备份时追加序号（`.<时间戳>.1.bak`），不会覆盖已有备份。
pub fn create_backup(file_path: &Path) -> Result<PathBuf, PatchError> {
    if !file_path.exists() {
        return Err(PatchError::io(
            file_path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "原文件不存在"),
        ));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S").to_string();
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut backup_path = file_path.with_file_name(format!("{}.{}.bak", file_name, timestamp));
    let mut counter = 1;
    while backup_path.exists() {
        backup_path = file_path.with_file_name(format!("{}.{}.{}.bak", file_name, timestamp, counter));
        counter += 1;
    }

    std::fs::copy(file_path, &backup_path)
        .map_err(|e| PatchError::io(&backup_path, e))?;

    Ok(backup_path)
}
