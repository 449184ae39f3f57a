/// IO 抽象层 - trait 定义
///
/// 只负责字节与文本之间的转换和文件读写，不负责行切分与替换。

use std::path::Path;
use crate::utils::PatchError;

/// UTF-8 BOM
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 模板文件的原始文本
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTemplateData {
    /// 去除 BOM 后的文本
    pub text: String,
    /// 原文件是否带有 UTF-8 BOM（写回时保留）
    pub has_bom: bool,
}

impl RawTemplateData {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            has_bom: false,
        }
    }

    /// 转换为待写入的字节
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.text.len() + UTF8_BOM.len());
        if self.has_bom {
            bytes.extend_from_slice(UTF8_BOM);
        }
        bytes.extend_from_slice(self.text.as_bytes());
        bytes
    }
}

/// 模板文件读取 trait
///
/// # 职责
/// - 读取文件并按 UTF-8 解码
/// - 非法 UTF-8 返回错误，不做有损替换
pub trait TemplateReader {
    fn read(&self, path: &Path) -> Result<RawTemplateData, PatchError>;
}

/// 模板文件写入 trait
///
/// # 职责
/// - 将文本整体写入目标路径（覆盖写）
pub trait TemplateWriter {
    fn write(&self, data: &RawTemplateData, path: &Path) -> Result<(), PatchError>;
}
