/// 模板文件 IO 实现
///
/// 提供基于文件系统的默认读写实现。写入为直接覆盖，没有临时文件+重命名，
/// 写入过程中断可能导致目标文件被截断。
use std::path::Path;
use encoding_rs::{Encoding, UTF_8};
use super::traits::{RawTemplateData, TemplateReader, TemplateWriter};
use crate::utils::PatchError;

/// 默认的模板读取器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultTemplateReader;

impl DefaultTemplateReader {
    /// 解码字节数据，识别并去除 UTF-8 BOM
    pub fn decode(bytes: &[u8], path: &Path) -> Result<RawTemplateData, PatchError> {
        let (has_bom, body) = match Encoding::for_bom(bytes) {
            Some((encoding, bom_len)) if encoding == UTF_8 => (true, &bytes[bom_len..]),
            // UTF-16 等其他编码
            Some(_) => return Err(PatchError::InvalidEncoding(path.to_path_buf())),
            None => (false, bytes),
        };

        let text = UTF_8
            .decode_without_bom_handling_and_without_replacement(body)
            .ok_or_else(|| PatchError::InvalidEncoding(path.to_path_buf()))?;

        Ok(RawTemplateData {
            text: text.into_owned(),
            has_bom,
        })
    }
}

impl TemplateReader for DefaultTemplateReader {
    fn read(&self, path: &Path) -> Result<RawTemplateData, PatchError> {
        let bytes = std::fs::read(path).map_err(|e| PatchError::io(path, e))?;
        Self::decode(&bytes, path)
    }
}

/// 默认的模板写入器（基于 std::fs）
#[derive(Debug, Clone, Default)]
pub struct DefaultTemplateWriter;

impl TemplateWriter for DefaultTemplateWriter {
    fn write(&self, data: &RawTemplateData, path: &Path) -> Result<(), PatchError> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| PatchError::io(parent, e))?;
            }
        }

        std::fs::write(path, data.to_bytes()).map_err(|e| PatchError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_reader() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("chat.ejs");
        std::fs::write(&test_file, "<ul>\n</ul>\n").unwrap();

        let result = DefaultTemplateReader.read(&test_file).unwrap();

        assert_eq!(result.text, "<ul>\n</ul>\n");
        assert!(!result.has_bom);
    }

    #[test]
    fn test_reader_strips_and_remembers_bom() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("bom.ejs");
        std::fs::write(&test_file, b"\xEF\xBB\xBF<ul>\n").unwrap();

        let result = DefaultTemplateReader.read(&test_file).unwrap();

        assert_eq!(result.text, "<ul>\n");
        assert!(result.has_bom);
        assert_eq!(result.to_bytes(), b"\xEF\xBB\xBF<ul>\n");
    }

    #[test]
    fn test_reader_rejects_invalid_utf8() {
        let path = Path::new("broken.ejs");
        let result = DefaultTemplateReader::decode(b"<ul>\xFF\xFE</ul>", path);
        assert!(matches!(result, Err(PatchError::InvalidEncoding(_))));
    }

    #[test]
    fn test_reader_rejects_utf16_bom() {
        let path = Path::new("utf16.ejs");
        let result = DefaultTemplateReader::decode(b"\xFF\xFE<\x00u\x00", path);
        assert!(matches!(result, Err(PatchError::InvalidEncoding(_))));
    }

    #[test]
    fn test_reader_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = DefaultTemplateReader.read(&temp_dir.path().join("missing.ejs"));
        assert!(matches!(result, Err(PatchError::Io { .. })));
    }

    #[test]
    fn test_writer_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("views").join("chat.ejs");

        DefaultTemplateWriter
            .write(&RawTemplateData::new("<ul></ul>\n"), &test_file)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&test_file).unwrap(), "<ul></ul>\n");
    }
}
