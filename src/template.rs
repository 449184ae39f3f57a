/// 模板文档模块
///
/// 将模板文本按行切分，每一行保留自身的换行符（`\n` 或 `\r\n`），
/// 因此把所有行直接拼接即可逐字节还原原始文本。
use std::ops::Range;

/// 按行存储的模板文档
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDocument {
    lines: Vec<String>,
}

impl TemplateDocument {
    /// 解析文本为行序列（保留换行符）
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// 获取指定行（从 0 开始）
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 从 `start`（包含）开始查找第一个包含 `needle` 的行
    pub fn find_from(&self, start: usize, needle: &str) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, line)| line.contains(needle))
            .map(|(index, _)| index)
    }

    /// 用单个文本块替换半开区间 `range` 内的所有行
    ///
    /// 文本块原样插入，可以包含多个换行符；插入后它在文档中只占一个条目。
    pub fn splice(&mut self, range: Range<usize>, block: &str) -> Vec<String> {
        self.lines.splice(range, std::iter::once(block.to_string())).collect()
    }

    /// 重新拼接为完整文本
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}
