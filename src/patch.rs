/// 补丁计划与核心替换逻辑
///
/// 流程：校验起始行包含标记 → 从起始行向后查找结束标记 →
/// 用替换块覆盖 `[起始行, 结束行)`，结束行本身保持不变。
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::template::TemplateDocument;
use crate::utils::PatchError;

/// 默认目标文件
pub const DEFAULT_FILE_PATH: &str = "c:/job-ecosystem-backend/src/views/chat.ejs";
/// 默认起始行标记
pub const DEFAULT_MARKER: &str = "chat-day-label";
/// 默认起始行索引（第 132 行）
pub const DEFAULT_START_LINE_INDEX: usize = 131;
/// 默认结束标记
pub const DEFAULT_TERMINATOR: &str = "</ul>";

/// 默认替换块：聊天列表的空状态占位
pub const DEFAULT_REPLACEMENT: &str = r#"                                    <li class="chat-item-start">
                                        <div class="d-flex justify-content-center align-items-center" style="height: 400px; width: 100%;">
                                            <div class="text-center text-muted">
                                                <i class="ri-chat-smile-2-line fs-1"></i>
                                                <p class="mt-2">Select a conversation to start messaging</p>
                                            </div>
                                        </div>
                                    </li>
"#;

/// 补丁计划
///
/// `PatchPlan::default()` 即为内置的 chat.ejs 计划；
/// 从 JSON 加载时缺失的字段回退到默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchPlan {
    pub file_path: PathBuf,
    pub expected_marker: String,
    /// 从 0 开始的行索引
    pub start_line_index: usize,
    pub terminator: String,
    pub replacement: String,
}

impl Default for PatchPlan {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            expected_marker: DEFAULT_MARKER.to_string(),
            start_line_index: DEFAULT_START_LINE_INDEX,
            terminator: DEFAULT_TERMINATOR.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

impl PatchPlan {
    /// 从 JSON 文本解析
    pub fn from_json(json_str: &str) -> Result<Self, PatchError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let content = std::fs::read_to_string(path).map_err(|e| PatchError::io(path, e))?;
        Self::from_json(&content)
    }
}

/// 把 1 起始的行号转换为行索引
///
/// 行号为 0 或超出 `usize` 范围（32 位平台）时返回 `None`。
pub fn start_index_from_line(line: u64) -> Option<usize> {
    line.checked_sub(1).and_then(|index| usize::try_from(index).ok())
}

/// 定位结果（尚未修改文档）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRange {
    /// 起始行索引（包含）
    pub start: usize,
    /// 结束标记所在行索引（不包含）
    pub end: usize,
}

impl PatchRange {
    /// 起始行行号（从 1 开始）
    pub fn start_line(&self) -> usize {
        self.start + 1
    }

    /// 结束行行号（从 1 开始）
    pub fn end_line(&self) -> usize {
        self.end + 1
    }
}

/// 替换报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub range: PatchRange,
    /// 被移除的原始行
    pub removed: Vec<String>,
}

impl PatchReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// 校验起始行并查找结束标记
pub fn locate(doc: &TemplateDocument, plan: &PatchPlan) -> Result<PatchRange, PatchError> {
    let start = plan.start_line_index;
    let line = doc.line(start).ok_or(PatchError::LineOutOfRange {
        line: start + 1,
        total: doc.len(),
    })?;

    if !line.contains(&plan.expected_marker) {
        return Err(PatchError::MarkerMismatch {
            line: start + 1,
            content: line.trim().to_string(),
        });
    }

    let end = doc
        .find_from(start, &plan.terminator)
        .ok_or_else(|| PatchError::TerminatorNotFound {
            terminator: plan.terminator.clone(),
        })?;

    Ok(PatchRange { start, end })
}

/// 在内存中应用补丁计划
///
/// 失败时文档保持不变。
pub fn apply_plan(doc: &mut TemplateDocument, plan: &PatchPlan) -> Result<PatchReport, PatchError> {
    let range = locate(doc, plan)?;
    let removed = doc.splice(range.start..range.end, &plan.replacement);
    Ok(PatchReport { range, removed })
}
