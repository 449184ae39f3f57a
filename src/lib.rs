pub mod editor;
pub mod io;
pub mod patch;
pub mod runner;
pub mod template;
pub mod utils;

use std::path::Path;

// 重新导出主要结构
pub use editor::TemplateEditor;
pub use patch::{PatchPlan, PatchRange, PatchReport};
pub use runner::{patch_with, PatchOptions, PatchOutcome, RunSummary};
pub use template::TemplateDocument;
pub use utils::{create_backup, PatchError};

use io::{DefaultTemplateReader, DefaultTemplateWriter};

/// 读取 `plan.file_path`，校验并替换，然后覆盖写回原文件
///
/// 校验或查找失败时不会写入任何内容。
pub fn patch(plan: &PatchPlan) -> Result<PatchReport, PatchError> {
    patch_to(plan, &plan.file_path)
}

/// 与 [`patch`] 相同，但把结果写到 `output`
pub fn patch_to(plan: &PatchPlan, output: &Path) -> Result<PatchReport, PatchError> {
    let mut editor = TemplateEditor::load(&DefaultTemplateReader, &plan.file_path)?;
    let report = editor.apply(plan)?;
    editor.save(&DefaultTemplateWriter, output)?;
    Ok(report)
}
