/// 编辑器层模块
///
/// 遵循"修改-保存分离"原则，所有修改操作仅在内存中进行，需要显式调用保存。
///
/// # 使用示例
///
/// ```rust,ignore
/// use template_patcher::{PatchPlan, TemplateEditor};
/// use template_patcher::io::{DefaultTemplateReader, DefaultTemplateWriter};
///
/// let plan = PatchPlan::default();
/// let mut editor = TemplateEditor::load(&DefaultTemplateReader, &plan.file_path)?;
/// let report = editor.apply(&plan)?;
/// println!("替换了 {} 行", report.removed_count());
///
/// editor.save_to_original(&DefaultTemplateWriter)?;
/// ```
pub mod template_editor;

pub use template_editor::TemplateEditor;
