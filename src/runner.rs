/// 运行层模块
///
/// 决定是否备份、是否写入以及写到哪里，并把结果整理成可打印的状态信息。
/// 命令行只负责解析参数和输出这些信息。
use std::fmt::Display;
use std::path::PathBuf;
use crate::editor::TemplateEditor;
use crate::io::{DefaultTemplateReader, DefaultTemplateWriter};
use crate::patch::{PatchPlan, PatchRange};
use crate::utils::{create_backup, PatchError};

/// 运行选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// 只校验并显示将被替换的内容，不写入
    pub dry_run: bool,
    /// 原地写入前备份原文件
    pub backup: bool,
    /// 输出路径（`None` 表示覆盖原文件）
    pub output: Option<PathBuf>,
}

/// 一次成功运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub range: PatchRange,
    /// 被替换掉（dry-run 时为将被替换）的原始行
    pub removed: Vec<String>,
    /// 替换块
    pub replacement: String,
    /// 备份文件路径
    pub backup_path: Option<PathBuf>,
    /// 实际写入的路径，dry-run 时为 `None`
    pub written_to: Option<PathBuf>,
}

impl PatchOutcome {
    pub fn is_dry_run(&self) -> bool {
        self.written_to.is_none()
    }

    /// 生成状态信息（按输出顺序）
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("找到起始行: 第 {} 行", self.range.start_line()),
            format!("找到结束行: 第 {} 行", self.range.end_line()),
        ];

        if let Some(backup_path) = &self.backup_path {
            lines.push(format!("已备份原文件: {:?}", backup_path));
        }

        match &self.written_to {
            Some(output) => lines.push(format!(
                "替换完成：移除 {} 行，输出到: {:?}",
                self.removed.len(),
                output
            )),
            None => {
                lines.push(String::new());
                lines.push("将被移除的行:".to_string());
                for (offset, line) in self.removed.iter().enumerate() {
                    lines.push(format!(
                        "{:>6} - {}",
                        self.range.start_line() + offset,
                        line.trim_end_matches(&['\r', '\n'][..])
                    ));
                }
                lines.push(String::new());
                lines.push("替换为:".to_string());
                for line in self.replacement.lines() {
                    lines.push(format!("       + {}", line));
                }
                lines.push(String::new());
                lines.push("(dry-run) 未写入任何文件".to_string());
            }
        }

        lines
    }
}

/// 按选项执行补丁计划
///
/// 校验、查找失败或 dry-run 时都不会写入任何文件，也不会创建备份。
pub fn patch_with(plan: &PatchPlan, options: &PatchOptions) -> Result<PatchOutcome, PatchError> {
    let mut editor = TemplateEditor::load(&DefaultTemplateReader, &plan.file_path)?;
    let range = editor.preview(plan)?;

    if options.dry_run {
        let removed = (range.start..range.end)
            .filter_map(|index| editor.document().line(index))
            .map(str::to_string)
            .collect();

        return Ok(PatchOutcome {
            range,
            removed,
            replacement: plan.replacement.clone(),
            backup_path: None,
            written_to: None,
        });
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| editor.path().to_path_buf());

    let backup_path = if options.backup && output == editor.path() {
        Some(create_backup(editor.path())?)
    } else {
        None
    };

    let report = editor.apply(plan)?;
    editor.save(&DefaultTemplateWriter, &output)?;

    Ok(PatchOutcome {
        range: report.range,
        removed: report.removed,
        replacement: plan.replacement.clone(),
        backup_path,
        written_to: Some(output),
    })
}

/// 一次运行的汇总：标准输出的状态信息 + 可选的错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub status: Vec<String>,
    pub error: Option<String>,
}

impl RunSummary {
    /// 补丁计划都没能建立时（参数或计划文件错误）
    pub fn from_error(error: impl Display) -> Self {
        Self {
            status: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// 汇总运行结果
    ///
    /// 起始行已通过校验但缺少结束标记时，仍先报告找到了起始行。
    pub fn from_result(plan: &PatchPlan, result: &Result<PatchOutcome, PatchError>) -> Self {
        match result {
            Ok(outcome) => Self {
                status: outcome.status_lines(),
                error: None,
            },
            Err(e @ PatchError::TerminatorNotFound { .. }) => Self {
                status: vec![format!("找到起始行: 第 {} 行", plan.start_line_index + 1)],
                error: Some(e.to_string()),
            },
            Err(e) => Self::from_error(e),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// 是否应以非零状态退出：只有 strict 模式下的失败才会
    pub fn should_fail(&self, strict: bool) -> bool {
        strict && !self.is_success()
    }
}
