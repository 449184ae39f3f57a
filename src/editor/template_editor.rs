/// 模板编辑器
///
/// 持有一个已加载的模板文档，应用补丁计划后再统一写回。

use std::path::{Path, PathBuf};
use crate::io::{RawTemplateData, TemplateReader, TemplateWriter};
use crate::patch::{apply_plan, locate, PatchPlan, PatchRange, PatchReport};
use crate::template::TemplateDocument;
use crate::utils::PatchError;

/// 模板编辑器 - 管理模板的修改状态
pub struct TemplateEditor {
    /// 来源路径
    path: PathBuf,
    /// 文档内容
    document: TemplateDocument,
    /// 原文件是否带 BOM
    has_bom: bool,
    /// 已应用的补丁
    applied: Vec<PatchReport>,
}

impl TemplateEditor {
    /// 从内存文本创建编辑器
    pub fn new(path: impl Into<PathBuf>, data: RawTemplateData) -> Self {
        Self {
            path: path.into(),
            document: TemplateDocument::parse(&data.text),
            has_bom: data.has_bom,
            applied: Vec::new(),
        }
    }

    /// 通过 reader 加载文件
    pub fn load(reader: &dyn TemplateReader, path: &Path) -> Result<Self, PatchError> {
        let data = reader.read(path)?;
        Ok(Self::new(path, data))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &TemplateDocument {
        &self.document
    }

    /// 只校验和定位，不修改文档
    pub fn preview(&self, plan: &PatchPlan) -> Result<PatchRange, PatchError> {
        locate(&self.document, plan)
    }

    /// 应用补丁计划（仅修改内存状态）
    ///
    /// 失败时文档保持不变，也不会记录修改。
    pub fn apply(&mut self, plan: &PatchPlan) -> Result<PatchReport, PatchError> {
        let report = apply_plan(&mut self.document, plan)?;
        self.applied.push(report.clone());
        Ok(report)
    }

    /// 检查是否有修改
    pub fn is_modified(&self) -> bool {
        !self.applied.is_empty()
    }

    /// 获取修改数量
    pub fn modified_count(&self) -> usize {
        self.applied.len()
    }

    /// 生成待写入的数据
    pub fn to_raw(&self) -> RawTemplateData {
        RawTemplateData {
            text: self.document.render(),
            has_bom: self.has_bom,
        }
    }

    /// 保存到文件（需要显式调用）
    pub fn save(&self, writer: &dyn TemplateWriter, path: &Path) -> Result<(), PatchError> {
        writer.write(&self.to_raw(), path)
    }

    /// 保存到原路径
    pub fn save_to_original(&self, writer: &dyn TemplateWriter) -> Result<(), PatchError> {
        self.save(writer, &self.path)
    }
}
