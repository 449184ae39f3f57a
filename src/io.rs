/// IO 抽象层模块
///
/// 该模块提供了模板文件读写的抽象接口，遵循依赖倒置原则。
/// 编辑器只依赖 trait，测试时可以替换为内存实现。
///
/// # 架构设计
///
/// - **traits**: 定义 Reader/Writer trait 接口
/// - **template_io**: 基于文件系统的默认实现
///
/// # 使用示例
///
/// ```rust,ignore
/// use template_patcher::io::{DefaultTemplateReader, TemplateReader};
///
/// let reader = DefaultTemplateReader;
/// let data = reader.read(Path::new("chat.ejs"))?;
/// ```
pub mod traits;
pub mod template_io;

// === 导出 trait 定义 ===
pub use traits::{RawTemplateData, TemplateReader, TemplateWriter};

// === 导出默认实现 ===
pub use template_io::{DefaultTemplateReader, DefaultTemplateWriter};
