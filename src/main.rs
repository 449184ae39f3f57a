use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use template_patcher::patch::start_index_from_line;
use template_patcher::{patch_with, PatchOptions, PatchPlan, RunSummary};

#[derive(Parser)]
#[command(name = "template_patcher")]
#[command(about = "校验模板中的标记行，并把它到结束标记之间的内容替换为固定文本块")]
#[command(version)]
struct Cli {
    /// 补丁计划 JSON 文件（缺失字段使用内置默认值）
    #[arg(long)]
    plan: Option<PathBuf>,

    /// 目标模板文件路径
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 起始行必须包含的标记文本
    #[arg(long)]
    marker: Option<String>,

    /// 起始行行号（从 1 开始）
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    line: Option<u64>,

    /// 结束标记（该行本身保留）
    #[arg(long)]
    terminator: Option<String>,

    /// 从文件读取替换块
    #[arg(long)]
    replacement_file: Option<PathBuf>,

    /// 输出路径（默认覆盖原文件）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 只校验并显示将被替换的内容，不写入
    #[arg(long)]
    dry_run: bool,

    /// 写入前备份原文件
    #[arg(long)]
    backup: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,

    /// 失败时以非零状态退出
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    let summary = run(&cli);

    if !cli.quiet {
        for line in &summary.status {
            println!("{}", line);
        }
    }

    if let Some(error) = &summary.error {
        eprintln!("错误: {}", error);
    }

    if summary.should_fail(cli.strict) {
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> RunSummary {
    let plan = match build_plan(cli) {
        Ok(plan) => plan,
        Err(e) => return RunSummary::from_error(format!("{:#}", e)),
    };

    let options = PatchOptions {
        dry_run: cli.dry_run,
        backup: cli.backup,
        output: cli.output.clone(),
    };

    RunSummary::from_result(&plan, &patch_with(&plan, &options))
}

/// 组合补丁计划：默认值 → JSON 计划文件 → 命令行参数
fn build_plan(cli: &Cli) -> anyhow::Result<PatchPlan> {
    let mut plan = match &cli.plan {
        Some(path) => PatchPlan::load(path)
            .with_context(|| format!("加载补丁计划失败: {:?}", path))?,
        None => PatchPlan::default(),
    };

    if let Some(file) = &cli.file {
        plan.file_path = file.clone();
    }
    if let Some(marker) = &cli.marker {
        plan.expected_marker = marker.clone();
    }
    if let Some(line) = cli.line {
        plan.start_line_index = start_index_from_line(line)
            .with_context(|| format!("行号超出范围: {}", line))?;
    }
    if let Some(terminator) = &cli.terminator {
        plan.terminator = terminator.clone();
    }
    if let Some(replacement_file) = &cli.replacement_file {
        plan.replacement = std::fs::read_to_string(replacement_file)
            .with_context(|| format!("读取替换块文件失败: {:?}", replacement_file))?;
    }

    Ok(plan)
}
