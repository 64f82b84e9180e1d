//! 命令行参数定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LK-Wahl 门户 - 科目 pill 栏、时间轴与资料总览
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 配置文件路径 (默认: ~/.config/lk-portal/config.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// 禁用颜色输出
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// 子命令
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 分页显示科目 pill（←→ 翻页，q 退出）
    Pills {
        /// 科目名称
        #[arg(required = true)]
        labels: Vec<String>,

        /// pill 间距（列）
        #[arg(long)]
        gap: Option<f64>,

        /// pill 内边距下限（列）
        #[arg(long = "min-padding")]
        min_padding: Option<f64>,

        /// 指定容器宽度，只输出一次布局结果后退出
        #[arg(short, long)]
        width: Option<f64>,
    },

    /// 显示时间轴与“今天”标记
    Timeline {
        /// 事件文件（TOML，[[events]]）
        #[arg(short, long, value_name = "FILE")]
        events: PathBuf,

        /// 以指定日期作为今天 (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,

        /// 时间轴宽度（列）
        #[arg(short, long, default_value = "60")]
        width: usize,
    },

    /// 在刻度上显示成绩点
    Grades {
        /// 成绩，可用逗号作小数点
        #[arg(required = true)]
        values: Vec<String>,

        /// 刻度下限
        #[arg(long)]
        min: Option<String>,

        /// 刻度上限
        #[arg(long)]
        max: Option<String>,
    },

    /// 生成总览页内容 (videos | klausuren | abs)
    Overview {
        kind: String,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// 生成科目页内容
    Subject {
        /// 科目名称
        name: String,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// 把表格文件链接转成在线查看链接
    OfficeLink {
        /// 文件地址，可为相对地址
        source: String,

        /// 解析相对地址的基准地址
        #[arg(long, default_value = "https://localhost/")]
        base: String,
    },
}

/// 清单来源参数
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// 视频清单（路径或 URL）
    #[arg(long)]
    pub videos: Option<String>,

    /// 资料清单（路径或 URL）
    #[arg(long)]
    pub materials: Option<String>,

    /// 本地路径的基准目录
    #[arg(long = "site-root", value_name = "DIR")]
    pub site_root: Option<PathBuf>,
}
