use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "craftdex")]
#[command(about = "Mod物品图鉴工具：data.json 校验・分类查询", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出每个物品的分类标签明细
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 校验 data.json 并输出统计
    Check {
        /// 图鉴数据文件路径
        #[arg(default_value = "data.json")]
        data: PathBuf,
    },

    /// 列出分类栏候选
    Cats {
        /// 图鉴数据文件路径
        #[arg(default_value = "data.json")]
        data: PathBuf,
    },

    /// 按分类和检索词筛选物品（与网页端同一套引擎）
    List {
        /// 图鉴数据文件路径
        #[arg(default_value = "data.json")]
        data: PathBuf,

        /// 分类（默认"全部"）
        #[arg(short, long)]
        category: Option<String>,

        /// 检索词
        #[arg(short, long)]
        query: Option<String>,

        /// 以 JSON 输出命中的物品
        #[arg(long)]
        json: bool,
    },
}
