use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人間向けの表
    #[default]
    Table,
    Csv,
    Json,
    /// 1 ファイル 1 行の JSON
    Jsonl,
    Yaml,
}
