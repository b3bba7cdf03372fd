// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "script_encoder",
    version = crate::VERSION,
    about = "ソースファイルの文字コードを判定し、UTF-8 (BOM 付き) + CRLF に変換する",
    long_about = "Detects Shift_JIS, EUC-JP, ISO-2022-JP, UTF-16LE, ASCII and UTF-8 source files \
                  and rewrites them as UTF-8 with a byte order mark and CRLF line endings. \
                  Files already in UTF-8 with BOM, and files whose encoding cannot be \
                  determined, are left untouched."
)]
pub struct Args {
    /// 対象のファイル/ディレクトリ (省略時はカレントディレクトリ)
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
#[command(next_help_heading = "フィルタ")]
pub struct FilterArgs {
    /// 対象拡張子 (カンマ区切り/複数指定可)
    #[arg(long, value_delimiter = ',', default_value = "cs")]
    pub ext: Vec<String>,

    /// 拡張子に関係なく全ファイルを対象にする
    #[arg(long)]
    pub all: bool,
}

#[derive(ClapArgs, Debug)]
#[command(next_help_heading = "走査")]
pub struct ScanArgs {
    /// 隠しファイル/ディレクトリも対象にする
    #[arg(long)]
    pub hidden: bool,

    /// .gitignore を無視する
    #[arg(long)]
    pub no_gitignore: bool,

    /// 最大探索深さ
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// シンボリックリンクを辿る
    #[arg(long)]
    pub follow: bool,

    /// 並列数 (既定: CPU 数)
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,
}

#[derive(ClapArgs, Debug)]
#[command(next_help_heading = "動作")]
#[allow(clippy::struct_excessive_bools)]
pub struct BehaviorArgs {
    /// 書き換えずに結果だけ表示する
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// デコード時に不正なバイト列があっても置換文字で書き込む
    #[arg(long)]
    pub allow_lossy: bool,

    /// 最初のエラーで中断する
    #[arg(long)]
    pub strict: bool,

    /// 変更を監視して自動変換する
    #[arg(short = 'w', long)]
    pub watch: bool,

    /// 監視時のデバウンス間隔 (秒)
    #[arg(long, requires = "watch", default_value_t = 1)]
    pub watch_interval: u64,
}

#[derive(ClapArgs, Debug)]
#[command(next_help_heading = "出力")]
pub struct OutputArgs {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// 詳細ログ (debug)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// 警告以上のみ表示
    #[arg(short, long)]
    pub quiet: bool,
}
