use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "survey-ai")]
#[command(about = "文化調査AI回答生成ツール（ローカルLLMペルソナ）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// デモグラフィックCSVを読み、調査回答CSVを生成
    Run {
        /// デモグラフィックデータCSVのパス
        #[arg(required = true)]
        input: PathBuf,

        /// 出力CSVファイル
        #[arg(short, long, default_value = "cultural_survey_responses.csv")]
        output: PathBuf,

        /// 使用モデル（省略時は設定ファイルの値）
        #[arg(short, long)]
        model: Option<String>,

        /// 処理する行数の上限（テスト実行用）
        #[arg(long)]
        limit: Option<usize>,

        /// 実行前のモデル存在チェックをスキップ
        #[arg(long)]
        no_validate_model: bool,
    },

    /// 1行分のプロンプトを表示（モデル呼び出しなし）
    Preview {
        /// デモグラフィックデータCSVのパス
        #[arg(required = true)]
        input: PathBuf,

        /// 対象行（0始まり）
        #[arg(long, default_value = "0")]
        row: usize,
    },

    /// ローカルOllamaのモデル一覧を表示
    Models,

    /// 設定を表示/編集
    Config {
        /// 使用モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// OllamaホストURLを設定
        #[arg(long)]
        set_host: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
