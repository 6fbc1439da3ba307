use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use survey_ai_rust::{cli, client, config, error, generator, io, preview};

use cli::{Cli, Commands};
use client::OllamaClient;
use config::Config;
use error::{Result, SurveyAiError};
use generator::SurveyRunner;
use survey_ai_common::dimensions::validate_definitions;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 静的テーブルの整合性は起動時に一度だけ検証する
    validate_definitions().map_err(|e| SurveyAiError::Config(e.to_string()))?;

    let config = Config::load()?;

    let result = run_command(cli, config).await;
    if let Err(ref e) = result {
        tracing::error!(error = %e, "致命的エラーで終了");
    }
    result
}

async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Run { input, output, model, limit, no_validate_model } => {
            println!("📋 survey-ai - 調査回答生成\n");

            let model = model.unwrap_or_else(|| config.model.clone());

            // 1. 入力読み込み
            println!("[1/3] デモグラフィックデータを読み込み中...");
            let mut rows = io::read_demographics(&input)?;
            if let Some(limit) = limit {
                rows.truncate(limit);
            }
            println!("✔ {}行を検出\n", rows.len());

            // 2. モデル確認
            let ollama = OllamaClient::from_config(&config, model)?;
            if no_validate_model {
                println!("[2/3] モデル確認をスキップ\n");
            } else {
                println!("[2/3] モデルを確認中... ({})", ollama.model());
                ollama.validate_model().await?;
                println!("✔ モデル確認完了\n");
            }

            // 3. 行ごとに生成して逐次書き込み
            println!("[3/3] 回答生成中... (モデル: {})", ollama.model());
            let started = chrono::Local::now();
            tracing::info!(rows = rows.len(), model = ollama.model(), "生成開始");

            let runner = SurveyRunner::new(&ollama, ollama.model());
            let mut writer = io::SurveyWriter::create(&output)?;

            let pb = ProgressBar::new(rows.len() as u64);
            pb.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} rows ({eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            for ctx in &rows {
                let row = runner.process_row(ctx).await;
                writer.write_row(&row)?;
                pb.inc(1);
            }
            pb.finish();

            let elapsed = chrono::Local::now() - started;
            tracing::info!(rows = rows.len(), "生成完了");
            println!("\n✔ {}行を書き込み: {}", rows.len(), output.display());
            println!("  所要時間: {}秒", elapsed.num_seconds());
            println!("\n✅ 完了");
        }

        Commands::Preview { input, row } => {
            println!("🔍 survey-ai - プロンプトプレビュー\n");

            let rows = io::read_demographics(&input)?;
            let ctx = rows.get(row).ok_or_else(|| {
                SurveyAiError::Config(format!(
                    "行 {} は範囲外です（{}行中）",
                    row,
                    rows.len()
                ))
            })?;

            println!("{}", preview::preview_text(ctx));
        }

        Commands::Models => {
            let ollama = OllamaClient::from_config(&config, config.model.clone())?;
            let models = ollama.list_models().await?;

            println!("ローカルモデル一覧:");
            if models.is_empty() {
                println!("  (なし)");
            }
            for model in models {
                println!("  - {}", model);
            }
        }

        Commands::Config { set_model, set_host, show } => {
            let mut config = config;

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if let Some(host) = set_host {
                config.set_host(host)?;
                println!("✔ ホストを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  ホスト: {}", config.host);
                println!("  temperature: {}", config.temperature);
                println!("  top_p: {}", config.top_p);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "survey_ai_rust=debug,survey_ai_common=debug"
    } else {
        "survey_ai_rust=info,survey_ai_common=warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
