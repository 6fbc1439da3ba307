use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("モデルが見つかりません: {0}。先に `ollama pull` でダウンロードしてください")]
    ModelNotFound(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("CSVエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SurveyAiError>;
