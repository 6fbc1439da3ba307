//! エラーケーステスト
//!
//! 致命的エラー（入力が読めない等）の挙動を検証

use survey_ai_rust::error::SurveyAiError;
use survey_ai_rust::io;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない入力CSVは致命的エラー
#[test]
fn test_read_nonexistent_csv() {
    let result = io::read_demographics(Path::new("/nonexistent/path/demographics.csv"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, SurveyAiError::FileNotFound(_)));
}

/// 列が欠けたCSVは致命的エラー（行を黙って落とさない）
#[test]
fn test_read_malformed_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.csv");
    std::fs::write(
        &path,
        "country_code,age_group\nJPN,30-39\n",
    )
    .unwrap();

    let result = io::read_demographics(&path);
    assert!(matches!(result, Err(SurveyAiError::Csv(_))));
}

/// ヘッダのみのCSVは空のVecを返す（エラーではない）
#[test]
fn test_read_header_only_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(
        &path,
        "country_code,age_group,gender_category,occupation_category,education_category\n",
    )
    .unwrap();

    let rows = io::read_demographics(&path).unwrap();
    assert!(rows.is_empty());
}

/// SurveyAiErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SurveyAiError::Config("テスト設定エラー".to_string()),
        SurveyAiError::FileNotFound("demographics.csv".to_string()),
        SurveyAiError::ModelNotFound("qwen2.5:7b".to_string()),
        SurveyAiError::ApiCall("接続失敗".to_string()),
        SurveyAiError::ApiParse("チャンク不正".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// ModelNotFoundはpull手順を案内する
#[test]
fn test_model_not_found_message() {
    let err = SurveyAiError::ModelNotFound("gemma2:9b".to_string());
    let display = format!("{}", err);

    assert!(display.contains("gemma2:9b"));
    assert!(display.contains("ollama pull"));
}
