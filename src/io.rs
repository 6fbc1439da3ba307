//! CSV入出力
//!
//! 入力: デモグラフィック5列のCSV（ヘッダ名でデシリアライズ）。
//! 出力: 1入力行につき1レコードを書き、即フラッシュする。
//! 中断時も書き込み済みの行はそれぞれ完結したレコードとして残る。

use crate::error::{Result, SurveyAiError};
use std::fs::File;
use std::path::Path;
use survey_ai_common::dimensions::Dimension;
use survey_ai_common::questions::QUESTIONS;
use survey_ai_common::types::{DemographicContext, SurveyRow};

/// デモグラフィックCSVを読み込む
///
/// 読めない場合は致命的エラーとして呼び出し元へ伝播する。
pub fn read_demographics(path: &Path) -> Result<Vec<DemographicContext>> {
    if !path.is_file() {
        return Err(SurveyAiError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<std::result::Result<Vec<DemographicContext>, csv::Error>>()?;
    Ok(rows)
}

/// 出力CSVのヘッダ行
///
/// デモグラフィック列 → 設問ごとの4列グループ → Hofstede_Prompt →
/// スコア6列 → カテゴリ6列 → 理由6列。
pub fn csv_headers() -> Vec<String> {
    let mut headers: Vec<String> = DemographicContext::FIELD_NAMES
        .iter()
        .map(|name| name.to_string())
        .collect();

    for question in QUESTIONS {
        headers.push(format!("{}_Prompt", question.aspect));
        headers.push(format!("{}_Importance_Rating", question.aspect));
        headers.push(format!("{}_Reasoning_Prompt", question.aspect));
        headers.push(format!("{}_Importance_Reasoning", question.aspect));
    }

    headers.push("Hofstede_Prompt".to_string());
    for dimension in Dimension::ALL {
        headers.push(format!("{}_Score", dimension.key()));
    }
    for dimension in Dimension::ALL {
        headers.push(format!("{}_Category", dimension.key()));
    }
    for dimension in Dimension::ALL {
        headers.push(format!("{}_Reasoning", dimension.key()));
    }

    headers
}

/// スコアのCSV表記（整数値なら小数点を付けない）
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

/// 1行分のレコードをヘッダと同順で展開する
pub fn record_for(row: &SurveyRow) -> Vec<String> {
    let mut record: Vec<String> = row
        .demographics
        .values()
        .iter()
        .map(|value| value.to_string())
        .collect();

    for question in &row.questions {
        record.push(question.prompt.clone());
        record.push(question.rating.to_string());
        record.push(question.reasoning_prompt.clone());
        record.push(question.reasoning.clone());
    }

    record.push(row.hofstede_prompt.clone());
    // スコア6列 → カテゴリ6列（交互にしない）
    for score in row.hofstede.scores {
        record.push(format_score(score));
    }
    for category in row.hofstede.categories {
        record.push(category.to_string());
    }
    for reasoning in &row.dimension_reasonings {
        record.push(reasoning.clone());
    }

    record
}

/// 行単位フラッシュのCSVライター
pub struct SurveyWriter {
    writer: csv::Writer<File>,
}

impl SurveyWriter {
    /// 出力ファイルを作成しヘッダを書き込む
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&csv_headers())?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// 1レコードを書いて即フラッシュする（部分行は書かない）
    pub fn write_row(&mut self, row: &SurveyRow) -> Result<()> {
        self.writer.write_record(&record_for(row))?;
        self.writer.flush()?;
        Ok(())
    }
}
