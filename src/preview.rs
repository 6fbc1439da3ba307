//! プロンプトプレビュー
//!
//! 1行分のデモグラフィックから実際に送信されるプロンプト群を
//! 組み立てて表示用テキストにする。モデル呼び出しは行わない。

use survey_ai_common::prompts::{build_base_prompt, build_hofstede_prompt, build_likert_prompt};
use survey_ai_common::questions::QUESTIONS;
use survey_ai_common::types::DemographicContext;

/// プレビュー本文を組み立てる
pub fn preview_text(ctx: &DemographicContext) -> String {
    let base_prompt = build_base_prompt(ctx);
    let mut text = format!("--- ベースプロンプト ---\n{}\n", base_prompt);

    for question in QUESTIONS {
        text.push_str(&format!("\n--- 設問: {} ---\n", question.aspect));
        text.push_str(&build_likert_prompt(&base_prompt, question.full_text));
    }

    text.push_str("\n--- Hofstedeプロンプト ---\n");
    text.push_str(&build_hofstede_prompt(ctx));
    text
}
