//! 調査オーケストレータ
//!
//! デモグラフィック1行を以下の順で処理する:
//! 1. 設問ごと: Likertプロンプト → 評価値 → 理由付けプロンプト → 理由
//! 2. Hofstede一括プロンプト → 正規化（スコア/カテゴリ抽出）
//! 3. 次元ごとの理由付けプロンプト（抽出カテゴリのラベルを使用）
//!
//! モデル呼び出しは1件ずつ直列。1回の呼び出し失敗は行を中断せず、
//! マーカー文字列に置き換えて後段に流す（パターン不一致→センチネル）。

use crate::client::ModelClient;
use survey_ai_common::dimensions::{label_for, Dimension, DIMENSION_COUNT};
use survey_ai_common::normalizer::parse_hofstede_response;
use survey_ai_common::patterns::{patterns_for, PatternSet};
use survey_ai_common::prompts::{
    build_base_prompt, build_dimension_reasoning_prompt, build_hofstede_prompt,
    build_likert_prompt, build_likert_reasoning_prompt, SYSTEM_INSTRUCTION,
};
use survey_ai_common::questions::QUESTIONS;
use survey_ai_common::scales::validate_likert;
use survey_ai_common::types::{DemographicContext, QuestionResponse, SurveyRow};
use tracing::{debug, error};

/// モデル呼び出し失敗時に回答の代わりに流すマーカー
pub const RESPONSE_ERROR_MARKER: &str = "Model Response Error";

pub struct SurveyRunner<'a, C: ModelClient> {
    client: &'a C,
    patterns: &'static PatternSet,
}

impl<'a, C: ModelClient> SurveyRunner<'a, C> {
    pub fn new(client: &'a C, model_name: &str) -> Self {
        Self {
            client,
            patterns: patterns_for(model_name),
        }
    }

    /// 1行分の完成レコードを組み立てる
    ///
    /// 常に成功する（個々の呼び出し失敗はマーカー/センチネルに吸収）。
    pub async fn process_row(&self, ctx: &DemographicContext) -> SurveyRow {
        let base_prompt = build_base_prompt(ctx);

        let mut questions = Vec::with_capacity(QUESTIONS.len());
        for question in QUESTIONS {
            let prompt = build_likert_prompt(&base_prompt, question.full_text);
            let raw_rating = self.generate(&prompt).await.trim().to_string();
            let rating = validate_likert(&raw_rating, question.scale);

            let reasoning_prompt =
                build_likert_reasoning_prompt(ctx, &raw_rating, question.aspect);
            let reasoning = self.generate(&reasoning_prompt).await;

            debug!(aspect = question.aspect, rating, "設問処理完了");

            questions.push(QuestionResponse {
                prompt,
                raw_rating,
                rating,
                reasoning_prompt,
                reasoning,
            });
        }

        let hofstede_prompt = build_hofstede_prompt(ctx);
        let hofstede_response = self.generate(&hofstede_prompt).await;
        let hofstede = parse_hofstede_response(&hofstede_response, self.patterns);

        let mut dimension_reasonings = Vec::with_capacity(DIMENSION_COUNT);
        for dimension in Dimension::ALL {
            let score = hofstede.score(dimension);
            let category = hofstede.category(dimension);
            // センチネルカテゴリはUnknownラベルに解決される（パニックしない）
            let label = label_for(dimension, category);

            let prompt =
                build_dimension_reasoning_prompt(ctx, dimension, score, category, label);
            dimension_reasonings.push(self.generate(&prompt).await);
        }

        SurveyRow {
            demographics: ctx.clone(),
            questions,
            hofstede_prompt,
            hofstede,
            dimension_reasonings,
        }
    }

    /// 生成境界。失敗はここで握りつぶしてマーカーに変換する。
    async fn generate(&self, prompt: &str) -> String {
        match self.client.chat(prompt, SYSTEM_INSTRUCTION).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "モデル呼び出し失敗");
                RESPONSE_ERROR_MARKER.to_string()
            }
        }
    }
}
