//! 調査データの型定義

use crate::dimensions::{Dimension, DIMENSION_COUNT};
use serde::{Deserialize, Serialize};

/// 回答者のデモグラフィック属性（1行分、不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicContext {
    pub country_code: String,
    pub age_group: String,
    pub gender_category: String,
    pub occupation_category: String,
    pub education_category: String,
}

impl DemographicContext {
    /// CSVヘッダに使うフィールド名（宣言順）
    pub const FIELD_NAMES: [&'static str; 5] = [
        "country_code",
        "age_group",
        "gender_category",
        "occupation_category",
        "education_category",
    ];

    /// フィールド値を宣言順で返す
    pub fn values(&self) -> [&str; 5] {
        [
            &self.country_code,
            &self.age_group,
            &self.gender_category,
            &self.occupation_category,
            &self.education_category,
        ]
    }
}

/// 1設問分の結果
#[derive(Debug, Clone)]
pub struct QuestionResponse {
    pub prompt: String,
    /// モデルの生回答（トリム済み）。理由付けプロンプトに埋め込む。
    pub raw_rating: String,
    /// バリデーション済み評価値（センチネル -3 / -4 を含みうる）
    pub rating: i32,
    pub reasoning_prompt: String,
    pub reasoning: String,
}

/// Hofstede抽出結果（型付き固定長）
///
/// インデックス i は `Dimension::ALL[i]` に対応する。
/// 抽出に失敗した次元もセンチネルで埋まるため、長さは常に一定。
/// CSVへは「スコア6列 → カテゴリ6列」の順で展開する（交互にしない）。
#[derive(Debug, Clone, PartialEq)]
pub struct HofstedeScores {
    pub scores: [f64; DIMENSION_COUNT],
    pub categories: [i32; DIMENSION_COUNT],
}

impl HofstedeScores {
    /// 全次元がセンチネルの初期値
    pub fn missing() -> Self {
        Self {
            scores: [crate::normalizer::MISSING_SCORE; DIMENSION_COUNT],
            categories: [crate::normalizer::MISSING_CATEGORY; DIMENSION_COUNT],
        }
    }

    pub fn score(&self, dimension: Dimension) -> f64 {
        self.scores[dimension.index()]
    }

    pub fn category(&self, dimension: Dimension) -> i32 {
        self.categories[dimension.index()]
    }
}

/// 出力1行分の完成レコード
///
/// 入力1行につき1回構築し、書き込み後は変更しない。
#[derive(Debug, Clone)]
pub struct SurveyRow {
    pub demographics: DemographicContext,
    pub questions: Vec<QuestionResponse>,
    pub hofstede_prompt: String,
    pub hofstede: HofstedeScores,
    /// 次元別の理由付けテキスト（正準順序）
    pub dimension_reasonings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::{MISSING_CATEGORY, MISSING_SCORE};

    fn context() -> DemographicContext {
        DemographicContext {
            country_code: "JPN".into(),
            age_group: "30-39".into(),
            gender_category: "Female".into(),
            occupation_category: "Engineer".into(),
            education_category: "University degree".into(),
        }
    }

    #[test]
    fn test_field_values_order() {
        let ctx = context();
        let values = ctx.values();
        assert_eq!(values[0], "JPN");
        assert_eq!(values[4], "University degree");
        assert_eq!(values.len(), DemographicContext::FIELD_NAMES.len());
    }

    #[test]
    fn test_hofstede_missing() {
        let missing = HofstedeScores::missing();
        for dimension in Dimension::ALL {
            assert_eq!(missing.score(dimension), MISSING_SCORE);
            assert_eq!(missing.category(dimension), MISSING_CATEGORY);
        }
    }

    #[test]
    fn test_hofstede_indexed_access() {
        let mut scores = HofstedeScores::missing();
        scores.scores[Dimension::IndulgenceRestraint.index()] = 40.0;
        scores.categories[Dimension::IndulgenceRestraint.index()] = 2;
        assert_eq!(scores.score(Dimension::IndulgenceRestraint), 40.0);
        assert_eq!(scores.category(Dimension::IndulgenceRestraint), 2);
        // 他の次元には影響しない
        assert_eq!(scores.score(Dimension::PowerDistance), MISSING_SCORE);
    }
}
