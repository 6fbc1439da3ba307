//! Hofstede回答の正規化（Response Normalizer）
//!
//! モデルの自由記述テキストから次元ごとの (スコア, カテゴリ) を抽出する。
//! 入力がどれほど崩れていても出力形状は固定:
//! スコア6個（[0,100] または -5）＋カテゴリ6個（[1,5] または -3）。
//! 抽出に失敗した次元はセンチネルで埋め、後続次元の位置をずらさない。

use crate::patterns::PatternSet;
use crate::types::HofstedeScores;
use tracing::warn;

/// 抽出失敗時のスコアセンチネル
pub const MISSING_SCORE: f64 = -5.0;

/// 抽出失敗時のカテゴリセンチネル
pub const MISSING_CATEGORY: i32 = -3;

/// 警告ログに含めるテキスト断片の最大文字数
const SNIPPET_CHARS: usize = 200;

/// モデル回答テキストをパースする
///
/// パターンは正準順序で1次元ずつ適用する。結果のインデックスは
/// 常に次元順であり、テキスト中の出現順には依存しない。
/// 純粋関数（同じ入力には常に同じ出力）。
pub fn parse_hofstede_response(response: &str, patterns: &PatternSet) -> HofstedeScores {
    let mut result = HofstedeScores::missing();

    for pattern in patterns.iter() {
        let idx = pattern.dimension().index();

        match pattern.extract(response) {
            Some((score, category)) => {
                result.scores[idx] = score.clamp(0.0, 100.0);
                result.categories[idx] = category.clamp(1, 5);
            }
            None => {
                let snippet: String = response.chars().take(SNIPPET_CHARS).collect();
                warn!(
                    dimension = pattern.dimension().key(),
                    pattern = pattern.source(),
                    snippet = %snippet,
                    "抽出パターンがマッチしない"
                );
            }
        }
    }

    result
}
