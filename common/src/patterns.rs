//! 抽出パターンレジストリ
//!
//! モデル名ごとにHofstede回答抽出用の正規表現セットを保持する。
//! 未登録モデルはデフォルトセットに黙ってフォールバックする（エラーにしない）。
//!
//! パターンの並び順は `Dimension::ALL` と1:1対応する。結果は
//! 位置で組み立てるため、この順序が崩れると列がずれる。

use crate::dimensions::{Dimension, DIMENSION_COUNT};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// 1次元分の抽出パターン
///
/// 2つのキャプチャグループを持つ:
/// 1. パーセンテージスコア（0〜100として解釈）
/// 2. カテゴリ番号（1〜5として解釈）
#[derive(Debug)]
pub struct ExtractionPattern {
    dimension: Dimension,
    source: &'static str,
    regex: Regex,
}

impl ExtractionPattern {
    fn compile(dimension: Dimension, source: &'static str) -> Self {
        // 大文字小文字無視・ドットは改行にもマッチ
        // （スコアとカテゴリの間に任意のテキストが挟まりうる）
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .unwrap();
        Self { dimension, source, regex }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    /// テキストから (スコア, カテゴリ) を抽出する。マッチしなければNone。
    pub fn extract(&self, text: &str) -> Option<(f64, i32)> {
        let caps = self.regex.captures(text)?;
        let score = caps.get(1)?.as_str().parse::<f64>().ok()?;
        let category = caps.get(2)?.as_str().parse::<i32>().ok()?;
        Some((score, category))
    }
}

/// 全次元分のパターンセット（正準順序）
#[derive(Debug)]
pub struct PatternSet {
    patterns: [ExtractionPattern; DIMENSION_COUNT],
}

impl PatternSet {
    /// パターン文字列から構築する
    ///
    /// `sources[i]` が `Dimension::ALL[i]` に対応する。
    pub fn compile(sources: &[&'static str; DIMENSION_COUNT]) -> Self {
        let patterns = std::array::from_fn(|idx| {
            ExtractionPattern::compile(Dimension::ALL[idx], sources[idx])
        });
        Self { patterns }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractionPattern> {
        self.patterns.iter()
    }

    pub fn get(&self, dimension: Dimension) -> &ExtractionPattern {
        &self.patterns[dimension.index()]
    }
}

/// デフォルトパターン（"X Assessment: ... - NN% ... - N" 形式）
const DEFAULT_PATTERN_SOURCES: [&str; DIMENSION_COUNT] = [
    r"Power Distance Assessment:.*?-\s*(\d+)%.*?-\s*([1-5])",
    r"Uncertainty Avoidance Assessment:.*?-\s*(\d+)%.*?-\s*([1-5])",
    r"Individualism Collectivism Assessment:.*?-\s*(\d+)%.*?-\s*([1-5])",
    r"Masculinity Femininity Assessment:.*?-\s*(\d+)%.*?-\s*([1-5])",
    r"Long Short Term Orientation Assessment:.*?-\s*(\d+)%.*?-\s*([1-5])",
    r"Indulgence Restraint Assessment:.*?-\s*(\d+)%.*?-\s*([1-5])",
];

/// 見出しが緩いモデル向け（"Assessment:" やハイフンを要求しない）
const LOOSE_HEADING_PATTERN_SOURCES: [&str; DIMENSION_COUNT] = [
    r"(?:Power[_ ]Distance).*?(\d+)%.*?([1-5])",
    r"(?:Uncertainty[_ ]Avoidance).*?(\d+)%.*?([1-5])",
    r"(?:Individualism[_ ]Collectivism).*?(\d+)%.*?([1-5])",
    r"(?:Masculinity[_ ]Femininity).*?(\d+)%.*?([1-5])",
    r"(?:Long[_ ]Short[_ ]Term[_ ]Orientation).*?(\d+)%.*?([1-5])",
    r"(?:Indulgence[_ ]Restraint).*?(\d+)%.*?([1-5])",
];

lazy_static! {
    static ref DEFAULT_PATTERNS: PatternSet = PatternSet::compile(&DEFAULT_PATTERN_SOURCES);
    static ref MODEL_PATTERNS: HashMap<&'static str, PatternSet> = {
        let mut map = HashMap::new();
        map.insert("qwen2.5:7b", PatternSet::compile(&LOOSE_HEADING_PATTERN_SOURCES));
        map.insert("gemma2:9b", PatternSet::compile(&LOOSE_HEADING_PATTERN_SOURCES));
        map
    };
}

/// モデル名に対応するパターンセットを返す
///
/// 未登録モデルはデフォルトセット。フォールバックは正常系であり
/// エラーやログは発生しない。
pub fn patterns_for(model_name: &str) -> &'static PatternSet {
    MODEL_PATTERNS
        .get(model_name)
        .unwrap_or(&DEFAULT_PATTERNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_for_unknown_model_falls_back() {
        let set = patterns_for("unknown-model-xyz");
        let dims: Vec<Dimension> = set.iter().map(|p| p.dimension()).collect();
        assert_eq!(dims.len(), DIMENSION_COUNT);
        assert_eq!(dims, Dimension::ALL.to_vec());
        assert!(set
            .get(Dimension::PowerDistance)
            .source()
            .contains("Power Distance Assessment"));
    }

    #[test]
    fn test_patterns_for_registered_model() {
        let set = patterns_for("qwen2.5:7b");
        // 登録済みオーバーライドは "Assessment:" 見出しを要求しない
        assert!(!set.get(Dimension::PowerDistance).source().contains("Assessment"));
        assert!(set
            .get(Dimension::PowerDistance)
            .extract("Power_Distance: around 70% overall, category 3")
            .is_some());
    }

    #[test]
    fn test_default_pattern_extracts() {
        let set = patterns_for("unknown-model-xyz");
        let text = "Power Distance Assessment:\n- 72%\n- 4";
        let (score, category) = set.get(Dimension::PowerDistance).extract(text).unwrap();
        assert_eq!(score, 72.0);
        assert_eq!(category, 4);
    }

    #[test]
    fn test_pattern_case_insensitive_multiline() {
        let set = patterns_for("unknown-model-xyz");
        let text = "power distance assessment:\nsome reasoning first\n- 55%\nmore text\n- 2";
        let (score, category) = set.get(Dimension::PowerDistance).extract(text).unwrap();
        assert_eq!(score, 55.0);
        assert_eq!(category, 2);
    }

    #[test]
    fn test_pattern_no_match() {
        let set = patterns_for("unknown-model-xyz");
        assert!(set
            .get(Dimension::UncertaintyAvoidance)
            .extract("nothing relevant here")
            .is_none());
    }
}
