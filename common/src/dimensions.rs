//! Hofstede文化次元の定義テーブル
//!
//! 6次元の説明・プロンプト・ラベル（1〜5）を静的に保持する。
//! 次元の順序は固定（`Dimension::ALL`）で、抽出パターン・CSV列・
//! 結果配列のインデックスすべてがこの順序に対応する。

use crate::error::{Error, Result};

/// 次元数（固定）
pub const DIMENSION_COUNT: usize = 6;

/// ラベル未解決時のフォールバック文字列
pub const UNKNOWN_LABEL: &str = "Unknown";

/// 文化次元の列挙
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    PowerDistance,
    UncertaintyAvoidance,
    IndividualismCollectivism,
    MasculinityFemininity,
    LongShortTermOrientation,
    IndulgenceRestraint,
}

impl Dimension {
    /// 正準順序（この順で抽出・出力する）
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::PowerDistance,
        Dimension::UncertaintyAvoidance,
        Dimension::IndividualismCollectivism,
        Dimension::MasculinityFemininity,
        Dimension::LongShortTermOrientation,
        Dimension::IndulgenceRestraint,
    ];

    /// CSV列名などに使うアンダースコア区切りキー
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::PowerDistance => "Power_Distance",
            Dimension::UncertaintyAvoidance => "Uncertainty_Avoidance",
            Dimension::IndividualismCollectivism => "Individualism_Collectivism",
            Dimension::MasculinityFemininity => "Masculinity_Femininity",
            Dimension::LongShortTermOrientation => "Long_Short_Term_Orientation",
            Dimension::IndulgenceRestraint => "Indulgence_Restraint",
        }
    }

    /// プロンプト向けの表示名（スペース区切り）
    pub fn display_name(&self) -> String {
        self.key().replace('_', " ")
    }

    /// 正準順序でのインデックス
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// 次元定義（説明・プロンプト・5段階ラベル）
#[derive(Debug)]
pub struct DimensionDef {
    pub dimension: Dimension,
    pub description: &'static str,
    pub prompt: &'static str,
    /// (値, ラベル) の5組。値は1〜5で昇順。
    pub labels: [(i32, &'static str); 5],
}

/// 次元定義テーブル（`Dimension::ALL` と同順）
pub const DIMENSION_DEFS: [DimensionDef; DIMENSION_COUNT] = [
    DimensionDef {
        dimension: Dimension::PowerDistance,
        description: "The extent to which less powerful members of organizations and institutions accept and expect that power is distributed unequally.",
        prompt: "Assess the power dynamics in your cultural context. Select the label that best describes the power distribution:",
        labels: [
            (1, "Egalitarian"),
            (2, "Mostly Egalitarian"),
            (3, "Neutral/Moderate"),
            (4, "Mostly Hierarchical"),
            (5, "Hierarchical"),
        ],
    },
    DimensionDef {
        dimension: Dimension::UncertaintyAvoidance,
        description: "The extent to which the members of a culture feel threatened by ambiguous or unknown situations.",
        prompt: "How comfortable are you and your culture with uncertain or ambiguous situations? Select the most appropriate label:",
        labels: [
            (1, "Very Low Uncertainty Avoidance"),
            (2, "Low Uncertainty Avoidance"),
            (3, "Moderate Uncertainty Avoidance"),
            (4, "High Uncertainty Avoidance"),
            (5, "Very High Uncertainty Avoidance"),
        ],
    },
    DimensionDef {
        dimension: Dimension::IndividualismCollectivism,
        description: "The degree of interdependence a society maintains among its members.",
        prompt: "Reflect on the social bonds and personal relationships in your culture. Select the label that best describes your cultural orientation:",
        labels: [
            (1, "Extremely Collectivist"),
            (2, "Mostly Collectivist"),
            (3, "Balanced"),
            (4, "Mostly Individualist"),
            (5, "Extremely Individualist"),
        ],
    },
    DimensionDef {
        dimension: Dimension::MasculinityFemininity,
        description: "The distribution of emotional roles between genders.",
        prompt: "Consider the gender roles and emotional characteristics valued in your culture. Select the most appropriate label:",
        labels: [
            (1, "Extremely Feminine"),
            (2, "Mostly Feminine"),
            (3, "Balanced"),
            (4, "Mostly Masculine"),
            (5, "Extremely Masculine"),
        ],
    },
    DimensionDef {
        dimension: Dimension::LongShortTermOrientation,
        description: "How a society maintains links with its past while dealing with present and future challenges.",
        prompt: "Reflect on how your culture views time, planning, and traditions. Select the label that best describes your cultural time orientation:",
        labels: [
            (1, "Extremely Short-Term Oriented"),
            (2, "Mostly Short-Term Oriented"),
            (3, "Balanced"),
            (4, "Mostly Long-Term Oriented"),
            (5, "Extremely Long-Term Oriented"),
        ],
    },
    DimensionDef {
        dimension: Dimension::IndulgenceRestraint,
        description: "The extent to which a society allows relatively free gratification of basic and natural human desires.",
        prompt: "Consider the social norms around personal desires and societal controls in your culture. Select the most appropriate label:",
        labels: [
            (1, "Extremely Restrained"),
            (2, "Mostly Restrained"),
            (3, "Balanced"),
            (4, "Mostly Indulgent"),
            (5, "Extremely Indulgent"),
        ],
    },
];

/// 次元に対応する定義を取得
pub fn def(dimension: Dimension) -> &'static DimensionDef {
    &DIMENSION_DEFS[dimension.index()]
}

/// カテゴリ値からラベルを引く
///
/// 範囲外の値（センチネル含む）は `UNKNOWN_LABEL` を返す。
/// パニックしない。
pub fn label_for(dimension: Dimension, category: i32) -> &'static str {
    def(dimension)
        .labels
        .iter()
        .find(|(value, _)| *value == category)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_LABEL)
}

/// 定義テーブルの整合性チェック
///
/// - テーブル順序が `Dimension::ALL` と一致
/// - ラベル値が1〜5で厳密昇順
/// - ラベル文字列が次元内で一意・非空
/// - 説明・プロンプトが非空
pub fn validate_definitions() -> Result<()> {
    for (idx, def) in DIMENSION_DEFS.iter().enumerate() {
        let key = def.dimension.key();

        if def.dimension != Dimension::ALL[idx] {
            return Err(Error::Config(format!(
                "次元定義の順序が不正: index {} に {}",
                idx, key
            )));
        }

        if def.description.is_empty() || def.prompt.is_empty() {
            return Err(Error::Config(format!("{}: 説明またはプロンプトが空", key)));
        }

        let mut prev_value = 0;
        for (value, label) in &def.labels {
            if *value <= prev_value {
                return Err(Error::Config(format!(
                    "{}: ラベル値が昇順でない ({} の後に {})",
                    key, prev_value, value
                )));
            }
            if !(1..=5).contains(value) {
                return Err(Error::Config(format!("{}: ラベル値 {} が範囲外", key, value)));
            }
            if label.is_empty() {
                return Err(Error::Config(format!("{}: 空ラベル (値 {})", key, value)));
            }
            prev_value = *value;
        }

        for (i, (_, label)) in def.labels.iter().enumerate() {
            if def.labels[i + 1..].iter().any(|(_, other)| other == label) {
                return Err(Error::Config(format!("{}: ラベル重複 '{}'", key, label)));
            }
        }
    }

    Ok(())
}

/// Hofstedeプロンプトに埋め込む次元別指示ブロックを生成
pub fn dimension_instructions() -> String {
    let mut instructions = String::new();

    for def in &DIMENSION_DEFS {
        let label_lines = def
            .labels
            .iter()
            .map(|(value, label)| format!("{}. {}", value, label))
            .collect::<Vec<_>>()
            .join("\n");

        instructions.push_str(&format!(
            "\n{} Assessment:\n{}\n{}\n\nPossible Labels:\n{}\n\nRespond with:\n- Percentage Score (0-100%)\n- Categorical Label Number (1-5)\n",
            def.dimension.display_name(),
            def.description,
            def.prompt,
            label_lines
        ));
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_indices() {
        for (idx, dimension) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), idx);
            assert_eq!(def(*dimension).dimension, *dimension);
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Dimension::PowerDistance.display_name(), "Power Distance");
        assert_eq!(
            Dimension::LongShortTermOrientation.display_name(),
            "Long Short Term Orientation"
        );
    }

    #[test]
    fn test_label_for_valid_category() {
        assert_eq!(label_for(Dimension::PowerDistance, 1), "Egalitarian");
        assert_eq!(label_for(Dimension::PowerDistance, 5), "Hierarchical");
        assert_eq!(label_for(Dimension::IndulgenceRestraint, 3), "Balanced");
    }

    #[test]
    fn test_label_for_sentinel_category() {
        // 抽出失敗時のセンチネル（-3）でもパニックせずUnknownを返す
        assert_eq!(label_for(Dimension::UncertaintyAvoidance, -3), UNKNOWN_LABEL);
        assert_eq!(label_for(Dimension::PowerDistance, 0), UNKNOWN_LABEL);
        assert_eq!(label_for(Dimension::PowerDistance, 6), UNKNOWN_LABEL);
    }

    #[test]
    fn test_validate_definitions_ok() {
        validate_definitions().unwrap();
    }

    #[test]
    fn test_dimension_instructions_contains_all() {
        let instructions = dimension_instructions();
        for dimension in Dimension::ALL {
            let heading = format!("{} Assessment:", dimension.display_name());
            assert!(
                instructions.contains(&heading),
                "missing heading: {}",
                heading
            );
        }
        assert!(instructions.contains("Percentage Score (0-100%)"));
        assert!(instructions.contains("1. Egalitarian"));
    }
}
