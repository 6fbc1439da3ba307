//! Likertスケール定義と回答バリデーション
//!
//! スケールごとの有効値はテーブル参照で判定する（ハードコードしない）。
//! 失敗モードは2種類のセンチネルで区別する:
//! - `NON_NUMERIC_RATING` (-3): 数値として解釈できない
//! - `OUT_OF_SCALE_RATING` (-4): 数値だがスケール外

use tracing::warn;

/// 数値でない回答のセンチネル
pub const NON_NUMERIC_RATING: i32 = -3;

/// スケール外数値のセンチネル
pub const OUT_OF_SCALE_RATING: i32 = -4;

/// スケールの選択肢（値とラベル）
#[derive(Debug, Clone, Copy)]
pub struct LikertOption {
    pub value: i32,
    pub label: &'static str,
}

/// 名前付きLikertスケール
#[derive(Debug, Clone, Copy)]
pub struct LikertScale {
    pub name: &'static str,
    pub options: &'static [LikertOption],
}

/// 重要度スケール（設問回答用）
pub const IMPORTANCE: LikertScale = LikertScale {
    name: "importance",
    options: &[
        LikertOption { value: 1, label: "Very important" },
        LikertOption { value: 2, label: "Rather important" },
        LikertOption { value: 3, label: "Not very important" },
        LikertOption { value: 4, label: "Not at all important" },
        LikertOption { value: -1, label: "Don't Know" },
    ],
};

/// Hofstede次元カテゴリ用スケール
pub const HOFSTEDE_DIMENSIONS: LikertScale = LikertScale {
    name: "hofstede_dimensions",
    options: &[
        LikertOption { value: 1, label: "Very Low" },
        LikertOption { value: 2, label: "Low" },
        LikertOption { value: 3, label: "Moderate" },
        LikertOption { value: 4, label: "High" },
        LikertOption { value: 5, label: "Very High" },
    ],
};

const SCALES: &[LikertScale] = &[IMPORTANCE, HOFSTEDE_DIMENSIONS];

/// 名前でスケールを引く
pub fn scale(name: &str) -> Option<&'static LikertScale> {
    SCALES.iter().find(|s| s.name == name)
}

/// Likert回答トークンを検証する
///
/// トリム後に整数として解釈し、指定スケールの有効値に含まれれば
/// その値を返す。失敗時は行を中断せずセンチネルを返す。
pub fn validate_likert(raw_token: &str, scale_name: &str) -> i32 {
    let trimmed = raw_token.trim();

    let value = match trimmed.parse::<i32>() {
        Ok(value) => value,
        Err(_) => {
            warn!(token = trimmed, scale = scale_name, "非数値のLikert回答");
            return NON_NUMERIC_RATING;
        }
    };

    let is_legal = scale(scale_name)
        .map(|s| s.options.iter().any(|option| option.value == value))
        .unwrap_or(false);

    if !is_legal {
        warn!(value, scale = scale_name, "スケール外のLikert回答");
        return OUT_OF_SCALE_RATING;
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_numeric() {
        assert_eq!(validate_likert("abc", "importance"), NON_NUMERIC_RATING);
        assert_eq!(validate_likert("", "importance"), NON_NUMERIC_RATING);
        assert_eq!(
            validate_likert("2 - Rather important", "importance"),
            NON_NUMERIC_RATING
        );
    }

    #[test]
    fn test_validate_out_of_scale() {
        // 9 は importance の有効値 {1,2,3,4,-1} に含まれない
        assert_eq!(validate_likert("9", "importance"), OUT_OF_SCALE_RATING);
        assert_eq!(validate_likert("0", "importance"), OUT_OF_SCALE_RATING);
        assert_eq!(validate_likert("5", "importance"), OUT_OF_SCALE_RATING);
    }

    #[test]
    fn test_validate_valid_values() {
        assert_eq!(validate_likert("1", "importance"), 1);
        assert_eq!(validate_likert("4", "importance"), 4);
        // "Don't Know" の -1 も有効値
        assert_eq!(validate_likert("-1", "importance"), -1);
        // 前後の空白はトリムされる
        assert_eq!(validate_likert("  2  ", "importance"), 2);
    }

    #[test]
    fn test_validate_hofstede_scale() {
        assert_eq!(validate_likert("5", "hofstede_dimensions"), 5);
        // -1 は hofstede_dimensions では無効
        assert_eq!(
            validate_likert("-1", "hofstede_dimensions"),
            OUT_OF_SCALE_RATING
        );
    }

    #[test]
    fn test_validate_unknown_scale() {
        // 未知のスケール名は有効値集合が空として扱う
        assert_eq!(validate_likert("1", "no_such_scale"), OUT_OF_SCALE_RATING);
        assert_eq!(validate_likert("abc", "no_such_scale"), NON_NUMERIC_RATING);
    }

    #[test]
    fn test_scale_lookup() {
        assert!(scale("importance").is_some());
        assert!(scale("hofstede_dimensions").is_some());
        assert!(scale("unknown").is_none());
        assert_eq!(scale("importance").unwrap().options.len(), 5);
    }
}
