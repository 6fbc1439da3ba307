//! 調査設問テーブル
//!
//! 各設問は importance スケールで回答させる。
//! 並び順はCSVの設問列グループの順序になる。

/// 1設問の定義
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// 列名プレフィックスに使う識別子
    pub aspect: &'static str,
    /// プロンプトに埋め込む設問文
    pub full_text: &'static str,
    /// 回答バリデーションに使うスケール名
    pub scale: &'static str,
}

/// 生活領域の重要度設問（World Values Survey形式）
pub const QUESTIONS: &[Question] = &[
    Question {
        aspect: "Family",
        full_text: "For the following aspect, indicate how important it is in your life: Family.",
        scale: "importance",
    },
    Question {
        aspect: "Friends",
        full_text: "For the following aspect, indicate how important it is in your life: Friends.",
        scale: "importance",
    },
    Question {
        aspect: "Leisure_Time",
        full_text: "For the following aspect, indicate how important it is in your life: Leisure time.",
        scale: "importance",
    },
    Question {
        aspect: "Politics",
        full_text: "For the following aspect, indicate how important it is in your life: Politics.",
        scale: "importance",
    },
    Question {
        aspect: "Work",
        full_text: "For the following aspect, indicate how important it is in your life: Work.",
        scale: "importance",
    },
    Question {
        aspect: "Religion",
        full_text: "For the following aspect, indicate how important it is in your life: Religion.",
        scale: "importance",
    },
];
