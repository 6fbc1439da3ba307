//! Survey AI Common Library
//!
//! CLIから利用される型・設定テーブル・パーサー群。
//! I/Oやモデル呼び出しは含まない（純粋関数のみ）。

pub mod dimensions;
pub mod error;
pub mod normalizer;
pub mod patterns;
pub mod prompts;
pub mod questions;
pub mod scales;
pub mod types;

pub use dimensions::{
    dimension_instructions, label_for, validate_definitions, Dimension, DimensionDef,
    DIMENSION_COUNT, UNKNOWN_LABEL,
};
pub use error::{Error, Result};
pub use normalizer::{parse_hofstede_response, MISSING_CATEGORY, MISSING_SCORE};
pub use patterns::{patterns_for, ExtractionPattern, PatternSet};
pub use questions::{Question, QUESTIONS};
pub use scales::{validate_likert, LikertScale, NON_NUMERIC_RATING, OUT_OF_SCALE_RATING};
pub use types::{DemographicContext, HofstedeScores, QuestionResponse, SurveyRow};
