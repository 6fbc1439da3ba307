//! プロンプト生成モジュール
//!
//! デモグラフィック属性から各種プロンプトを組み立てる。
//! テンプレートは静的で、実行時に変化しない。
//! Likert選択肢の列挙はスケールテーブルから生成する（ハードコードしない）。

use crate::dimensions::{dimension_instructions, Dimension};
use crate::scales::IMPORTANCE;
use crate::types::DemographicContext;

/// 全モデル呼び出しに付けるシステム指示
pub const SYSTEM_INSTRUCTION: &str = "You are a cultural survey response generator that:\n\
    - For Likert scales: Responds ONLY with the numerical value (1, 2, 3, 4, or -1)\n\
    - For explanation: Provides culturally nuanced explanations based on demographic context\n\
    - For Hofstede dimensions: Outputs clear percentage scores and category labels\n\
    Your responses must strictly align with the cultural and demographic context provided.";

/// ペルソナの基礎プロンプト
pub fn build_base_prompt(ctx: &DemographicContext) -> String {
    format!(
        "You are an individual living in {country_code}. Respond authentically representing \
         the cultural values, beliefs, and perspectives typical of your nationality. Consider \
         your background as someone who is {age_group} years old, {gender_category}, working \
         as {occupation_category} with {education_category}. Your responses should reflect \
         cultural nuances, social norms, and typical worldview without stereotyping.",
        country_code = ctx.country_code,
        age_group = ctx.age_group,
        gender_category = ctx.gender_category,
        occupation_category = ctx.occupation_category,
        education_category = ctx.education_category,
    )
}

/// Likert選択プロンプト（設問1問分）
pub fn build_likert_prompt(base_prompt: &str, question_text: &str) -> String {
    let options = IMPORTANCE
        .options
        .iter()
        .map(|option| format!("{} - {}", option.value, option.label))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n{base_prompt}\n\nQuestion: {question_text}\n\n\
         Respond ONLY with the NUMBER corresponding to the Likert scale that best represents your response:\n{options}\n"
    )
}

/// Likert回答の理由付けプロンプト
///
/// `selected_value` はモデルの生回答トークンをそのまま渡す。
pub fn build_likert_reasoning_prompt(
    ctx: &DemographicContext,
    selected_value: &str,
    aspect: &str,
) -> String {
    format!(
        "\nAs someone living in {country_code}, {age_group} years old, {gender_category}, \
         working as {occupation_category} with {education_category}:\n\n\
         You selected {selected_value} for the importance of {aspect}, where:\n\
         1 = Very important (crucial and central to life)\n\
         2 = Rather important (matters significantly)\n\
         3 = Not very important (minimal impact)\n\
         4 = Not at all important (no relevance)\n\
         -1 = Don't Know (cannot determine)\n\n\
         Provide a detailed explanation for why you chose this rating. Your explanation \
         should reflect your cultural background and personal perspective.\n",
        country_code = ctx.country_code,
        age_group = ctx.age_group,
        gender_category = ctx.gender_category,
        occupation_category = ctx.occupation_category,
        education_category = ctx.education_category,
    )
}

/// Hofstede全次元の一括評価プロンプト
pub fn build_hofstede_prompt(ctx: &DemographicContext) -> String {
    format!(
        "\nBased on your demographic background and previous responses, assess your cultural \
         context along Hofstede's Cultural Dimensions.\n\n\
         For each dimension, you will:\n\
         1. Provide a percentage score (0-100%)\n\
         2. Select a categorical label from the given options\n\n\
         Demographic Context:\n\
         - Country: {country_code}\n\
         - Age Group: {age_group}\n\
         - Gender: {gender_category}\n\
         - Occupation: {occupation_category}\n\
         - Education: {education_category}\n\n\
         Detailed Assessment Instructions:\n{instructions}\n",
        country_code = ctx.country_code,
        age_group = ctx.age_group,
        gender_category = ctx.gender_category,
        occupation_category = ctx.occupation_category,
        education_category = ctx.education_category,
        instructions = dimension_instructions(),
    )
}

/// 次元別の理由付けプロンプト
pub fn build_dimension_reasoning_prompt(
    ctx: &DemographicContext,
    dimension: Dimension,
    score: f64,
    category: i32,
    label: &str,
) -> String {
    format!(
        "\nBased on your demographic context ({country_code}, {age_group}, {gender_category}, \
         {occupation_category}, {education_category}):\n\n\
         Explain why you rated {dimension} with:\n\
         - Score: {score}%\n\
         - Category: {category} ({label})\n\n\
         Your explanation should reflect cultural nuances and demographic influences.\n",
        country_code = ctx.country_code,
        age_group = ctx.age_group,
        gender_category = ctx.gender_category,
        occupation_category = ctx.occupation_category,
        education_category = ctx.education_category,
        dimension = dimension.display_name(),
        score = score,
        category = category,
        label = label,
    )
}
