//! Ollama HTTPクライアント
//!
//! `/api/chat` にストリーミングで問い合わせ、NDJSONチャンクの
//! `message.content` を連結して1つの回答テキストにする。
//! パース側の契約は常に「完成した1つの文字列」。

use crate::config::Config;
use crate::error::{Result, SurveyAiError};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// モデル呼び出しの境界
///
/// オーケストレータはこのトレイト越しにのみモデルへアクセスする。
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// プロンプトとシステム指示を渡し、回答テキストを得る
    async fn chat(&self, prompt: &str, system: &str) -> Result<String>;
}

/// サンプリングオプション
#[derive(Debug, Clone, Copy)]
pub struct SamplingOptions {
    pub temperature: f32,
    pub top_p: f32,
}

pub struct OllamaClient {
    http: reqwest::Client,
    host: String,
    model: String,
    options: SamplingOptions,
}

impl OllamaClient {
    /// 設定からクライアントを構築する
    ///
    /// `timeout_seconds` はHTTPクライアント全体に適用される。chatが
    /// タイムアウトすると停止せずエラーとして返り、行処理側では
    /// エラーマーカー扱いになる。
    pub fn from_config(config: &Config, model: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| SurveyAiError::ApiCall(format!("HTTPクライアント構築失敗: {}", e)))?;

        Ok(Self {
            http,
            host: config.host.trim_end_matches('/').to_string(),
            model,
            options: SamplingOptions {
                temperature: config.temperature,
                top_p: config.top_p,
            },
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// ローカルに存在するモデル名の一覧を取得（`/api/tags`）
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.host);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SurveyAiError::ApiCall(format!("Ollama接続失敗 ({}): {}", url, e)))?;

        if !response.status().is_success() {
            return Err(SurveyAiError::ApiCall(format!(
                "モデル一覧の取得に失敗 (status {})",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SurveyAiError::ApiParse(format!("モデル一覧: {}", e)))?;

        let models = payload["models"]
            .as_array()
            .map(|models| {
                models
                    .iter()
                    .filter_map(|m| m["name"].as_str())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(models)
    }

    /// 設定されたモデルがローカルに存在するか確認
    pub async fn validate_model(&self) -> Result<()> {
        let models = self.list_models().await?;
        let exists = models.iter().any(|name| name.contains(&self.model));

        if !exists {
            return Err(SurveyAiError::ModelNotFound(self.model.clone()));
        }

        Ok(())
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn chat(&self, prompt: &str, system: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt }
            ],
            "stream": true,
            "options": {
                "temperature": self.options.temperature,
                "top_p": self.options.top_p
            }
        });

        let mut response = self
            .http
            .post(format!("{}/api/chat", self.host))
            .json(&body)
            .send()
            .await
            .map_err(|e| SurveyAiError::ApiCall(format!("chat送信失敗: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(SurveyAiError::ApiCall(format!(
                "chat失敗 (status {}): {}",
                status, text
            )));
        }

        // NDJSONを行単位で連結する。チャンク境界は行の途中に来うるので
        // バイトバッファに貯めて改行で切り出す。
        let mut content = String::new();
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| SurveyAiError::ApiCall(format!("chat受信失敗: {}", e)))?
        {
            buffer.extend_from_slice(&chunk);

            while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                append_chunk_line(&String::from_utf8_lossy(&line), &mut content)?;
            }
        }

        append_chunk_line(&String::from_utf8_lossy(&buffer), &mut content)?;

        Ok(content.trim().to_string())
    }
}

/// NDJSONの1行を回答テキストに追記する
fn append_chunk_line(line: &str, content: &mut String) -> Result<()> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(());
    }

    let value: serde_json::Value = serde_json::from_str(line)
        .map_err(|e| SurveyAiError::ApiParse(format!("チャンク解析失敗: {} ({})", e, line)))?;

    if let Some(error) = value["error"].as_str() {
        return Err(SurveyAiError::ApiCall(format!("Ollamaエラー: {}", error)));
    }

    if let Some(text) = value["message"]["content"].as_str() {
        content.push_str(text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_chunk_line_concatenates() {
        let mut content = String::new();
        append_chunk_line(r#"{"message":{"content":"Hello "},"done":false}"#, &mut content)
            .unwrap();
        append_chunk_line(r#"{"message":{"content":"world"},"done":false}"#, &mut content)
            .unwrap();
        append_chunk_line(r#"{"done":true}"#, &mut content).unwrap();
        assert_eq!(content, "Hello world");
    }

    #[test]
    fn test_append_chunk_line_skips_blank() {
        let mut content = String::new();
        append_chunk_line("", &mut content).unwrap();
        append_chunk_line("   ", &mut content).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_append_chunk_line_error_payload() {
        let mut content = String::new();
        let result = append_chunk_line(r#"{"error":"model not loaded"}"#, &mut content);
        assert!(matches!(result, Err(SurveyAiError::ApiCall(_))));
    }

    #[test]
    fn test_append_chunk_line_invalid_json() {
        let mut content = String::new();
        let result = append_chunk_line("not json at all", &mut content);
        assert!(matches!(result, Err(SurveyAiError::ApiParse(_))));
    }
}
