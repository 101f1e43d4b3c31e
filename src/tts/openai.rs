//! Модуль для интеграции с OpenAI API
//!
//! Этот модуль содержит клиент для генерации речи с использованием OpenAI TTS API.

use log::{error, info};
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::VoiceoverConfig;
use crate::error::{Result, VoiceoverError};
use crate::tts::SpeechSynthesizer;

const OPENAI_API_BASE: &str = "https://api.openai.com";

/// Клиент для работы с OpenAI TTS API
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    voice: String,
    base_url: String,
}

impl OpenAiClient {
    /// Создает новый клиент OpenAI TTS
    pub fn new(config: &VoiceoverConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.openai_api_key.clone(),
            model: config.tts_model.as_str().to_string(),
            voice: config.tts_voice.as_str().to_string(),
            base_url: OPENAI_API_BASE.to_string(),
        }
    }

    /// Создает клиент с указанным базовым URL API
    ///
    /// Позволяет направить запросы на подменный сервер в тестах или на прокси.
    pub fn with_base_url(config: &VoiceoverConfig, base_url: &str) -> Self {
        let mut client = Self::new(config);
        client.base_url = base_url.trim_end_matches('/').to_string();
        client
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for OpenAiClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        // Validate API key
        if self.api_key.trim().is_empty() {
            error!("OpenAI API key is empty");
            return Err(VoiceoverError::Configuration(
                "OpenAI API key is required for speech synthesis".to_string(),
            ));
        }

        info!("Sending TTS request to OpenAI API");
        let response = self
            .client
            .post(format!("{}/v1/audio/speech", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&json!({
                "model": self.model,
                "voice": self.voice,
                "input": text,
                "response_format": "mp3",
                "speed": 1.0
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            let message = extract_api_error_message(&error_text);
            error!("OpenAI API error (status {}): {}", status, message);
            return Err(VoiceoverError::Synthesis(format!(
                "OpenAI API error ({}): {}",
                status, message
            )));
        }

        let audio_data = response.bytes().await?.to_vec();
        if audio_data.is_empty() {
            error!("Received empty audio response from OpenAI API");
            return Err(VoiceoverError::Synthesis(
                "Received empty audio response".to_string(),
            ));
        }

        info!(
            "Received audio response from OpenAI API: {} bytes",
            audio_data.len()
        );
        Ok(audio_data)
    }
}

/// Извлекает сообщение об ошибке из JSON-ответа API
fn extract_api_error_message(body: &str) -> String {
    let error_json: Value =
        serde_json::from_str(body).unwrap_or_else(|_| json!({"error": {"message": body}}));

    error_json["error"]["message"]
        .as_str()
        .unwrap_or("Unknown API error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_api_error_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            extract_api_error_message(body),
            "Incorrect API key provided"
        );

        // Неструктурированный ответ возвращается как есть
        assert_eq!(
            extract_api_error_message("upstream timeout"),
            "upstream timeout"
        );

        // JSON без сообщения об ошибке
        assert_eq!(extract_api_error_message("{}"), "Unknown API error");
    }

    #[tokio::test]
    async fn test_synthesize_requires_api_key() {
        let client = OpenAiClient::new(&VoiceoverConfig::default());
        let result = client.synthesize("Hello world.").await;
        assert!(matches!(result, Err(VoiceoverError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_synthesize_unreachable_endpoint() {
        let config = VoiceoverConfig {
            openai_api_key: "sk-test".to_string(),
            ..VoiceoverConfig::default()
        };
        // Порт 9 (discard) закрыт, соединение будет отклонено
        let client = OpenAiClient::with_base_url(&config, "http://127.0.0.1:9/");
        let result = client.synthesize("Hello world.").await;
        assert!(matches!(result, Err(VoiceoverError::Http(_))));
    }
}
