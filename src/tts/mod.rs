//! Модуль для работы с TTS
//!
//! Этот модуль содержит синтезаторы речи, используемые библиотекой.

pub mod openai;

pub use openai::OpenAiClient;

use crate::error::Result;

/// Trait that all speech synthesizers must implement
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Generate speech audio from text
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}
