//! Модуль конфигурации библиотеки voiceover
//!
//! Этот модуль содержит структуры и перечисления для настройки библиотеки.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VoiceoverError};

/// Модель TTS для использования с OpenAI API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TtsModel {
    /// Стандартная модель
    Standard,
    /// Модель высокого качества
    HighDefinition,
}

impl Default for TtsModel {
    fn default() -> Self {
        Self::Standard
    }
}

impl TtsModel {
    /// Получить строковое представление модели
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "tts-1",
            Self::HighDefinition => "tts-1-hd",
        }
    }
}

/// Голос для использования с OpenAI API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TtsVoice {
    /// Голос Alloy
    Alloy,
    /// Голос Echo
    Echo,
    /// Голос Fable
    Fable,
    /// Голос Onyx
    Onyx,
    /// Голос Nova
    Nova,
    /// Голос Shimmer
    Shimmer,
}

impl Default for TtsVoice {
    fn default() -> Self {
        Self::Alloy
    }
}

impl TtsVoice {
    /// Получить строковое представление голоса
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alloy => "alloy",
            Self::Echo => "echo",
            Self::Fable => "fable",
            Self::Onyx => "onyx",
            Self::Nova => "nova",
            Self::Shimmer => "shimmer",
        }
    }
}

/// Конфигурация библиотеки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceoverConfig {
    /// API ключ для OpenAI
    pub openai_api_key: String,
    /// Модель TTS
    pub tts_model: TtsModel,
    /// Голос TTS
    pub tts_voice: TtsVoice,
    /// Путь к входному текстовому файлу
    pub input_path: PathBuf,
    /// Путь к выходному аудиофайлу
    pub output_path: PathBuf,
}

impl Default for VoiceoverConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            tts_model: TtsModel::default(),
            tts_voice: TtsVoice::default(),
            input_path: PathBuf::from("voice.txt"),
            output_path: PathBuf::from("voiceover/voiceover.mp3"),
        }
    }
}

impl VoiceoverConfig {
    /// Создать конфигурацию из переменных окружения
    ///
    /// Читает API ключ из переменной `OPENAI_API_KEY`, остальные параметры
    /// берутся по умолчанию.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            VoiceoverError::Configuration(
                "OPENAI_API_KEY environment variable is not set".to_string(),
            )
        })?;

        if api_key.trim().is_empty() {
            return Err(VoiceoverError::Configuration(
                "OPENAI_API_KEY environment variable is empty".to_string(),
            ));
        }

        Ok(Self {
            openai_api_key: api_key,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_as_str() {
        assert_eq!(TtsModel::Standard.as_str(), "tts-1");
        assert_eq!(TtsModel::HighDefinition.as_str(), "tts-1-hd");
        assert_eq!(TtsModel::default(), TtsModel::Standard);
    }

    #[test]
    fn test_voice_as_str() {
        assert_eq!(TtsVoice::Alloy.as_str(), "alloy");
        assert_eq!(TtsVoice::Shimmer.as_str(), "shimmer");
        assert_eq!(TtsVoice::default(), TtsVoice::Alloy);
    }

    #[test]
    fn test_default_paths() {
        let config = VoiceoverConfig::default();
        assert_eq!(config.input_path, PathBuf::from("voice.txt"));
        assert_eq!(config.output_path, PathBuf::from("voiceover/voiceover.mp3"));
    }

    #[test]
    fn test_from_env() {
        // Единственный тест, который трогает окружение, чтобы избежать гонок
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        let config = VoiceoverConfig::from_env().unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.tts_model, TtsModel::Standard);

        std::env::remove_var("OPENAI_API_KEY");
        assert!(VoiceoverConfig::from_env().is_err());
    }
}
