//! Модуль обработки ошибок библиотеки voiceover
//!
//! Этот модуль содержит типы ошибок, которые могут возникнуть при работе библиотеки.

use thiserror::Error;

/// Ошибки библиотеки voiceover
#[derive(Debug, Error)]
pub enum VoiceoverError {
    /// Ошибка HTTP запроса
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ошибка ввода-вывода
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка генерации речи
    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    /// Ошибка конфигурации
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Файл не найден
    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Тип Result для библиотеки voiceover
pub type Result<T> = std::result::Result<T, VoiceoverError>;
