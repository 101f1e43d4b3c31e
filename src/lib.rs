//! Основной файл библиотеки voiceover
//!
//! Эта библиотека читает текст из файла, генерирует озвучку с помощью
//! OpenAI TTS API и сохраняет полученное аудио в файл.

pub mod config;
pub mod error;
pub mod tts;
pub mod utils;

use std::path::PathBuf;

use log::info;

use crate::config::VoiceoverConfig;
use crate::error::{Result, VoiceoverError};
use crate::tts::{OpenAiClient, SpeechSynthesizer};

/// Основная структура для генерации озвучки
pub struct VoiceoverGenerator {
    /// Путь к входному текстовому файлу
    input_path: PathBuf,
    /// Путь к выходному аудиофайлу
    output_path: PathBuf,
    /// Синтезатор речи
    synthesizer: Box<dyn SpeechSynthesizer>,
}

impl VoiceoverGenerator {
    /// Создать новый экземпляр VoiceoverGenerator с указанной конфигурацией
    pub fn new(config: VoiceoverConfig) -> Self {
        let synthesizer = Box::new(OpenAiClient::new(&config));
        Self::with_synthesizer(config, synthesizer)
    }

    /// Создать экземпляр VoiceoverGenerator с указанным синтезатором речи
    pub fn with_synthesizer(
        config: VoiceoverConfig,
        synthesizer: Box<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            input_path: config.input_path,
            output_path: config.output_path,
            synthesizer,
        }
    }

    /// Основной метод генерации озвучки
    ///
    /// Читает входной текст, генерирует речь и сохраняет аудио в выходной
    /// файл. Выходной файл создается только после успешной генерации.
    pub async fn run(&self) -> Result<PathBuf> {
        // Validate input file
        if tokio::fs::metadata(&self.input_path).await.is_err() {
            let error = format!(
                "Input text file not found: {}",
                self.input_path.display()
            );
            log::error!("{}", error);
            return Err(VoiceoverError::FileNotFound(error));
        }

        info!("Reading input text from {}", self.input_path.display());
        let text = tokio::fs::read_to_string(&self.input_path).await?;

        let audio = self.synthesizer.synthesize(&text).await?;

        // Создаем выходную директорию, если она отсутствует
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.output_path, &audio).await?;

        info!(
            "Voiceover saved to {} ({} bytes)",
            self.output_path.display(),
            audio.len()
        );
        Ok(self.output_path.clone())
    }
}

/// Публичный API для удобного использования
pub async fn generate_voiceover(config: VoiceoverConfig) -> Result<PathBuf> {
    let generator = VoiceoverGenerator::new(config);
    generator.run().await
}
