use log::error;

use voiceover::config::VoiceoverConfig;
use voiceover::utils::logger;
use voiceover::VoiceoverGenerator;

#[tokio::main]
async fn main() {
    // Инициализируем логгер
    logger::init_logger();

    let config = match VoiceoverConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let generator = VoiceoverGenerator::new(config);
    match generator.run().await {
        Ok(path) => {
            println!("Voiceover generated and saved to {}", path.display());
        }
        Err(e) => {
            error!("An error occurred: {}", e);
            std::process::exit(1);
        }
    }
}
