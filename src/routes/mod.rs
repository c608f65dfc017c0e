// Route exports
pub mod analyze;

use actix_cors::Cors;
use actix_web::web;

use crate::config::{CorsSettings, ScoringSettings};
use crate::core::{Advisor, Lexicon, LexiconError, MoodAnalyzer, Scorer};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub analyzer: MoodAnalyzer,
}

impl AppState {
    pub fn new(analyzer: MoodAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Build the analyzer, loading the lexicon file when one is configured
    pub fn from_settings(settings: &ScoringSettings) -> Result<Self, LexiconError> {
        let lexicon = match &settings.lexicon_path {
            Some(path) => {
                let lexicon = Lexicon::load_from(path)?;
                tracing::info!("Loaded {} lexicon entries from {}", lexicon.len(), path);
                lexicon
            }
            None => Lexicon::builtin(),
        };

        let scorer = Scorer::new(Arc::new(lexicon), settings.params());

        Ok(Self::new(MoodAnalyzer::new(scorer, Advisor::new())))
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(analyze::configure);
}

/// Request body size limit for the analyze endpoint
pub fn payload_config(limit: usize) -> web::PayloadConfig {
    web::PayloadConfig::new(limit)
}

/// CORS policy from settings
pub fn build_cors(settings: &CorsSettings) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(settings.allowed_methods.iter().map(String::as_str))
        .allowed_headers(settings.allowed_headers.iter().map(String::as_str));

    for origin in &settings.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    if settings.allow_credentials {
        cors = cors.supports_credentials();
    }

    if let Some(max_age) = settings.max_age_secs {
        cors = cors.max_age(max_age);
    }

    cors
}
