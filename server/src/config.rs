use clap::Parser;
use lemmastat::{
    analyzer::DEFAULT_MAX_TEXT_BYTES,
    detect::DEFAULT_CYRILLIC_THRESHOLD,
    models::{ChainedModels, LocalModels, RemoteModels},
    AnalyzerConfig,
};
use std::{path::PathBuf, time::Duration};

/// Command line and environment options of the server.
#[derive(Parser, Debug, Clone)]
#[command(name = "lemmastat-server", version, about = "HTTP API for lemma, bigram and trigram statistics")]
pub struct ServerConfig {
    /// Address to bind to.
    #[arg(long, env = "LEMMASTAT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory with `<lang>_lemmas.bin` or `<lang>_lemmas.tsv` models.
    #[arg(long, env = "LEMMASTAT_MODEL_DIR")]
    pub model_dir: Option<PathBuf>,

    /// Base URL to download models from if they are not found locally.
    #[arg(long, env = "LEMMASTAT_MODEL_URL")]
    pub model_url: Option<String>,

    /// Where downloaded models are cached. Defaults to the platform cache directory.
    #[arg(long, env = "LEMMASTAT_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Texts longer than this many bytes are rejected.
    #[arg(long, env = "LEMMASTAT_MAX_TEXT_BYTES", default_value_t = DEFAULT_MAX_TEXT_BYTES)]
    pub max_text_bytes: usize,

    /// Share of Cyrillic letters above which text is treated as Russian.
    #[arg(long, env = "LEMMASTAT_CYRILLIC_THRESHOLD", default_value_t = DEFAULT_CYRILLIC_THRESHOLD)]
    pub cyrillic_threshold: f64,

    /// Seconds after which an analysis is abandoned.
    #[arg(long, env = "LEMMASTAT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Acquire all models at startup instead of on first use.
    #[arg(long, env = "LEMMASTAT_WARM")]
    pub warm: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir.clone().or_else(|| {
            directories::ProjectDirs::from("", "", "lemmastat")
                .map(|dirs| dirs.cache_dir().to_path_buf())
        })
    }

    /// Local models take precedence over downloaded ones.
    pub fn model_provider(&self) -> ChainedModels {
        let mut models = ChainedModels::new();

        if let Some(dir) = &self.model_dir {
            models = models.with(LocalModels::new(dir));
        }
        if let Some(url) = &self.model_url {
            models = models.with(RemoteModels::new(url.clone(), self.cache_dir()));
        }

        models
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            max_text_bytes: self.max_text_bytes,
            cyrillic_threshold: self.cyrillic_threshold,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
