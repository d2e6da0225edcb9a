//! Sources of lemma dictionaries.
//!
//! A [ModelProvider] answers whether a capable model is available for a language and loads it. Providers are
//! only called by the [PipelineRegistry][crate::registry::PipelineRegistry], at most once per language.

use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    components::{tagger::LemmaDictionary, Component},
    types::Language,
    Error,
};

pub trait ModelProvider: Send + Sync {
    fn acquire(&self, language: Language) -> Result<LemmaDictionary, Error>;
}

impl<F> ModelProvider for F
where
    F: Fn(Language) -> Result<LemmaDictionary, Error> + Send + Sync,
{
    fn acquire(&self, language: Language) -> Result<LemmaDictionary, Error> {
        self(language)
    }
}

/// Never has a model. Every language falls back to the blank pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoModels;

impl ModelProvider for NoModels {
    fn acquire(&self, language: Language) -> Result<LemmaDictionary, Error> {
        Err(Error::ModelUnavailable(language))
    }
}

/// Models in a local directory, either as binary `<lang_code>_lemmas.bin` or as a tab-separated dump
/// `<lang_code>_lemmas.tsv`. The binary is preferred.
#[derive(Debug, Clone)]
pub struct LocalModels {
    dir: PathBuf,
}

impl LocalModels {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        LocalModels {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn binary_path(&self, language: Language) -> PathBuf {
        self.dir.join(format!(
            "{}_{}.bin",
            language.code(),
            LemmaDictionary::name()
        ))
    }

    pub fn dump_path(&self, language: Language) -> PathBuf {
        self.dir.join(format!(
            "{}_{}.tsv",
            language.code(),
            LemmaDictionary::name()
        ))
    }
}

impl ModelProvider for LocalModels {
    fn acquire(&self, language: Language) -> Result<LemmaDictionary, Error> {
        let binary = self.binary_path(language);
        if binary.is_file() {
            debug!("loading {}", binary.display());
            return LemmaDictionary::new(binary);
        }

        let dump = self.dump_path(language);
        if dump.is_file() {
            debug!("loading {}", dump.display());
            return Ok(LemmaDictionary::from_dumps(&[dump], &[] as &[PathBuf])?);
        }

        Err(Error::ModelUnavailable(language))
    }
}

/// Models downloaded from `<base_url>/<version>/<lang_code>_lemmas.bin.gz` and cached in `cache_dir`.
/// Downloads are blocking.
#[cfg(feature = "download")]
#[derive(Debug, Clone)]
pub struct RemoteModels {
    base_url: String,
    version: String,
    cache_dir: Option<PathBuf>,
}

#[cfg(feature = "download")]
impl RemoteModels {
    pub fn new<S: Into<String>>(base_url: S, cache_dir: Option<PathBuf>) -> Self {
        RemoteModels {
            base_url: base_url.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            cache_dir,
        }
    }

    /// Uses another model version than the one matching this crate.
    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = version.into();
        self
    }
}

#[cfg(feature = "download")]
impl ModelProvider for RemoteModels {
    fn acquire(&self, language: Language) -> Result<LemmaDictionary, Error> {
        let reader = lemmastat_request::get_binary(
            &self.base_url,
            &self.version,
            language.code(),
            LemmaDictionary::name(),
            self.cache_dir.as_ref(),
        )?;

        LemmaDictionary::from_reader(reader)
    }
}

/// Asks providers in order and returns the first model found.
#[derive(Default)]
pub struct ChainedModels {
    providers: Vec<Box<dyn ModelProvider>>,
}

impl ChainedModels {
    pub fn new() -> Self {
        ChainedModels::default()
    }

    pub fn with<P: ModelProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ModelProvider for ChainedModels {
    fn acquire(&self, language: Language) -> Result<LemmaDictionary, Error> {
        let mut error = Error::ModelUnavailable(language);

        for provider in &self.providers {
            match provider.acquire(language) {
                Ok(dictionary) => return Ok(dictionary),
                Err(x) => {
                    debug!("model provider failed for '{}': {}", language, x);
                    error = x;
                }
            }
        }

        Err(error)
    }
}
