//! Lexical statistics for free-form English and Russian text.
//! # Overview
//!
//! lemmastat turns a block of text into lemma frequencies (raw and stopword-filtered) and frequencies of
//! adjacent lemma pairs and triples. It has the following core abstractions:
//! - A [LanguageDetector][detect::LanguageDetector] classifying text as `en`, `ru` or `unknown`.
//! - A [PipelineRegistry][registry::PipelineRegistry] caching one lemmatizer [Pipeline][pipeline::Pipeline] per
//!   language. If no model can be acquired for a language, a blank pipeline is used which only lowercases.
//! - A [Lemmatizer][pipeline::Lemmatizer] splitting text into alphabetic tokens and mapping them to lemmas.
//! - A [StopwordFilter][stopwords::StopwordFilter] and an [NGramCounter][ngram::NGramCounter] computing the
//!   statistics, which are packaged by the [ResponseAssembler][response::ResponseAssembler].
//!
//! The [Analyzer][analyzer::Analyzer] ties everything together.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use lemmastat::{Analyzer, AnalyzerConfig, PipelineRegistry};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::default(), Arc::new(PipelineRegistry::blank()));
//! let response = analyzer.analyze("кот кот собака")?;
//!
//! assert_eq!(response.total_tokens, 3);
//! assert_eq!(response.items[0].lemma, "кот");
//! assert_eq!(response.items[0].count, 2);
//! # Ok::<(), lemmastat::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod analyzer;
pub mod components;
pub mod detect;
pub mod lang;
pub mod models;
pub mod ngram;
pub mod pipeline;
pub mod registry;
pub mod response;
pub mod stopwords;
pub mod types;
pub(crate) mod utils;

pub use analyzer::{Analyzer, AnalyzerConfig};
pub use registry::PipelineRegistry;
pub use response::AnalyzeResponse;
pub use types::Language;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error. Can have occured during deserialization or during serialization.
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
    #[cfg(feature = "download")]
    #[error(transparent)]
    Request(#[from] lemmastat_request::Error),
    #[error("text is {len} bytes long, at most {limit} bytes are allowed")]
    TextTooLarge { len: usize, limit: usize },
    #[error("no model available for language '{0}'")]
    ModelUnavailable(Language),
}
