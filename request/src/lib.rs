//! A helper crate for downloading lemmastat model binaries from their distribution source.

use flate2::read::GzDecoder;
use log::info;
use std::{
    fs,
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("i/o error: {0}")]
    IOError(#[from] io::Error),
}

/// The file name of a binary for a language, e. g. `ru_lemmas.bin`.
pub fn binary_filename(lang_code: &str, name: &str) -> String {
    format!("{}_{}.bin", lang_code, name)
}

/// The path at which a binary is cached inside `cache_dir`.
pub fn cache_path<P: AsRef<Path>>(
    cache_dir: P,
    version: &str,
    lang_code: &str,
    name: &str,
) -> PathBuf {
    cache_dir
        .as_ref()
        .join(version)
        .join(lang_code)
        .join(binary_filename(lang_code, name))
}

/// Gets the binary `<lang_code>_<name>.bin`.
///
/// Reads it from `cache_dir` if it was cached by an earlier call. Otherwise it is requested as
/// `<base_url>/<version>/<lang_code>_<name>.bin.gz`, decompressed and written to the cache.
pub fn get_binary<P: AsRef<Path>>(
    base_url: &str,
    version: &str,
    lang_code: &str,
    name: &str,
    cache_dir: Option<P>,
) -> Result<impl Read, Error> {
    let filename = binary_filename(lang_code, name);
    let cached = cache_dir.map(|dir| cache_path(dir, version, lang_code, name));

    // if the file can be read, the data is already cached
    if let Some(path) = &cached {
        if let Ok(bytes) = fs::read(path) {
            return Ok(Cursor::new(bytes));
        }
    }

    // ... otherwise, request the data from the URL ...
    let url = format!(
        "{}/{}/{}.gz",
        base_url.trim_end_matches('/'),
        version,
        filename
    );
    info!("downloading {}", url);

    let bytes = reqwest::blocking::get(&url)?.error_for_status()?.bytes()?;

    let mut gz = GzDecoder::new(&bytes[..]);
    let mut buffer = Vec::new();
    gz.read_to_end(&mut buffer)?;

    // ... and then cache the data at the provided file, if one was found
    if let Some(path) = &cached {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &buffer)?;
    }

    Ok(Cursor::new(buffer))
}
