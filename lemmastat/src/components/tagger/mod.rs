//! A dictionary-based lemma lookup.

use fs_err::File;
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    io::{self, BufRead, BufReader},
    path::Path,
};

use super::Component;
use crate::types::*;

fn read_lines<S: AsRef<Path>>(path: S) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        lines.push(line);
    }

    Ok(lines)
}

/// Associates word forms with their possible lemmas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LemmaDictionary {
    lemmas: DefaultHashMap<String, Vec<String>>,
}

impl LemmaDictionary {
    /// Creates a dictionary from dumps.
    ///
    /// # Arguments
    /// * `paths`: Paths to files where each line contains the word, lemma and tag, respectively,
    /// separated by tabs, to be added to the dictionary. The tag is optional and not used.
    /// * `remove_paths`: Paths to files with lines in the same format which are skipped if they appear in `paths`.
    pub fn from_dumps<S1: AsRef<Path>, S2: AsRef<Path>>(
        paths: &[S1],
        remove_paths: &[S2],
    ) -> io::Result<Self> {
        let mut disallowed = DefaultHashSet::new();
        for path in remove_paths {
            disallowed.extend(read_lines(path)?);
        }

        let mut dictionary = LemmaDictionary::default();

        for path in paths {
            for line in read_lines(path)? {
                if disallowed.contains(&line) {
                    continue;
                }

                let mut parts = line.split('\t');
                match (parts.next(), parts.next()) {
                    (Some(word), Some(lemma)) => dictionary.insert(word, lemma),
                    _ => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!(
                                "{}: line without lemma: {:?}",
                                path.as_ref().display(),
                                line
                            ),
                        ))
                    }
                }
            }
        }

        if dictionary.is_empty() {
            warn!("lemma dictionary built from dumps is empty");
        }

        Ok(dictionary)
    }

    /// Adds a lemma for a word form. Empty words or lemmas and duplicates are ignored.
    pub fn insert(&mut self, word: &str, lemma: &str) {
        let (word, lemma) = (word.trim(), lemma.trim());
        if word.is_empty() || lemma.is_empty() {
            return;
        }

        let lemmas = self.lemmas.entry(word.to_string()).or_insert_with(Vec::new);
        if !lemmas.iter().any(|x| x == lemma) {
            lemmas.push(lemma.to_string());
        }
    }

    /// Gets the preferred (i. e. first inserted) lemma of a word form.
    pub fn lemma(&self, word: &str) -> Option<&str> {
        self.lemmas
            .get(word)
            .and_then(|lemmas| lemmas.first())
            .map(|x| x.as_str())
    }

    /// Gets all lemmas of a word form in insertion order.
    pub fn lemmas(&self, word: &str) -> &[String] {
        self.lemmas.get(word).map_or(&[], |x| x.as_slice())
    }

    /// The number of known word forms.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, S)> for LemmaDictionary {
    fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
        let mut dictionary = LemmaDictionary::default();
        for (word, lemma) in iter {
            dictionary.insert(word.as_ref(), lemma.as_ref());
        }
        dictionary
    }
}

impl Component for LemmaDictionary {
    fn name() -> &'static str {
        "lemmas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn first_lemma_is_preferred() {
        let dictionary: LemmaDictionary =
            vec![("saw", "see"), ("saw", "saw"), ("saw", "see")].into_iter().collect();

        assert_eq!(dictionary.lemma("saw"), Some("see"));
        assert_eq!(dictionary.lemmas("saw"), &["see".to_string(), "saw".to_string()]);
        assert_eq!(dictionary.lemma("seen"), None);
        assert!(dictionary.lemmas("seen").is_empty());
    }

    #[test]
    fn empty_entries_are_ignored() {
        let dictionary: LemmaDictionary = vec![("", "x"), ("x", " ")].into_iter().collect();

        assert!(dictionary.is_empty());
    }

    #[test]
    fn reads_dumps() -> io::Result<()> {
        let dir = TempDir::new("dumps")?;
        let dump = dir.path().join("ru.tsv");
        let remove = dir.path().join("ru_remove.tsv");

        fs::write(
            &dump,
            "# form\tlemma\ttag\nкошки\tкошка\tNOUN\nбежал\tбежать\tVERB\nстали\tсталь\tNOUN\nстали\tстать\tVERB\n",
        )?;
        fs::write(&remove, "стали\tсталь\tNOUN\n")?;

        let dictionary = LemmaDictionary::from_dumps(&[&dump], &[&remove])?;

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.lemma("кошки"), Some("кошка"));
        assert_eq!(dictionary.lemma("стали"), Some("стать"));
        Ok(())
    }

    #[test]
    fn malformed_dump_is_an_error() -> io::Result<()> {
        let dir = TempDir::new("dumps")?;
        let dump = dir.path().join("en.tsv");
        fs::write(&dump, "went\n")?;

        let result = LemmaDictionary::from_dumps(&[&dump], &[] as &[&Path]);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
        Ok(())
    }

    #[test]
    fn binary_roundtrip() -> Result<(), crate::Error> {
        let dictionary: LemmaDictionary = vec![("went", "go")].into_iter().collect();

        let mut bytes = Vec::new();
        dictionary.to_writer(&mut bytes)?;
        let restored = LemmaDictionary::from_reader(&bytes[..])?;

        assert_eq!(restored.lemma("went"), Some("go"));
        Ok(())
    }
}
