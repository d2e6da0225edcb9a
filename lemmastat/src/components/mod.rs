use std::{
    io::{BufReader, Read, Write},
    path::Path,
};

use fs_err::File;
use serde::{de::DeserializeOwned, Serialize};

pub mod tagger;
pub mod tokenizer;

/// A component which can be stored as a binary, e. g. a lemma dictionary.
pub trait Component: Serialize + DeserializeOwned {
    fn name() -> &'static str;

    fn new<P: AsRef<Path>>(p: P) -> Result<Self, crate::Error> {
        let reader = BufReader::new(File::open(p.as_ref())?);
        Self::from_reader(reader)
    }

    fn from_reader<R: Read>(reader: R) -> Result<Self, crate::Error> {
        Ok(bincode::deserialize_from(reader)?)
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), crate::Error> {
        Ok(bincode::serialize_into(writer, self)?)
    }
}
