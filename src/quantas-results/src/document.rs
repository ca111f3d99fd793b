// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Loading of the Quantas test log.
//!
//! The simulator's `LogWriter` emits a single JSON object whose `"tests"`
//! member holds one object per test run.  Each member of a test object is
//! an array, because the log writer appends to a list for every key even
//! when a run only ever records one value.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::common::{Error, Result};

/// The members of a single test run, keyed by the log writer's field names.
pub type TestEntry = Map<String, Value>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Document {
    pub tests: Vec<TestEntry>,
}

impl Document {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_slice(contents: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(contents)?)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

/// Reads the whole file at `path` and parses it as a test log.  The file
/// handle is closed before returning, on success or failure.
pub fn load_document(path: &Path) -> Result<Document> {
    let file = File::open(path).map_err(|err| Error::from(err).with_path(path))?;
    let doc = Document::from_reader(BufReader::new(file)).map_err(|err| err.with_path(path))?;

    info!(path = %path.display(), runs = doc.len(), "loaded test log");

    Ok(doc)
}
