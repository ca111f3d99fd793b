// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Tabulates Quantas experiment test logs.
//!
//! A test log is loaded whole, every run is extracted (which also fixes the
//! widest flip seen across the log), and only then is the CSV written, since
//! the header depends on all of the runs.

#![forbid(unsafe_code)]

pub mod common;
mod config;
mod document;
mod extract;
#[cfg(test)]
mod extract_proptest;
mod tabulate;

use std::path::PathBuf;

pub use common::{Error, ErrorCode, ErrorKind, Result};
pub use config::{Config, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use document::{Document, TestEntry, load_document};
pub use extract::{
    BLOCK_CHAIN_LENGTH, Dataset, FREQUENCY, FlipCounts, NETWORK_TOTAL_FLIPPED_BLOCKS,
    NETWORK_TOTAL_SWITCHES, Record, Scalar, extract,
};
pub use tabulate::{header, write_csv, write_csv_path};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub rows: usize,
    pub max_blocks_flipped: u64,
}

/// Reads `config.input` and writes its CSV summary to `config.output`.
///
/// Nothing is written unless every run extracts cleanly.
pub fn convert(config: &Config) -> Result<Summary> {
    let doc = load_document(&config.input)?;
    let dataset = extract(&doc)?;
    write_csv_path(&dataset, &config.output)?;

    Ok(Summary {
        output: config.output.clone(),
        rows: dataset.len(),
        max_blocks_flipped: dataset.max_blocks_flipped,
    })
}
