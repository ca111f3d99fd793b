// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::common::{Error, Result};
use crate::document::{Document, TestEntry};

pub const BLOCK_CHAIN_LENGTH: &str = "Block Chain Length";
pub const FREQUENCY: &str = "Frequency";
pub const NETWORK_TOTAL_FLIPPED_BLOCKS: &str = "Network Total Flipped Blocks";
pub const NETWORK_TOTAL_SWITCHES: &str = "Network Total Switches";

lazy_static! {
    // "1 block flipped: 17, 2 blocks flipped: 7"
    static ref FLIP_RE: Regex = Regex::new(r"([0-9]+) blocks? flipped: ([0-9]+)").unwrap();
}

/// Sparse map from "number of blocks flipped" to how often a flip of that
/// size happened during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipCounts(BTreeMap<u64, u64>);

impl FlipCounts {
    /// Collects every `N block(s) flipped: count` segment in `text`.  Text
    /// between segments is ignored, and a repeated N keeps the last count.
    pub fn parse(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for caps in FLIP_RE.captures_iter(text) {
            let (blocks, count) = match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
                (Ok(blocks), Ok(count)) => (blocks, count),
                _ => {
                    warn!(segment = &caps[0], "flip count out of range, skipping");
                    continue;
                }
            };
            counts.insert(blocks, count);
        }
        FlipCounts(counts)
    }

    /// The count recorded for flips of `blocks` blocks, or 0.
    pub fn get(&self, blocks: u64) -> u64 {
        self.0.get(&blocks).copied().unwrap_or(0)
    }

    pub fn max_key(&self) -> Option<u64> {
        self.0.keys().next_back().copied()
    }

    /// Counts for 1..=max, with 0 for sizes that never occurred.
    pub fn dense(&self, max: u64) -> impl Iterator<Item = u64> + '_ {
        (1..=max).map(move |blocks| self.get(blocks))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A scalar copied from the log as written.  Numbers keep their source
/// digits, strings are written without their JSON quotes, and `null` is an
/// empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scalar(Value);

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        Scalar(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            // extraction never builds a Scalar from a container
            other => write!(f, "{other}"),
        }
    }
}

/// One test run from the log.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// 1-based position of the run in the log.
    pub index: usize,
    pub blockchain_length: Scalar,
    pub flip_counts: FlipCounts,
    pub total_flipped: Scalar,
    pub total_switches: Scalar,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Largest flip size seen in any record, 0 if none.
    pub max_blocks_flipped: u64,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn extract(doc: &Document) -> Result<Dataset> {
    let mut records = Vec::with_capacity(doc.len());
    let mut max_blocks_flipped: u64 = 0;

    for (i, test) in doc.tests.iter().enumerate() {
        let record = extract_record(i + 1, test)?;
        if let Some(max) = record.flip_counts.max_key() {
            max_blocks_flipped = max_blocks_flipped.max(max);
        }
        debug!(
            run = record.index,
            flip_sizes = record.flip_counts.len(),
            "extracted run"
        );
        records.push(record);
    }

    Ok(Dataset {
        records,
        max_blocks_flipped,
    })
}

fn extract_record(index: usize, test: &TestEntry) -> Result<Record> {
    let blockchain_length = scalar_field(index, test, BLOCK_CHAIN_LENGTH)?;
    let frequency = match first(index, test, FREQUENCY)? {
        Value::String(s) => s.as_str(),
        _ => return Err(Error::unexpected_type(index, FREQUENCY, "a string")),
    };
    let flip_counts = FlipCounts::parse(frequency);
    let total_flipped = scalar_field(index, test, NETWORK_TOTAL_FLIPPED_BLOCKS)?;
    let total_switches = scalar_field(index, test, NETWORK_TOTAL_SWITCHES)?;

    Ok(Record {
        index,
        blockchain_length,
        flip_counts,
        total_flipped,
        total_switches,
    })
}

// the log writer wraps every value in a list; the value we want is
// always the first element.
fn first<'a>(index: usize, test: &'a TestEntry, field: &str) -> Result<&'a Value> {
    match test.get(field) {
        Some(Value::Array(values)) => values
            .first()
            .ok_or_else(|| Error::field_missing(index, field)),
        Some(_) => Err(Error::unexpected_type(index, field, "a list")),
        None => Err(Error::field_missing(index, field)),
    }
}

fn scalar_field(index: usize, test: &TestEntry, field: &str) -> Result<Scalar> {
    match first(index, test, field)? {
        Value::Array(_) | Value::Object(_) => {
            Err(Error::unexpected_type(index, field, "a scalar"))
        }
        value => Ok(Scalar(value.clone())),
    }
}
