// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Property-based tests for extraction and tabulation.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::json;

use crate::document::Document;
use crate::extract::extract;
use crate::tabulate::header;

// formats counts the way the simulator's frequency summary does
fn frequency_summary(counts: &BTreeMap<u64, u64>) -> String {
    counts
        .iter()
        .map(|(&blocks, &count)| {
            let noun = if blocks == 1 { "block" } else { "blocks" };
            format!("{blocks} {noun} flipped: {count}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn flip_counts_strategy() -> impl Strategy<Value = BTreeMap<u64, u64>> {
    prop::collection::btree_map(1u64..40, 0u64..10_000, 0..8)
}

fn runs_strategy() -> impl Strategy<Value = Vec<BTreeMap<u64, u64>>> {
    prop::collection::vec(flip_counts_strategy(), 0..12)
}

fn document(runs: &[BTreeMap<u64, u64>]) -> Document {
    let tests: Vec<_> = runs
        .iter()
        .enumerate()
        .map(|(i, counts)| {
            json!({
                "Block Chain Length": [100 + i],
                "Frequency": [frequency_summary(counts)],
                "Network Total Flipped Blocks": [counts.values().sum::<u64>()],
                "Network Total Switches": [i * 2],
            })
        })
        .collect();

    serde_json::from_value(json!({ "tests": tests })).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn max_blocks_flipped_is_largest_key(runs in runs_strategy()) {
        let dataset = extract(&document(&runs)).unwrap();
        let expected = runs
            .iter()
            .filter_map(|counts| counts.keys().next_back().copied())
            .max()
            .unwrap_or(0);

        prop_assert_eq!(expected, dataset.max_blocks_flipped);
        prop_assert_eq!(runs.len(), dataset.len());
    }

    #[test]
    fn rows_are_header_width(runs in runs_strategy()) {
        let dataset = extract(&document(&runs)).unwrap();
        let width = header(dataset.max_blocks_flipped).len();

        for record in dataset.records.iter() {
            prop_assert_eq!(width, record.row(dataset.max_blocks_flipped).len());
        }
    }

    #[test]
    fn dense_counts_match_summary(counts in flip_counts_strategy()) {
        let dataset = extract(&document(std::slice::from_ref(&counts))).unwrap();
        let record = &dataset.records[0];

        for blocks in 1..=dataset.max_blocks_flipped {
            let expected = counts.get(&blocks).copied().unwrap_or(0);
            prop_assert_eq!(expected, record.flip_counts.get(blocks));
        }
        prop_assert_eq!(counts.len(), record.flip_counts.len());
    }
}
