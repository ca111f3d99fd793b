// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::path::PathBuf;

/// Test log written by the simulator, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "Delay10.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "processed_experiment_results.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[test]
fn test_default_paths() {
    let config = Config::default();
    assert_eq!(PathBuf::from("Delay10.txt"), config.input);
    assert_eq!(PathBuf::from("processed_experiment_results.csv"), config.output);
}
