// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::common::{Error, ErrorCode, ErrorKind, Result};
use crate::extract::{Dataset, Record};

const LEADING_COLUMNS: [&str; 2] = ["Run #", "Blockchain Length"];
const TRAILING_COLUMNS: [&str; 2] = ["Total Flipped Blocks", "Total Switches"];

/// Column names for a dataset whose largest flip is `max_blocks_flipped`
/// blocks.  Flip columns run from 1 through the max, so a max of 0 yields
/// only the four fixed columns.
pub fn header(max_blocks_flipped: u64) -> Vec<String> {
    let mut header: Vec<String> = LEADING_COLUMNS.iter().map(|s| s.to_string()).collect();
    header.extend((1..=max_blocks_flipped).map(|n| format!("{n} Blocks Flipped")));
    header.extend(TRAILING_COLUMNS.iter().map(|s| s.to_string()));
    header
}

impl Record {
    /// This run's CSV fields, laid out to match `header(max_blocks_flipped)`.
    pub fn row(&self, max_blocks_flipped: u64) -> Vec<String> {
        let mut row = vec![self.index.to_string(), self.blockchain_length.to_string()];
        row.extend(
            self.flip_counts
                .dense(max_blocks_flipped)
                .map(|count| count.to_string()),
        );
        row.push(self.total_flipped.to_string());
        row.push(self.total_switches.to_string());
        row
    }
}

pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(header(dataset.max_blocks_flipped))?;
    for record in dataset.records.iter() {
        wtr.write_record(record.row(dataset.max_blocks_flipped))?;
    }
    wtr.flush()?;

    Ok(())
}

/// Writes `dataset` to `path`, replacing anything already there.  If the
/// write fails partway the file is removed, so a CSV left on disk is always
/// complete.
pub fn write_csv_path(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|err| {
        Error::new(ErrorKind::Io, ErrorCode::FileWrite, Some(err.to_string())).with_path(path)
    })?;

    if let Err(err) = write_csv(dataset, file) {
        let _ = std::fs::remove_file(path);
        return Err(err.with_path(path));
    }

    info!(
        path = %path.display(),
        rows = dataset.len(),
        flip_columns = dataset.max_blocks_flipped,
        "wrote csv"
    );

    Ok(())
}
