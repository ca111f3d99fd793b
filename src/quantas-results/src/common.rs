// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt;
use std::path::Path;
use std::{error, io, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    FileOpen,
    FileRead,
    FileWrite,
    JsonSyntax,
    UnexpectedShape, // valid JSON, but not a `{"tests": [...]}` document
    UnexpectedType,
    MissingField,
    CsvWrite,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            FileOpen => "file_open",
            FileRead => "file_read",
            FileWrite => "file_write",
            JsonSyntax => "json_syntax",
            UnexpectedShape => "unexpected_shape",
            UnexpectedType => "unexpected_type",
            MissingField => "missing_field",
            CsvWrite => "csv_write",
        };

        write!(f, "{name}")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    FieldMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, code: ErrorCode, details: Option<String>) -> Self {
        Error {
            kind,
            code,
            details,
        }
    }

    /// A test entry (1-based `run`) lacks `field`, or holds an empty
    /// sequence for it.
    pub fn field_missing(run: usize, field: &str) -> Self {
        Error::new(
            ErrorKind::FieldMissing,
            ErrorCode::MissingField,
            Some(format!("run #{run}: missing field '{field}'")),
        )
    }

    pub fn unexpected_type(run: usize, field: &str, expected: &str) -> Self {
        Error::new(
            ErrorKind::Parse,
            ErrorCode::UnexpectedType,
            Some(format!("run #{run}: field '{field}' is not {expected}")),
        )
    }

    /// Prefixes the details with the file the error concerns.
    pub fn with_path(self, path: &Path) -> Self {
        let details = match self.details {
            Some(details) => format!("{}: {}", path.display(), details),
            None => path.display().to_string(),
        };
        Error::new(self.kind, self.code, Some(details))
    }

    pub fn get_details(&self) -> Option<String> {
        self.details.clone()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Io => "IoError",
            ErrorKind::Parse => "ParseError",
            ErrorKind::FieldMissing => "FieldMissingError",
        };
        match self.details {
            Some(ref details) => write!(f, "{}{{{}: {}}}", kind, self.code, details),
            None => write!(f, "{}{{{}}}", kind, self.code),
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let code = match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => ErrorCode::FileOpen,
            _ => ErrorCode::FileRead,
        };
        Error::new(ErrorKind::Io, code, Some(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        let (kind, code) = match err.classify() {
            Category::Io => (ErrorKind::Io, ErrorCode::FileRead),
            Category::Syntax | Category::Eof => (ErrorKind::Parse, ErrorCode::JsonSyntax),
            Category::Data => (ErrorKind::Parse, ErrorCode::UnexpectedShape),
        };
        Error::new(kind, code, Some(err.to_string()))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        let code = if err.is_io_error() {
            ErrorCode::FileWrite
        } else {
            ErrorCode::CsvWrite
        };
        Error::new(ErrorKind::Io, code, Some(err.to_string()))
    }
}

pub type Result<T> = result::Result<T, Error>;

#[test]
fn test_error_display() {
    let err = Error::field_missing(3, "Frequency");
    assert_eq!(
        "FieldMissingError{missing_field: run #3: missing field 'Frequency'}",
        err.to_string()
    );

    let err = Error::new(ErrorKind::Io, ErrorCode::FileWrite, None);
    assert_eq!("IoError{file_write}", err.to_string());
}

#[test]
fn test_json_error_classification() {
    let err: Error = serde_json::from_str::<serde_json::Value>("{\"tests\": [")
        .unwrap_err()
        .into();
    assert_eq!(ErrorKind::Parse, err.kind);
    assert_eq!(ErrorCode::JsonSyntax, err.code);

    let err: Error = serde_json::from_str::<Vec<u32>>("{\"tests\": []}")
        .unwrap_err()
        .into();
    assert_eq!(ErrorKind::Parse, err.kind);
    assert_eq!(ErrorCode::UnexpectedShape, err.code);
}

#[test]
fn test_io_error_classification() {
    let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert_eq!(ErrorKind::Io, err.kind);
    assert_eq!(ErrorCode::FileOpen, err.code);
    assert_eq!(Some("gone".to_owned()), err.get_details());
}
