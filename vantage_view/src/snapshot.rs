// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat key-value persisted state: value and error types plus map helpers.
//!
//! The viewer serializes to a flat `name → primitive` map (see
//! [`Viewer::snapshot`](crate::Viewer::snapshot) and
//! [`Viewer::restore`](crate::Viewer::restore)); the host persists that map
//! however it likes. Matrices are flattened to nine `Float` entries each
//! (`base.0` … `base.8`), so the map carries only primitives and there is no
//! versioning scheme beyond the key names.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use hashbrown::HashMap;
use vantage_transform::MatrixFormatError;

/// A primitive value in the persisted-state map.
#[derive(Clone, Debug, PartialEq)]
pub enum SnapshotValue {
    /// A boolean toggle.
    Bool(bool),
    /// A floating-point quantity (scales, margins, matrix coefficients).
    Float(f64),
    /// An integer quantity (durations).
    Int(i64),
    /// A string (display-mode names).
    Str(String),
}

/// Error returned when restoring a viewer from a persisted-state map fails.
///
/// A failed restore leaves the viewer untouched: values are parsed and
/// validated in full before any state is committed.
#[derive(Clone, Debug, PartialEq)]
pub enum RestoreError {
    /// A required key was absent from the map.
    Missing(String),
    /// A key was present but held a value of the wrong type.
    WrongType(String),
    /// A persisted matrix was not a valid similarity matrix.
    Matrix(MatrixFormatError),
    /// The persisted display-mode name was not recognized.
    UnknownDisplayMode(String),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(key) => write!(f, "persisted state is missing key {key:?}"),
            Self::WrongType(key) => write!(f, "persisted key {key:?} has the wrong value type"),
            Self::Matrix(err) => write!(f, "persisted matrix is invalid: {err}"),
            Self::UnknownDisplayMode(name) => write!(f, "unknown display mode {name:?}"),
        }
    }
}

impl core::error::Error for RestoreError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MatrixFormatError> for RestoreError {
    fn from(err: MatrixFormatError) -> Self {
        Self::Matrix(err)
    }
}

pub(crate) fn get_float(
    map: &HashMap<String, SnapshotValue>,
    key: &str,
) -> Result<f64, RestoreError> {
    match map.get(key) {
        Some(SnapshotValue::Float(v)) => Ok(*v),
        Some(_) => Err(RestoreError::WrongType(key.to_string())),
        None => Err(RestoreError::Missing(key.to_string())),
    }
}

pub(crate) fn get_bool(
    map: &HashMap<String, SnapshotValue>,
    key: &str,
) -> Result<bool, RestoreError> {
    match map.get(key) {
        Some(SnapshotValue::Bool(v)) => Ok(*v),
        Some(_) => Err(RestoreError::WrongType(key.to_string())),
        None => Err(RestoreError::Missing(key.to_string())),
    }
}

pub(crate) fn get_int(
    map: &HashMap<String, SnapshotValue>,
    key: &str,
) -> Result<i64, RestoreError> {
    match map.get(key) {
        Some(SnapshotValue::Int(v)) => Ok(*v),
        Some(_) => Err(RestoreError::WrongType(key.to_string())),
        None => Err(RestoreError::Missing(key.to_string())),
    }
}

pub(crate) fn get_str<'m>(
    map: &'m HashMap<String, SnapshotValue>,
    key: &str,
) -> Result<&'m str, RestoreError> {
    match map.get(key) {
        Some(SnapshotValue::Str(v)) => Ok(v),
        Some(_) => Err(RestoreError::WrongType(key.to_string())),
        None => Err(RestoreError::Missing(key.to_string())),
    }
}

/// Reads a matrix flattened under `prefix.0` … `prefix.8`.
pub(crate) fn get_matrix(
    map: &HashMap<String, SnapshotValue>,
    prefix: &str,
) -> Result<[f64; 9], RestoreError> {
    let mut m = [0.0; 9];
    for (i, slot) in m.iter_mut().enumerate() {
        *slot = get_float(map, &format!("{prefix}.{i}"))?;
    }
    Ok(m)
}

/// Writes a matrix flattened under `prefix.0` … `prefix.8`.
pub(crate) fn put_matrix(map: &mut HashMap<String, SnapshotValue>, prefix: &str, m: &[f64; 9]) {
    for (i, v) in m.iter().enumerate() {
        map.insert(format!("{prefix}.{i}"), SnapshotValue::Float(*v));
    }
}
