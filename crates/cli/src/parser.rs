//! Parsing of free-text dimensions, spreadsheet values and JSON input files.

use crate::request::{ImportRecord, ProductRecord};
use loadfit_core::Dimensions;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when reading input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid dimensions '{0}': expected three numbers such as 30x30x1.2")]
    InvalidDimensions(String),
}

/// Extracts the first three unsigned decimal numbers in `text` as length,
/// width and height.
///
/// Separators are free-form ("60x40x30", "60 * 40 * 30 cm", "L60/W40/H30").
/// Fewer than three numbers gives [`Dimensions::ZERO`], which request
/// validation then rejects.
pub fn parse_dimensions(text: &str) -> Dimensions {
    let numbers = scan_numbers(text, 3);
    match numbers.as_slice() {
        [l, w, h] => Dimensions::new(*l, *w, *h),
        _ => Dimensions::ZERO,
    }
}

/// Like [`parse_dimensions`], but fails instead of returning zeros.
pub fn parse_dimensions_strict(text: &str) -> Result<Dimensions, ParseError> {
    let numbers = scan_numbers(text, 3);
    match numbers.as_slice() {
        [l, w, h] => Ok(Dimensions::new(*l, *w, *h)),
        _ => Err(ParseError::InvalidDimensions(text.to_string())),
    }
}

/// Reads a leading decimal number the way a spreadsheet cell is coerced:
/// leading whitespace and a sign are allowed, trailing text is ignored.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let t = text.trim_start();
    let end = t
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    (1..=end).rev().find_map(|e| t[..e].parse::<f64>().ok())
}

/// Scans `\d+(\.\d+)?` tokens, stopping after `limit`.
fn scan_numbers(text: &str, limit: usize) -> Vec<f64> {
    let bytes = text.as_bytes();
    let mut numbers = Vec::with_capacity(limit);
    let mut i = 0;

    while i < bytes.len() && numbers.len() < limit {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        if let Ok(value) = text[start..i].parse::<f64>() {
            numbers.push(value);
        }
    }
    numbers
}

/// Reader for JSON request files.
#[derive(Debug, Default)]
pub struct InputParser;

impl InputParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Reads a JSON array of products.
    pub fn load_products(&self, path: impl AsRef<Path>) -> Result<Vec<ProductRecord>, ParseError> {
        self.parse_file(path)
    }

    /// Reads a JSON array of spreadsheet rows.
    pub fn load_rows(&self, path: impl AsRef<Path>) -> Result<Vec<ImportRecord>, ParseError> {
        self.parse_file(path)
    }

    /// Parses any JSON document from a file.
    pub fn parse_file<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_json(&content)
    }

    /// Parses any JSON document from a string.
    pub fn parse_json<T: DeserializeOwned>(&self, json: &str) -> Result<T, ParseError> {
        Ok(serde_json::from_str(json)?)
    }
}
