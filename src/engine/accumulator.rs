use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::error::AppError;

/// Running total of the first two columns, owning the count of rows summed.
#[derive(Debug)]
pub struct Accumulator {
    total: Decimal,
    rows: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Accumulator {
            total: Decimal::ZERO,
            rows: 0,
        }
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Add columns 0 and 1 of a data row. `line` is only used for error reporting.
    ///
    /// The total is left untouched if the row is rejected.
    pub fn add_row(&mut self, record: &csv::StringRecord, line: u64) -> Result<(), AppError> {
        if record.len() < 2 {
            return Err(AppError::MissingColumn {
                line,
                found: record.len(),
            });
        }

        let first = parse_field(&record[0], line, 0)?;
        let second = parse_field(&record[1], line, 1)?;

        let total = self
            .total
            .checked_add(first)
            .and_then(|t| t.checked_add(second))
            .ok_or(AppError::Overflow { line })?;

        self.total = total;
        self.rows += 1;

        Ok(())
    }
}

/// Parse a single field as a decimal, accepting plain and scientific notation.
///
/// Text outside `[+-]digits[.digits][(e|E)[+-]digits]` is not a number. Numbers
/// that do not fit a `Decimal` (magnitude or precision) are out of range.
pub fn parse_field(value: &str, line: u64, column: usize) -> Result<Decimal, AppError> {
    if !is_numeric_literal(value) {
        return Err(AppError::InvalidNumber {
            line,
            column,
            value: value.to_string(),
        });
    }

    let parsed = if value.contains(['e', 'E']) {
        Decimal::from_scientific(value)
    } else {
        Decimal::from_str(value)
    };

    parsed.map_err(|_| AppError::OutOfRange {
        line,
        column,
        value: value.to_string(),
    })
}

fn is_numeric_literal(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut pos = 0;

    let skip_sign = |pos: &mut usize| {
        if matches!(bytes.get(*pos).copied(), Some(b'+' | b'-')) {
            *pos += 1;
        }
    };
    let digits = |pos: &mut usize| {
        let start = *pos;
        while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
            *pos += 1;
        }
        *pos > start
    };

    skip_sign(&mut pos);
    if !digits(&mut pos) {
        return false;
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if !digits(&mut pos) {
            return false;
        }
    }

    if matches!(bytes.get(pos).copied(), Some(b'e' | b'E')) {
        pos += 1;
        skip_sign(&mut pos);
        if !digits(&mut pos) {
            return false;
        }
    }

    pos == bytes.len()
}
