use std::io::Read;

use crate::{engine::accumulator::Accumulator, models::error::AppError};

/// Read every data row of the table in file order and sum columns 0 and 1.
///
/// The header row is never summed. Fails on the first malformed row.
pub fn sum_table<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<Accumulator, AppError> {
    if csv_reader.headers()?.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let mut accumulator = Accumulator::new();
    let mut record = csv::StringRecord::new();

    while csv_reader.read_record(&mut record)? {
        // Whitespace-only lines trim down to a single empty field
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        let line = record.position().map_or(0, |pos| pos.line());
        accumulator.add_row(&record, line)?;
    }

    Ok(accumulator)
}
