use std::{fs::File, io::Read, path::Path};

use crate::models::error::AppError;

/// Build CSV reader with desired configuration, Sets the capacity 32k for the buffer used in the CSV reader
pub fn build_csv_reader(path: &Path) -> Result<csv::Reader<File>, AppError> {
    let file = File::open(path)?;
    Ok(build_csv_reader_from(file))
}

/// Same configuration over any reader.
pub fn build_csv_reader_from<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .buffer_capacity(32 * 1024)
        .from_reader(rdr)
}
