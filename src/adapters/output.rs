use rust_decimal::Decimal;
use std::path::Path;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::models::error::AppError;

pub fn format_sum_line(total: Decimal) -> String {
    format!("Sum = {}\n", total)
}

/// Append the summary line to `path`, creating the file if needed.
pub async fn append_sum(path: &Path, total: Decimal) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    file.write_all(format_sum_line(total).as_bytes()).await?;
    file.flush().await?;

    Ok(())
}
