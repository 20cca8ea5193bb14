mod adapters;
mod engine;

mod models;

use engine::runner;
use models::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        err.report();
        std::process::exit(err.exit_code());
    }
}

async fn run() -> Result<(), AppError> {
    let config = adapters::cli::parse_config(std::env::args_os().skip(1))?;

    config.ensure_input_exists()?;

    let mut csv_reader = adapters::csv_parser::build_csv_reader(&config.input)?;

    let accumulator = runner::sum_table(&mut csv_reader)?;

    adapters::output::append_sum(&config.output, accumulator.total()).await?;

    eprintln!("Summed {} rows.", accumulator.rows());

    Ok(())
}
