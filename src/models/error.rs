use std::{fmt, io, path::PathBuf};

/// Every way a run can fail, each mapped to a process exit code.
#[derive(Debug)]
pub enum AppError {
    /// `-i` or `-o` missing from the command line.
    MissingArguments,
    InputNotFound(PathBuf),
    /// Input had no header row at all.
    EmptyInput,
    MissingColumn {
        line: u64,
        found: usize,
    },
    InvalidNumber {
        line: u64,
        column: usize,
        value: String,
    },
    /// Numeric text that does not fit a `Decimal`.
    OutOfRange {
        line: u64,
        column: usize,
        value: String,
    },
    Overflow {
        line: u64,
    },
    Csv(csv::Error),
    Io(io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::MissingArguments => 1,
            AppError::InputNotFound(_) => 2,
            _ => 3,
        }
    }

    /// Usage errors go to stdout as fixed messages, everything else to stderr.
    pub fn report(&self) {
        match self {
            AppError::MissingArguments | AppError::InputNotFound(_) => println!("{}", self),
            _ => eprintln!("ERROR: {}", self),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingArguments => {
                write!(f, "ERROR: Input (-i) or output (-o) not provided!")
            }
            AppError::InputNotFound(path) => {
                write!(f, "ERROR: Input file [{}] does not exist!", path.display())
            }
            AppError::EmptyInput => write!(f, "input table has no header row"),
            AppError::MissingColumn { line, found } => write!(
                f,
                "line {}: expected at least 2 columns, found {}",
                line, found
            ),
            AppError::InvalidNumber {
                line,
                column,
                value,
            } => write!(
                f,
                "line {}, column {}: '{}' is not a number",
                line, column, value
            ),
            AppError::OutOfRange {
                line,
                column,
                value,
            } => write!(
                f,
                "line {}, column {}: '{}' is outside the supported decimal range",
                line, column, value
            ),
            AppError::Overflow { line } => write!(f, "line {}: sum overflowed", line),
            AppError::Csv(e) => write!(f, "failed to read input table: {}", e),
            AppError::Io(e) => write!(f, "failed to write output file: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Csv(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Csv(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::MissingArguments.exit_code(), 1);
        assert_eq!(AppError::InputNotFound("x.csv".into()).exit_code(), 2);
        assert_eq!(AppError::EmptyInput.exit_code(), 3);
        assert_eq!(AppError::Overflow { line: 4 }.exit_code(), 3);

        let io_err = AppError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(io_err.exit_code(), 3);
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            AppError::MissingArguments.to_string(),
            "ERROR: Input (-i) or output (-o) not provided!"
        );
        assert_eq!(
            AppError::InputNotFound("data/in.csv".into()).to_string(),
            "ERROR: Input file [data/in.csv] does not exist!"
        );
    }

    #[test]
    fn test_data_error_messages_name_the_line() {
        let err = AppError::InvalidNumber {
            line: 3,
            column: 1,
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 3, column 1: 'abc' is not a number");

        let err = AppError::OutOfRange {
            line: 2,
            column: 0,
            value: "1e30".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 2, column 0: '1e30' is outside the supported decimal range"
        );
        assert_eq!(err.exit_code(), 3);

        let err = AppError::MissingColumn { line: 5, found: 1 };
        assert_eq!(
            err.to_string(),
            "line 5: expected at least 2 columns, found 1"
        );
    }
}
