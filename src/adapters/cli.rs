use std::ffi::{OsStr, OsString};

use crate::models::{config::Config, error::AppError};

/// Parse `-i <input>` and `-o <output>` from command-line arguments (program name excluded).
///
/// Values may be separate (`-i in.csv`) or attached (`-iin.csv`) and need not be
/// valid UTF-8. A later flag overrides an earlier one and unknown flags are ignored.
/// Like getopt, parsing stops at `--` or at the first argument that is not a flag.
pub fn parse_config<I>(args: I) -> Result<Config, AppError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut input = None;
    let mut output = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let bytes = arg.as_encoded_bytes();

        if bytes == b"--" || bytes == b"-" || !bytes.starts_with(b"-") {
            break;
        }

        let slot = if bytes.starts_with(b"-i") {
            &mut input
        } else if bytes.starts_with(b"-o") {
            &mut output
        } else {
            continue;
        };

        // The next argument is always taken as the value, even if it looks like a flag
        let value = match &bytes[2..] {
            [] => args.next(),
            attached => {
                // SAFETY: split directly after the ASCII flag prefix, a valid UTF-8 boundary
                Some(unsafe { OsStr::from_encoded_bytes_unchecked(attached) }.to_owned())
            }
        };

        if value.is_some() {
            *slot = value;
        }
    }

    Config::from_parts(input, output)
}
