use std::{
    ffi::{OsStr, OsString},
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use log::{debug, info};
use progmem_array::ArrayFormat;

use crate::error::ConvertError;

mod error;
mod source;

const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut raw = std::env::args_os();
    let arg0 = raw.next();
    let program = program_name(arg0.as_deref());

    let Some(path) = single_path(raw.collect()) else {
        println!("{}", usage(&program));
        return ExitCode::from(USAGE_ERROR);
    };

    match convert(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Conversion failed: {err:?}");
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// The input path when exactly one argument was given. It is taken verbatim,
/// even if it looks like a flag.
fn single_path(mut args: Vec<OsString>) -> Option<PathBuf> {
    if args.len() != 1 {
        debug!("Expected one argument, got {args:?}");
        return None;
    }
    args.pop().map(PathBuf::from)
}

fn convert(path: &Path) -> Result<(), ConvertError> {
    let data = source::read_binary(path)?;
    info!("Converting {} ({} bytes)", path.display(), data.len());

    let document = ArrayFormat::default().render(&path.to_string_lossy(), &data);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn program_name(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_owned())
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <path_to_binary_file>")
}
