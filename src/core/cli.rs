use clap::Parser;

/// Parse positional arguments, printing usage and exiting on misuse.
///
/// Help and version requests exit with code 0; any other parse failure prints the
/// usage text to stderr and exits with code 1.
pub fn parse_or_exit<T: Parser>() -> T {
    parse_from_or_exit(std::env::args_os())
}

pub fn parse_from_or_exit<T, I, A>(args: I) -> T
where
    T: Parser,
    I: IntoIterator<Item = A>,
    A: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            let code = exit_code_for(&e);
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Exit code for a clap error: 0 for `--help`/`--version`, 1 otherwise.
#[must_use]
pub fn exit_code_for(error: &clap::Error) -> i32 {
    if error.use_stderr() { 1 } else { 0 }
}

/// Value parser for instance counts: a non-negative integer.
///
/// # Errors
///
/// Returns a message if `raw` is not an integer or is negative.
pub fn parse_capacity(raw: &str) -> Result<i32, String> {
    let capacity: i32 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a whole number"))?;
    if capacity < 0 {
        return Err(format!("capacity must be zero or more, got {capacity}"));
    }
    Ok(capacity)
}
