use anyhow::{bail, Result};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// Fixed message for a wrong positional argument count
pub const INVALID_ARGUMENTS: &str = "Invalid arguments.";

/// How the binary obtains its candidate strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Check exactly this argument, which may be empty or non-UTF-8
    Single(OsString),
    /// Check each non-empty line of standard input
    Lines,
}

impl Invocation {
    /// Select the mode from the positional arguments.
    /// More than one positional is the only invalid invocation.
    pub fn from_args(mut args: Vec<OsString>) -> Result<Self> {
        match args.len() {
            0 => Ok(Self::Lines),
            1 => Ok(Self::Single(args.remove(0))),
            _ => bail!(INVALID_ARGUMENTS),
        }
    }
}

/// Raw bytes of a command-line argument
#[cfg(unix)]
pub fn argument_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(arg.as_bytes())
}

/// Raw bytes of a command-line argument
#[cfg(not(unix))]
pub fn argument_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    match arg.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}
