use std::fmt;

use crate::palindrome::is_palindrome_input;

/// Outcome of checking one candidate string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<'a> {
    /// Candidate exactly as received, not necessarily UTF-8
    pub candidate: &'a [u8],
    pub is_palindrome: bool,
}

impl<'a> Verdict<'a> {
    pub fn check<C>(candidate: &'a C) -> Self
    where
        C: AsRef<[u8]> + ?Sized,
    {
        let candidate = candidate.as_ref();
        Self {
            candidate,
            is_palindrome: is_palindrome_input(candidate),
        }
    }

    /// Text that follows the candidate in the rendered verdict
    pub fn suffix(&self) -> &'static str {
        if self.is_palindrome {
            " is a palindrome."
        } else {
            " is not a palindrome."
        }
    }

    /// Newline-terminated verdict with the candidate bytes written verbatim
    pub fn to_line(&self) -> Vec<u8> {
        let suffix = self.suffix();
        let mut line = Vec::with_capacity(self.candidate.len() + suffix.len() + 1);
        line.extend_from_slice(self.candidate);
        line.extend_from_slice(suffix.as_bytes());
        line.push(b'\n');
        line
    }
}

impl fmt::Display for Verdict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", String::from_utf8_lossy(self.candidate), self.suffix())
    }
}
