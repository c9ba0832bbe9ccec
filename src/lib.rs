pub mod invocation;
pub mod palindrome;
pub mod reader;
pub mod verdict;

// Re-export main types for convenient access
pub use invocation::{argument_bytes, Invocation, INVALID_ARGUMENTS};
pub use palindrome::{is_palindrome, is_palindrome_by, is_palindrome_bytes, is_palindrome_input};
pub use reader::{check_stdin, strip_line_terminator, LineChecker, LineReaderConfig, LineStats};
pub use verdict::Verdict;
