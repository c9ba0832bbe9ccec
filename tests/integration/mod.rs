// Shared helpers for driving the palcheck binary from integration tests

use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// One black-box run: arguments, standard input, and the expected streams
pub struct IoCase<'a> {
    pub args: &'a [&'a str],
    pub stdin: &'a str,
    pub expected_stdout: &'a str,
    pub expected_stderr: &'a str,
    pub expect_success: bool,
}

/// Temporary directory holding stdin fixtures for a test
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write `content` to a fixture file and return its path
    pub fn create_input_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(name);
        fs::write(&file_path, content).expect("Failed to write input fixture");
        file_path
    }

    /// Run the binary with `args`, feeding `stdin` from a fixture file
    pub fn run(&self, args: &[&str], stdin: &[u8]) -> Output {
        self.run_with_env(args, stdin, &[])
    }

    pub fn run_with_env(&self, args: &[&str], stdin: &[u8], env: &[(&str, &str)]) -> Output {
        let args: Vec<&OsStr> = args.iter().map(|arg| OsStr::new(*arg)).collect();
        self.run_os_with_env(&args, stdin, env)
    }

    /// Run with arguments that need not be valid UTF-8
    pub fn run_os(&self, args: &[&OsStr], stdin: &[u8]) -> Output {
        self.run_os_with_env(args, stdin, &[])
    }

    fn run_os_with_env(&self, args: &[&OsStr], stdin: &[u8], env: &[(&str, &str)]) -> Output {
        let input_path = self.create_input_file("stdin.txt", stdin);
        let input = File::open(&input_path).expect("Failed to open input fixture");

        let mut command = Command::new(env!("CARGO_BIN_EXE_palcheck"));
        command
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::from(input));
        for (key, value) in env {
            command.env(key, value);
        }

        command.output().expect("Failed to run palcheck")
    }

    /// Run an IoCase and assert every expected stream and the exit status
    pub fn assert_case(&self, case: &IoCase<'_>) {
        let output = self.run(case.args, case.stdin.as_bytes());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert_eq!(
            output.status.success(),
            case.expect_success,
            "unexpected exit status for {:?}: {:?}, stderr: {stderr}",
            case.args,
            output.status
        );
        assert_eq!(stdout, case.expected_stdout, "stdout mismatch for {:?}", case.args);
        assert_eq!(stderr, case.expected_stderr, "stderr mismatch for {:?}", case.args);
    }
}
