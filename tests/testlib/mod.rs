#![allow(dead_code)]

pub use std::path::PathBuf;
pub use test_utils::*;

pub const ARGECHO_PATH: &str = env!("CARGO_BIN_EXE_argecho");

/// The per-argument pause, as seen from outside the process.
pub const DELAY: Duration = Duration::from_millis(300);

/// Scheduling slack allowed when measuring the pause from a parent process.
pub const TOLERANCE: Duration = Duration::from_millis(50);

pub fn path() -> PathBuf {
    PathBuf::from(ARGECHO_PATH)
}

pub fn cmd() -> Command {
    let mut cmd = Command::new(path());

    // stdout + stderr captured by default
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    cmd.env_clear();
    if let Some(path) = std::env::var_os("PATH") {
        cmd.env("PATH", path);
    }

    cmd
}

pub fn expected(stream: &str, args: &[String]) -> Vec<String> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| format!("{stream}: Arg is {} is <{arg}>", i + 1))
        .collect()
}
