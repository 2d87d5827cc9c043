//! Host shell selection.

use tokio::process::Command;

/// How a command string is handed to the host's command interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: String,
    flag: String,
}

impl Shell {
    /// Create a shell invocation from an interpreter and its "run this string" flag.
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    /// Pick the interpreter for an OS family name as reported by
    /// `std::env::consts::OS`.
    pub fn for_os(os: &str) -> Self {
        if os.eq_ignore_ascii_case("windows") {
            Self::new("cmd.exe", "/C")
        } else {
            Self::new("sh", "-c")
        }
    }

    /// The interpreter for the OS this process is running on.
    pub fn host() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Build a process command that runs `command` through this shell.
    pub(crate) fn command(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.flag).arg(command);
        cmd
    }
}
