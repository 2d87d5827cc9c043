//! Command safety gate.
//!
//! Decides whether a command string may ever be stored (and therefore run).
//!
//! This is a blunt denylist heuristic, NOT a security boundary. Only the first
//! whitespace-delimited token is inspected, so anything chained after it with
//! shell metacharacters passes: `echo hi; rm file` is allowed. Do not rely on
//! this gate to sandbox execution.

use crate::CoreError;

/// Blocked command names.
///
/// The first token of a command is rejected if it equals or merely contains
/// any of these, so `xrmx` is rejected because it contains `rm`. The
/// multi-word entries can never match a single token and are kept only for
/// compatibility with the existing list.
pub const DENYLIST: &[&str] = &[
    "rm", "sudo", "mv", "cp", "chmod", "chown", "reboot", "shutdown", "dd", "mkfs", "format",
    "del /f", "rmdir /s",
];

/// Returns true if the command passes the denylist.
pub fn is_allowed(command: &str) -> bool {
    let Some(first) = command.split_whitespace().next() else {
        return false;
    };
    let first = first.to_lowercase();

    !DENYLIST.iter().any(|blocked| first.contains(blocked))
}

/// Like [`is_allowed`], but reports the rejected command as an error.
pub fn check(command: &str) -> Result<(), CoreError> {
    if is_allowed(command) {
        Ok(())
    } else {
        Err(CoreError::UnsafeCommand(command.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(!is_allowed(""));
        assert!(!is_allowed("   "));
        assert!(!is_allowed("\t\n"));
    }

    #[test]
    fn test_rejects_denylisted_first_token() {
        assert!(!is_allowed("rm -rf /"));
        assert!(!is_allowed("sudo apt update"));
        assert!(!is_allowed("SHUTDOWN now"));
        assert!(!is_allowed("  dd if=/dev/zero of=/dev/sda"));
    }

    #[test]
    fn test_rejects_token_containing_blocked_substring() {
        // "xrmx" contains "rm"; "scp" contains "cp"; "ddate" contains "dd".
        assert!(!is_allowed("xrmx"));
        assert!(!is_allowed("scp a b"));
        assert!(!is_allowed("ddate"));
        assert!(!is_allowed("/bin/rm file"));
    }

    #[test]
    fn test_allows_ordinary_commands() {
        assert!(is_allowed("echo hello"));
        assert!(is_allowed("ls -la"));
        assert!(is_allowed("date"));
    }

    #[test]
    fn test_only_first_token_is_inspected() {
        // Known under-coverage: the gate is not a sandbox.
        assert!(is_allowed("echo hi; rm file"));
        assert!(is_allowed("echo rm"));
    }

    #[test]
    fn test_check_reports_command() {
        assert_eq!(check("echo ok"), Ok(()));
        let err = check("sudo ls").unwrap_err();
        assert_eq!(err, CoreError::UnsafeCommand("sudo ls".to_string()));
        assert_eq!(err.to_string(), "Unsafe command detected: sudo ls");
    }
}
