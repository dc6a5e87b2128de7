//! # Self-Test Subcommand
//!
//! Runs known-answer checks against the SHA-1, HMAC-SHA1 and base64
//! implementations and reports each result.

use anyhow::Result;

use wsse_core::HashConfig;

/// One known-answer check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
}

/// Run every check.
pub fn run_checks() -> Vec<Check> {
    let cfg = HashConfig::default();
    vec![
        Check {
            name: "sha1(\"abc\")",
            passed: wsse_crypto::self_test(),
        },
        Check {
            name: "sha1(\"\")",
            passed: wsse_crypto::sha1_hex("", &cfg) == "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        Check {
            name: "hmac_sha1(\"key\", fox)",
            passed: wsse_crypto::hmac_sha1_hex(
                "key",
                "The quick brown fox jumps over the lazy dog",
                &cfg,
            ) == "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9",
        },
        Check {
            name: "base64(\"foobar\")",
            passed: wsse_crypto::base64_encode(b"foobar") == "Zm9vYmFy"
                && wsse_crypto::base64_decode("Zm9vYmFy").ok().as_deref() == Some(&b"foobar"[..]),
        },
    ]
}

/// Execute `wsse self-test`. Exits 1 if any check fails.
pub fn run_self_test() -> Result<u8> {
    let checks = run_checks();
    for check in &checks {
        let status = if check.passed { "OK" } else { "FAIL" };
        println!("{status}: {}", check.name);
    }

    let failed = checks.iter().filter(|c| !c.passed).count();
    if failed == 0 {
        tracing::info!(checks = checks.len(), "self-test passed");
        Ok(0)
    } else {
        tracing::error!(failed, "self-test failed");
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_pass() {
        let checks = run_checks();
        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|c| c.passed), "{checks:?}");
    }

    #[test]
    fn exit_code_is_zero() {
        assert_eq!(run_self_test().unwrap(), 0);
    }
}
