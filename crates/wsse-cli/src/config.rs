//! # Configuration Loading
//!
//! Reads an optional `TokenConfig` from a JSON or YAML file, chosen by
//! extension, and applies per-command flag overrides on top of it.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;

use wsse_core::{BitsPerUnit, HashConfig, HexCase};
use wsse_token::TokenConfig;

/// Hashing flags shared by the digest and header subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct HashArgs {
    /// Emit uppercase hex digits.
    #[arg(long)]
    pub upper: bool,

    /// Bits hashed per input character (8 or 16).
    #[arg(long, value_parser = parse_bits)]
    pub bits: Option<BitsPerUnit>,
}

impl HashArgs {
    /// Apply the flags that were given on top of `hash`.
    pub fn apply(&self, mut hash: HashConfig) -> HashConfig {
        if self.upper {
            hash.hex_case = HexCase::Upper;
        }
        if let Some(bits) = self.bits {
            hash.bits_per_unit = bits;
        }
        hash
    }
}

fn parse_bits(s: &str) -> Result<BitsPerUnit, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("expected 8 or 16, got {s:?}"))?;
    BitsPerUnit::try_from(n).map_err(|e| e.to_string())
}

/// Load the token configuration, or the defaults when no path is given.
///
/// # Errors
///
/// Fails if the file cannot be read, has an unknown extension, does not
/// parse, or names an unusable pad character.
pub fn load_config(path: Option<&Path>) -> Result<TokenConfig> {
    let Some(path) = path else {
        return Ok(TokenConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = parse_config(&content, path)?;
    config
        .validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        bits = %config.hash.bits_per_unit,
        "loaded configuration"
    );
    Ok(config)
}

fn parse_config(content: &str, path: &Path) -> Result<TokenConfig> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON: {}", path.display())),
        Some("yaml" | "yml") => serde_yaml::from_str(content)
            .with_context(|| format!("failed to parse YAML: {}", path.display())),
        _ => bail!(
            "unsupported config format (expected .json, .yaml or .yml): {}",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), TokenConfig::default());
    }

    #[test]
    fn loads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "wsse.yaml",
            "nonce_salt: pepper\nhash:\n  hex_case: upper\n  pad_char: '.'\n",
        );
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.nonce_salt, "pepper");
        assert_eq!(cfg.hash.hex_case, HexCase::Upper);
        assert_eq!(cfg.hash.pad_char, '.');
        assert_eq!(cfg.hash.bits_per_unit, BitsPerUnit::Eight);
    }

    #[test]
    fn loads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "wsse.json", r#"{"hash": {"bits_per_unit": 16}}"#);
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.hash.bits_per_unit, BitsPerUnit::Sixteen);
        assert_eq!(cfg.nonce_salt, TokenConfig::DEFAULT_NONCE_SALT);
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "wsse.toml", "nonce_salt = 'x'");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"));
    }

    #[test]
    fn rejects_bad_bits() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "wsse.json", r#"{"hash": {"bits_per_unit": 12}}"#);
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn rejects_alphabet_pad() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "wsse.yml", "hash:\n  pad_char: A\n");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("pad character"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn flags_override_file_values() {
        let base = HashConfig::default();
        let args = HashArgs {
            upper: true,
            bits: Some(BitsPerUnit::Sixteen),
        };
        let hash = args.apply(base);
        assert_eq!(hash.hex_case, HexCase::Upper);
        assert_eq!(hash.bits_per_unit, BitsPerUnit::Sixteen);
        assert_eq!(HashArgs::default().apply(base), base);
    }

    #[test]
    fn parse_bits_values() {
        assert_eq!(parse_bits("8").unwrap(), BitsPerUnit::Eight);
        assert_eq!(parse_bits("16").unwrap(), BitsPerUnit::Sixteen);
        assert!(parse_bits("32").is_err());
        assert!(parse_bits("eight").is_err());
    }
}
