//! # Digest Subcommands
//!
//! `wsse sha1` and `wsse hmac`: hash a string and print the digest in the
//! requested encoding. Hex case, pad character and bits per character come
//! from the loaded config unless overridden by flags.

use anyhow::Result;
use clap::{Args, ValueEnum};

use wsse_core::{CodeUnits, HashConfig};
use wsse_crypto::{Digest, DigestFormatter, HmacSha1, Sha1Engine};

use crate::config::HashArgs;

/// Output encoding for a digest.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigestFormat {
    /// 40 hex digits.
    #[default]
    Hex,
    /// 28 base64 characters.
    Base64,
    /// The digest bytes (or 16-bit units) as a string.
    Raw,
}

/// Arguments for `wsse sha1`.
#[derive(Args, Debug)]
pub struct Sha1Args {
    /// Text to hash.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output encoding.
    #[arg(long, short, value_enum, default_value_t = DigestFormat::Hex)]
    pub format: DigestFormat,

    #[command(flatten)]
    pub hash: HashArgs,
}

/// Arguments for `wsse hmac`.
#[derive(Args, Debug)]
pub struct HmacArgs {
    /// HMAC key.
    #[arg(long, short)]
    pub key: String,

    /// Text to authenticate.
    #[arg(value_name = "DATA")]
    pub data: String,

    /// Output encoding.
    #[arg(long, short, value_enum, default_value_t = DigestFormat::Hex)]
    pub format: DigestFormat,

    #[command(flatten)]
    pub hash: HashArgs,
}

/// Execute `wsse sha1`.
pub fn run_sha1(args: &Sha1Args, config: &HashConfig) -> Result<u8> {
    println!("{}", render_sha1(args, config));
    Ok(0)
}

/// Execute `wsse hmac`.
pub fn run_hmac(args: &HmacArgs, config: &HashConfig) -> Result<u8> {
    println!("{}", render_hmac(args, config));
    Ok(0)
}

/// SHA-1 of the argument text, formatted.
pub fn render_sha1(args: &Sha1Args, config: &HashConfig) -> String {
    let config = args.hash.apply(*config);
    tracing::debug!(bits = %config.bits_per_unit, format = ?args.format, "sha1");
    let digest =
        Sha1Engine::new(config.bits_per_unit).digest(&CodeUnits::from_text(&args.text));
    render(&digest, args.format, &config)
}

/// HMAC-SHA1 of the argument data under the key, formatted.
pub fn render_hmac(args: &HmacArgs, config: &HashConfig) -> String {
    let config = args.hash.apply(*config);
    tracing::debug!(bits = %config.bits_per_unit, format = ?args.format, "hmac-sha1");
    let digest = HmacSha1::new(config.bits_per_unit).compute(
        &CodeUnits::from_text(&args.key),
        &CodeUnits::from_text(&args.data),
    );
    render(&digest, args.format, &config)
}

fn render(digest: &Digest, format: DigestFormat, config: &HashConfig) -> String {
    let formatter = DigestFormatter::new(config);
    match format {
        DigestFormat::Hex => formatter.hex(digest),
        DigestFormat::Base64 => formatter.base64(digest),
        DigestFormat::Raw => formatter.raw(digest),
    }
}
