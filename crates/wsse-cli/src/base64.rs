//! # Base64 Subcommand
//!
//! Encodes Latin-1 text or decodes base64 back to text using the
//! configured pad character.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use wsse_core::HashConfig;
use wsse_crypto::Base64Codec;

/// Arguments for `wsse base64`.
#[derive(Args, Debug)]
pub struct Base64Args {
    #[command(subcommand)]
    pub command: Base64Command,
}

/// Base64 subcommands.
#[derive(Subcommand, Debug)]
pub enum Base64Command {
    /// Encode text whose characters are all in U+0000..=U+00FF.
    Encode {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Decode base64 and print the bytes as Latin-1 text.
    Decode {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

/// Execute `wsse base64`.
pub fn run_base64(args: &Base64Args, config: &HashConfig) -> Result<u8> {
    println!("{}", render_base64(&args.command, config)?);
    Ok(0)
}

/// Encode or decode, returning the text to print.
pub fn render_base64(command: &Base64Command, config: &HashConfig) -> Result<String> {
    let codec = Base64Codec::from_config(config);
    match command {
        Base64Command::Encode { text } => codec
            .encode_latin1(text)
            .context("input is not representable as bytes"),
        Base64Command::Decode { text } => {
            let bytes = codec
                .decode_byte_string(text.trim())
                .context("failed to decode base64")?;
            tracing::debug!(len = bytes.len(), "decoded base64");
            Ok(bytes.to_latin1_string())
        }
    }
}
