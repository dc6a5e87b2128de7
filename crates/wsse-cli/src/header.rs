//! # Header Subcommand
//!
//! Builds an `X-WSSE` UsernameToken header on the system clock and prints
//! either the header line or a JSON document with every token field.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use wsse_core::{Clock, SystemClock};
use wsse_token::{TokenConfig, WsseToken, WsseTokenBuilder};

use crate::config::HashArgs;

/// Arguments for `wsse header`.
#[derive(Args, Debug)]
pub struct HeaderArgs {
    /// Username placed in the header.
    #[arg(long, short)]
    pub username: String,

    /// Password hashed into the digest. Never logged.
    #[arg(long, short)]
    pub password: String,

    /// Print the token as JSON instead of a header line.
    #[arg(long)]
    pub json: bool,

    /// Override the nonce salt.
    #[arg(long)]
    pub salt: Option<String>,

    #[command(flatten)]
    pub hash: HashArgs,
}

#[derive(Serialize)]
struct HeaderDocument<'a> {
    header: &'static str,
    value: String,
    token: &'a WsseToken,
}

/// Execute the header subcommand.
pub fn run_header(args: &HeaderArgs, config: &TokenConfig) -> Result<u8> {
    println!("{}", render_header(args, config, SystemClock)?);
    Ok(0)
}

/// Build the token on `clock` and render it.
pub fn render_header<C: Clock>(args: &HeaderArgs, config: &TokenConfig, clock: C) -> Result<String> {
    let mut config = config.clone();
    if let Some(salt) = &args.salt {
        config.nonce_salt = salt.clone();
    }
    config.hash = args.hash.apply(config.hash);

    let builder =
        WsseTokenBuilder::with_clock(clock, config).context("invalid token configuration")?;
    let token = builder
        .build(&args.username, &args.password)
        .context("failed to build WSSE token")?;

    tracing::info!(username = %token.username, created = %token.created, "generated header");

    if args.json {
        let doc = HeaderDocument {
            header: WsseToken::HEADER_NAME,
            value: token.header_value(),
            token: &token,
        };
        serde_json::to_string_pretty(&doc).context("failed to serialize token")
    } else {
        Ok(token.header_line())
    }
}
