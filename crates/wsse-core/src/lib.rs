//! # wsse-core — Foundational Types for the WSSE Toolkit
//!
//! Defines the input domains, configuration, timestamps, and errors shared
//! by every other crate in the workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated input newtypes.** `ByteString` can only hold code points
//!    `<= 255`; the base64 encoder accepts nothing else. `CodeUnits` is the
//!    hashing input and masks instead of rejecting, matching the legacy
//!    SHA-1 behavior.
//!
//! 2. **Explicit configuration.** Hex case, pad character, and bits per
//!    character travel in a `HashConfig` value passed into every call.
//!    There is no module-level mutable state.
//!
//! 3. **Offset-carrying timestamps.** `Timestamp` renders
//!    `YYYY-MM-DDTHH:MM:SS±HH:MM` and is read through a `Clock` so token
//!    construction can be tested against a fixed instant.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wsse-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bytes;
pub mod config;
pub mod error;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use bytes::{ByteString, CodeUnits};
pub use config::{BitsPerUnit, HashConfig, HexCase};
pub use error::{EncodingError, WsseError};
pub use temporal::{Clock, FixedClock, SystemClock, Timestamp};
