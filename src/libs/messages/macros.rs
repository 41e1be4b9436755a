//! Macros for user-facing output.
//!
//! Every macro takes a [`Message`](super::Message) (or anything `Display`)
//! and routes it one of two ways:
//!
//! - **Debug mode** (`TAPSTAMP_DEBUG` or `RUST_LOG` set): through `tracing`,
//!   so messages interleave with structured log events
//! - **Normal mode**: straight to stdout/stderr with an emoji prefix
//!
//! ```text
//! msg_info!(..) ──▶ is_debug_mode()? ──yes──▶ tracing::info!
//!                                    └─no───▶ println!
//! ```
//!
//! | Macro               | Prefix | Debug route        | Normal route |
//! |---------------------|--------|--------------------|--------------|
//! | `msg_print!`        |        | `tracing::info!`   | `println!`   |
//! | `msg_success!`      | ✅     | `tracing::info!`   | `println!`   |
//! | `msg_info!`         | ℹ️     | `tracing::info!`   | `println!`   |
//! | `msg_warning!`      | ⚠️     | `tracing::warn!`   | `println!`   |
//! | `msg_error!`        | ❌     | `tracing::error!`  | `eprintln!`  |
//! | `msg_debug!`        | 🔍     | `tracing::debug!`  | (dropped)    |
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` build `anyhow::Error`s with
//! the ❌ prefix for propagation with `?`.
//!
//! ```rust
//! use tapstamp::libs::messages::Message;
//! use tapstamp::{msg_error_anyhow, msg_success};
//!
//! msg_success!(Message::ConfigSaved);
//! let error = msg_error_anyhow!(Message::NothingToExport);
//! assert_eq!(error.to_string(), "❌ No timestamps to export.");
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Environment variable that switches output to `tracing`.
pub const DEBUG_ENV: &str = "TAPSTAMP_DEBUG";

/// Log filter used in debug mode when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "tapstamp=trace";

/// Whether output goes through `tracing`. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
