//! Ember Builtins - native functions for the Ember interpreter.
//!
//! This crate provides the fixed table of builtins that interpreted programs
//! can call by name (`len`, `first`, `last`, `rest`, `push`), and the
//! process-wide registry the evaluator resolves them from.
//!
//! Every builtin is a pure function of its arguments: it checks the argument
//! count, then the argument types, then builds a new value. Inputs are never
//! modified, so the same array may be passed to any number of concurrent
//! calls.

mod builtins;
mod registry;

use std::sync::Once;

pub use registry::{builtins, lookup_builtin, BuiltinRegistry};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ember_builtins=debug` or `RUST_LOG=ember_object=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // The host may already have installed a subscriber; keep it.
            if let Err(err) = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
            {
                tracing::debug!(error = %err, "tracing subscriber already installed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_with_existing_subscriber() {
        // A host subscriber installed first makes our own install fail quietly.
        let _host = tracing_subscriber::fmt().with_test_writer().try_init();
        init_tracing();
        init_tracing();
        assert!(lookup_builtin("len").is_some());
    }
}
