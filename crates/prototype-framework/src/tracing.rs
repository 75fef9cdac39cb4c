//! # Observability & Tracing
//!
//! The registry logs its lifecycle (`Registry started`, `Shutdown`) at `info`, each request
//! at `debug`, and misses at `warn`. Domain roots log each copy at `trace`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Registry lifecycle and spawns
//! RUST_LOG=debug cargo run     # Every request
//! RUST_LOG=trace cargo run     # Every copy, with element counts
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
///
/// Uses a compact format without module paths; log lines carry a `prototype` field instead.
/// Calling it twice is harmless: the second initialization is ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
