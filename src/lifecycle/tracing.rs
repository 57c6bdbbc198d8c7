//! # Observability & Tracing
//!
//! Structured logging setup for binaries and examples that embed the store.
//!
//! The store logs every request with structured fields: `debug!` on entry,
//! `info!` on commit, `warn!` on rejection and on hydration problems. The
//! subscriber configured here uses a compact format without module paths,
//! filtered through `RUST_LOG`.
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show request entry and mailbox traffic
//! RUST_LOG=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
