//! Workspace facade crate.
//!
//! Re-exports the `hydrobond` client so host applications can depend on
//! `hydrobond-workspace` and pick the transport with a feature flag instead of
//! wiring `core-runtime` and `bridge-desktop` themselves.
//!
//! - `desktop-shims` (default): `ClientConfig` falls back to the reqwest
//!   transport when no `HttpClient` is injected.

pub use hydrobond::*;
