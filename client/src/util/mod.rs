//! Shared helpers: persistence, rendering, time labels, and file I/O.
//!
//! Everything that touches a browser API keeps a pure core (parsing,
//! formatting, encoding) that compiles and tests on the host, with the
//! `web_sys` calls gated behind the `csr` feature.

pub mod clock;
pub mod files;
pub mod markdown;
pub mod storage;
pub mod transcript;
