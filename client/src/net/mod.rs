//! Server communication.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything goes through the flow endpoints under `/api/`, speaking the
//! request/reply types from the `wire` crate. Decoding is pure and tested
//! natively; only the transport itself needs a browser.

pub mod api;
