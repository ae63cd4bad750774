//! Driver-layer primitives for a native Oracle database binding.
//!
//! This crate carries the pieces of the binding that do not touch the native
//! client library directly: the immutable error record every layer uses to
//! report failures, the internal error-code catalog behind it, and the
//! connection parameter type handed to the session layer.
//!
//! Failures come in exactly two kinds:
//!
//! * **Internal** -- detected by the binding itself and identified by an
//!   [`ErrorCode`] from the fixed catalog, rendered as
//!   `DPI-<code>: <catalog text>`.
//! * **External** -- surfaced by the underlying native client and passed
//!   through verbatim, tagged with the origin of the subsystem that produced
//!   it (e.g. `"OCI"`).
//!
//! The record is a pure carrier. It never retries, logs, or recovers; the
//! calling layer decides whether a failure is retried, surfaced, or
//! discarded. The record only guarantees that origin, code, and message
//! survive intact from detection to handling.

mod code;
pub use code::ErrorCode;

mod config;
pub use config::ConnectParams;

mod error;
pub use error::{DriverError, DriverResult, DRIVER_ORIGIN};
