//! Three-phase sentencing engine.
//!
//! The [`sentencing`] module holds the rule pipeline (range, base, provisional and definitive
//! penalty, regime and substitution). [`config`], [`error`] and [`telemetry`] carry the
//! application plumbing shared with the HTTP/CLI host in `services/api`.

pub mod config;
pub mod error;
pub mod sentencing;
pub mod telemetry;
