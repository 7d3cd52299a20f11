//! # Raw Console Output
//!
//! Plain console text is routed through `tracing` as an INFO event on
//! [`PRINT_TARGET`] carrying a single `raw_msg` field. Whatever subscriber is
//! installed decides how to render it; the CLI formatter prints it verbatim.
//! [`console_filter`] keeps that target at INFO whatever the rest of the filter says.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, ParseError};

pub const PRINT_TARGET: &str = "ignite::print";
pub const RAW_MSG_FIELD: &str = "raw_msg";

/// Adds `ignite::print=info` to `filter` so console output survives any `RUST_LOG`.
pub fn console_filter(filter: EnvFilter) -> Result<EnvFilter, ParseError> {
    let directive: Directive = format!("{PRINT_TARGET}=info").parse()?;
    Ok(filter.add_directive(directive))
}

pub fn raw(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Field visitor that pulls the `raw_msg` and `message` values out of an event.
#[derive(Debug, Default)]
pub struct RawMessage {
    pub raw_msg: Option<String>,
    pub message: Option<String>,
}

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            RAW_MSG_FIELD => self.raw_msg = Some(value.to_owned()),
            "message" => self.message = Some(value.to_owned()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            RAW_MSG_FIELD => self.raw_msg = Some(format!("{value:?}")),
            "message" => self.message = Some(format!("{value:?}")),
            _ => {}
        }
    }
}
