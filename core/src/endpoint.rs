//! # Network Endpoint Record
//!
//! A record holding an address, a port and an activation flag.
//!
//! The record starts unconfigured, is set up with [`NetworkEndpointRecord::initialize`]
//! and is switched on with [`NetworkEndpointRecord::activate`]. Activation is one-way:
//! there is no way back to inactive other than initializing the record again.
//!
//! Nothing about the address or the port is checked. Callers that need a usable
//! socket address can ask for one with [`NetworkEndpointRecord::socket_addr`].

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use ignite_common::error::EndpointError;
use ignite_common::logging;
use tracing::{debug, trace};

pub const LOG_TAG: &str = "[LOG]";

/// Receives the line written when an endpoint becomes active.
pub trait ActivationSink {
    fn emit(&mut self, line: &str);
}

/// Sends activation lines to the console through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ActivationSink for TracingSink {
    fn emit(&mut self, line: &str) {
        logging::raw(line);
    }
}

impl ActivationSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

impl<S: ActivationSink + ?Sized> ActivationSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

#[derive(Debug, Default)]
pub struct NetworkEndpointRecord<S: ActivationSink = TracingSink> {
    address: String,
    port: i32,
    is_active: bool,
    sink: S,
}

impl NetworkEndpointRecord {
    /// Creates an unconfigured record that logs to the console.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ActivationSink> NetworkEndpointRecord<S> {
    /// Creates an unconfigured record that writes its activation line to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            address: String::new(),
            port: 0,
            is_active: false,
            sink,
        }
    }

    /// Sets the address and port and puts the record back into the inactive state.
    pub fn initialize(&mut self, address: impl Into<String>, port: i32) {
        self.address = address.into();
        self.port = port;
        self.is_active = false;
        debug!(address = %self.address, port = self.port, "endpoint initialized");
    }

    /// Marks the endpoint active and emits the activation line.
    ///
    /// Calling this on an endpoint that is already active does nothing.
    pub fn activate(&mut self) {
        if self.is_active {
            trace!(endpoint = %self, "endpoint already active");
            return;
        }

        self.is_active = true;
        let line: String = format!("{LOG_TAG} Server started at {self}");
        self.sink.emit(&line);
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Checks the configured address and port and turns them into a [`SocketAddr`].
    ///
    /// The address must be a literal IPv4 or IPv6 address and the port must fit
    /// in 1-65535. This never changes the record.
    pub fn socket_addr(&self) -> Result<SocketAddr, EndpointError> {
        if self.address.trim().is_empty() {
            return Err(EndpointError::EmptyAddress);
        }

        let ip: IpAddr = self
            .address
            .parse()
            .map_err(|_| EndpointError::InvalidAddress {
                address: self.address.clone(),
            })?;

        let port: u16 = u16::try_from(self.port)
            .ok()
            .filter(|port| *port != 0)
            .ok_or(EndpointError::PortOutOfRange { port: self.port })?;

        Ok(SocketAddr::new(ip, port))
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: ActivationSink> fmt::Display for NetworkEndpointRecord<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
