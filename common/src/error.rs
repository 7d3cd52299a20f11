use thiserror::Error;

/// Raised by the optional endpoint validation.
///
/// The record itself accepts any address and port; these only show up when a
/// caller explicitly asks for a usable socket address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("endpoint address is empty")]
    EmptyAddress,

    #[error("'{address}' is not a valid IP address")]
    InvalidAddress { address: String },

    #[error("port {port} is outside of 1-65535")]
    PortOutOfRange { port: i32 },
}
