use std::mem;
use std::net::SocketAddr;

use ignite_common::config::Config;
use ignite_core::endpoint::NetworkEndpointRecord;
use tracing::debug;

use crate::terminal::print;

pub fn start(address: String, port: i32, repeat: usize, cfg: &Config) -> anyhow::Result<()> {
    let mut server = NetworkEndpointRecord::new();
    server.initialize(address, port);

    if cfg.strict {
        let socket: SocketAddr = server.socket_addr()?;
        debug!(%socket, "endpoint passed validation");
    }

    print::status_line("Server Status Before", status_flag(server.is_active()));

    for _ in 0..repeat {
        server.activate();
    }

    print::status_line("Server Status After", status_flag(server.is_active()));
    print::status_line(
        "Size of Server Object",
        format!("{} bytes", mem::size_of::<NetworkEndpointRecord>()),
    );

    Ok(())
}

fn status_flag(active: bool) -> u8 {
    u8::from(active)
}
