#![cfg(test)]
use std::mem;

use ignite_cli::commands::start::start;
use ignite_common::config::Config;
use ignite_core::endpoint::NetworkEndpointRecord;

use crate::utils::capture;

fn run_start(address: &str, port: i32, repeat: usize) -> Vec<String> {
    colored::control::set_override(false);

    let cfg = Config::default();
    let captured = capture(|| {
        start(String::from(address), port, repeat, &cfg).unwrap();
    });
    captured.raw_lines()
}

#[test]
fn start_prints_status_around_activation() {
    let lines: Vec<String> = run_start("111.1.11.12", 8080, 1);

    assert_eq!(
        lines,
        vec![
            String::from("Server Status Before: 0"),
            String::from("[LOG] Server started at 111.1.11.12:8080"),
            String::from("Server Status After: 1"),
            format!(
                "Size of Server Object: {} bytes",
                mem::size_of::<NetworkEndpointRecord>()
            ),
        ]
    );
}

#[test]
fn start_repeat_activates_once() {
    let lines: Vec<String> = run_start("10.0.0.1", 1, 2);

    let activations: Vec<&String> = lines
        .iter()
        .filter(|line| line.starts_with("[LOG]"))
        .collect();
    assert_eq!(activations, vec!["[LOG] Server started at 10.0.0.1:1"]);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[2], "Server Status After: 1");
}

#[test]
fn start_without_activation() {
    let lines: Vec<String> = run_start("10.0.0.1", 1, 0);

    assert!(lines.iter().all(|line| !line.starts_with("[LOG]")));
    assert_eq!(lines[0], "Server Status Before: 0");
    assert_eq!(lines[1], "Server Status After: 0");
}
