//! Logger module
//!
//! Logging utilities for the HTTP service:
//! - Server lifecycle logging
//! - Per-request access logging
//! - Error and warning logging
//! - Optional file-based output

mod format;
pub mod writer;

use format::Level;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Q&A server started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Data directory: {}", config.storage.data_dir));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("======================================\n");
}

/// Log an inbound request's method and path
pub fn log_request(method: &str, path: &str) {
    write_info(&format::request_line(method, path));
}

/// Log a completed resource operation with its response status
pub fn log_handled(method: &str, path: &str, status: u16) {
    write_info(&format::line(Level::Info, &format!("{method} {path} - {status}")));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format::line(
        Level::Info,
        &format!("Accepted connection from {peer_addr}"),
    ));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format::line(
        Level::Error,
        &format!("Failed to serve connection: {err:?}"),
    ));
}

pub fn log_error(message: &str) {
    write_error(&format::line(Level::Error, message));
}

pub fn log_warning(message: &str) {
    write_error(&format::line(Level::Warn, message));
}
