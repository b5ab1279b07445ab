// Server module entry
// Listener creation and per-connection handling

mod connection;
mod listener;

pub use connection::accept_connection;
pub use listener::create_listener;
