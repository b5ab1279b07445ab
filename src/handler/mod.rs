// Request handling module entry

mod router;

pub use router::handle_request;
