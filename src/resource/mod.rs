// Resource module entry
// Per-resource CRUD routing and dispatch

mod error;
mod handlers;
mod record;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

use crate::logger;
use crate::storage::CollectionStore;

pub use error::ApiError;
pub use response::{internal_error, route_not_found};

/// One resource family served by this API.
///
/// `collection` is both the URL prefix segment and the blob store key;
/// `singular` is the display name used in not-found messages.
pub struct ResourceKind {
    pub collection: &'static str,
    pub singular: &'static str,
}

pub const QUESTIONS: ResourceKind = ResourceKind {
    collection: "questions",
    singular: "Question",
};

pub const ANSWERS: ResourceKind = ResourceKind {
    collection: "answers",
    singular: "Answer",
};

/// A routed CRUD operation with its path-embedded id, where present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get(u64),
    Create,
    Update(u64),
    Delete(u64),
}

impl Operation {
    /// Whether this operation consumes a request body
    pub const fn wants_body(self) -> bool {
        matches!(self, Self::Create | Self::Update(_))
    }
}

/// Map a method and path onto one operation of `kind`, or `None` when no
/// rule matches. Rules are evaluated in order; first match wins.
pub fn route(method: &Method, path: &str, kind: &ResourceKind) -> Option<Operation> {
    let root = format!("/{}", kind.collection);
    let segments: Vec<&str> = path.split('/').collect();
    let on_resource = segments.get(1).copied() == Some(kind.collection);
    let id = segments.get(2).copied().and_then(parse_id);

    if *method == Method::GET && path == root {
        Some(Operation::List)
    } else if *method == Method::GET && on_resource {
        id.map(Operation::Get)
    } else if *method == Method::POST && path == root {
        Some(Operation::Create)
    } else if *method == Method::PUT && on_resource {
        id.map(Operation::Update)
    } else if *method == Method::DELETE && on_resource {
        id.map(Operation::Delete)
    } else {
        None
    }
}

/// Parse a path segment as a base-10 id from its leading digits:
/// "12abc" parses as 12, "abc" does not parse.
fn parse_id(segment: &str) -> Option<u64> {
    let digits = segment
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    segment[..digits].parse().ok()
}

/// Run one routed operation against the collection store and turn any
/// handler failure into its JSON error response
pub async fn dispatch(
    op: Operation,
    kind: &ResourceKind,
    store: &CollectionStore,
    body: &Bytes,
) -> Response<Full<Bytes>> {
    let result = match op {
        Operation::List => handlers::list(kind, store).await,
        Operation::Get(id) => handlers::get_by_id(kind, store, id).await,
        Operation::Create => handlers::create(kind, store, body).await,
        Operation::Update(id) => handlers::update(kind, store, id, body).await,
        Operation::Delete(id) => handlers::delete(kind, store, id).await,
    };

    let (method, path) = describe(op, kind);
    match result {
        Ok(response) => {
            logger::log_handled(method, &path, response.status().as_u16());
            response
        }
        Err(e) => {
            logger::log_error(&format!("{method} {path} - {e}"));
            response::message_response(e.status(), &e.to_string())
        }
    }
}

/// Method name and canonical path for an operation, used in log lines
fn describe(op: Operation, kind: &ResourceKind) -> (&'static str, String) {
    let root = format!("/{}", kind.collection);
    match op {
        Operation::List => ("GET", root),
        Operation::Get(id) => ("GET", format!("{root}/{id}")),
        Operation::Create => ("POST", root),
        Operation::Update(id) => ("PUT", format!("{root}/{id}")),
        Operation::Delete(id) => ("DELETE", format!("{root}/{id}")),
    }
}
