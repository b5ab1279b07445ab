// CRUD operation handlers
// One set of handlers, instantiated per resource via `ResourceKind`.
// Every operation loads its collection fresh from the blob store and,
// when mutating, persists the whole sequence before responding.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::error::ApiError;
use super::record;
use super::response::json_response;
use super::ResourceKind;
use crate::storage::{CollectionStore, Record};

/// GET /{collection} — full array, possibly empty
pub async fn list(
    kind: &ResourceKind,
    store: &CollectionStore,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let records = store.load(kind.collection).await?;
    Ok(json_response(StatusCode::OK, &records))
}

/// GET /{collection}/{id}
pub async fn get_by_id(
    kind: &ResourceKind,
    store: &CollectionStore,
    id: u64,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let records = store.load(kind.collection).await?;
    let index = record::find_index(&records, id).ok_or(ApiError::NotFound(kind.singular))?;
    Ok(json_response(StatusCode::OK, &records[index]))
}

/// POST /{collection} — assign the next id and append.
///
/// The assigned id overwrites any caller-supplied `id` field.
pub async fn create(
    kind: &ResourceKind,
    store: &CollectionStore,
    body: &Bytes,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let mut created: Record = serde_json::from_slice(body)?;
    let mut records = store.load(kind.collection).await?;

    created.insert("id".to_string(), record::next_id(&records).into());
    records.push(created.clone());
    store.save(kind.collection, &records).await?;

    Ok(json_response(StatusCode::CREATED, &created))
}

/// PUT /{collection}/{id} — shallow-merge the partial body onto the
/// stored record; body fields win, `id` is never merged
pub async fn update(
    kind: &ResourceKind,
    store: &CollectionStore,
    id: u64,
    body: &Bytes,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let patch: Record = serde_json::from_slice(body)?;
    let mut records = store.load(kind.collection).await?;

    let index = record::find_index(&records, id).ok_or(ApiError::NotFound(kind.singular))?;
    record::merge(&mut records[index], patch);
    store.save(kind.collection, &records).await?;

    Ok(json_response(StatusCode::OK, &records[index]))
}

/// DELETE /{collection}/{id} — remove exactly one record and return it
pub async fn delete(
    kind: &ResourceKind,
    store: &CollectionStore,
    id: u64,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let mut records = store.load(kind.collection).await?;

    let index = record::find_index(&records, id).ok_or(ApiError::NotFound(kind.singular))?;
    let removed = records.remove(index);
    store.save(kind.collection, &records).await?;

    Ok(json_response(StatusCode::OK, &removed))
}
