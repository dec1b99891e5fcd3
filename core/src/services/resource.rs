//! Generic resource operations.
//!
//! Every backend resource exposes the same five operations over the same
//! URL shape (`{base}/create`, `{base}/findMany`, `{base}/{id}`), so the
//! request-building logic lives here once and the per-entity modules only
//! bind base paths, DTO types, and filters.

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::Page;

/// Appends a resource's findMany filter fields to the outgoing request.
///
/// Implementations must omit absent values entirely (via
/// [`ApiRequest::query_opt`]) rather than serializing them empty; the
/// backend treats an omitted `isActive`/`isUsed` as `true`.
pub trait QueryParams {
    fn apply(&self, req: ApiRequest) -> ApiRequest;
}

/// No filters at all. Usable by resources whose findMany takes nothing.
impl QueryParams for () {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req
    }
}

pub(crate) async fn create<C, R>(http: &Http, base: &str, input: &C) -> Result<R, ApiError>
where
    C: Serialize,
    R: DeserializeOwned,
{
    http.request(ApiRequest::post(format!("{base}/create")).json(input)?)
        .await
}

pub(crate) async fn find_many<F, R>(http: &Http, base: &str, filter: &F) -> Result<Page<R>, ApiError>
where
    F: QueryParams,
    R: DeserializeOwned,
{
    http.request(filter.apply(ApiRequest::get(format!("{base}/findMany"))))
        .await
}

pub(crate) async fn find_one<R>(http: &Http, base: &str, id: Uuid) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    http.request(ApiRequest::get(format!("{base}/{{id}}")).path_param("id", id))
        .await
}

pub(crate) async fn update<U, R>(http: &Http, base: &str, id: Uuid, input: &U) -> Result<R, ApiError>
where
    U: Serialize,
    R: DeserializeOwned,
{
    http.request(
        ApiRequest::patch(format!("{base}/{{id}}"))
            .path_param("id", id)
            .json(input)?,
    )
    .await
}

pub(crate) async fn delete(http: &Http, base: &str, id: Uuid) -> Result<(), ApiError> {
    http.execute(ApiRequest::delete(format!("{base}/{{id}}")).path_param("id", id))
        .await
}
