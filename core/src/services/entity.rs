use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{CreateEntity, EntityResponse, Page, UpdateEntity};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct EntityFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
}

impl QueryParams for EntityFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
    }
}

/// Tenant companies. Hard-deleted; no isActive convention here.
pub struct Entities<'a> {
    pub(crate) http: &'a Http,
}

impl Entities<'_> {
    const BASE: &'static str = "/api/entity";

    pub async fn create(&self, input: &CreateEntity) -> Result<EntityResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(&self, filter: &EntityFilter) -> Result<Page<EntityResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<EntityResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(&self, id: Uuid, input: &UpdateEntity) -> Result<EntityResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}
