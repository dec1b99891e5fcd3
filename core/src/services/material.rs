use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{CreateMaterial, MaterialResponse, Page, UpdateMaterial};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct MaterialFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
    pub entity_id: Option<Uuid>,
}

impl QueryParams for MaterialFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
            .query_opt("entityId", self.entity_id)
    }
}

pub struct Materials<'a> {
    pub(crate) http: &'a Http,
}

impl Materials<'_> {
    const BASE: &'static str = "/api/material";

    pub async fn create(&self, input: &CreateMaterial) -> Result<MaterialResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(
        &self,
        filter: &MaterialFilter,
    ) -> Result<Page<MaterialResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<MaterialResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateMaterial,
    ) -> Result<MaterialResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}
