use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{ClaimResponse, CreateClaim, Page, UpdateClaim};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct ClaimFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
    pub entity_id: Option<Uuid>,
    pub contract_id: Option<Uuid>,
}

impl QueryParams for ClaimFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
            .query_opt("entityId", self.entity_id)
            .query_opt("contractId", self.contract_id)
    }
}

pub struct Claims<'a> {
    pub(crate) http: &'a Http,
}

impl Claims<'_> {
    const BASE: &'static str = "/api/claim";

    pub async fn create(&self, input: &CreateClaim) -> Result<ClaimResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(&self, filter: &ClaimFilter) -> Result<Page<ClaimResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<ClaimResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(&self, id: Uuid, input: &UpdateClaim) -> Result<ClaimResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}
