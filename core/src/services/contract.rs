use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{ContractResponse, CreateContract, Page, UpdateContract};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct ContractFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    /// Case-insensitive substring match on the contract name.
    pub search: Option<String>,
    pub entity_id: Option<Uuid>,
    /// Start-date window, inclusive on both ends.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Omitted means the backend default: active contracts only.
    pub is_active: Option<bool>,
}

impl QueryParams for ContractFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
            .query_opt("entityId", self.entity_id)
            .query_opt("from", self.from)
            .query_opt("to", self.to)
            .query_opt("isActive", self.is_active)
    }
}

pub struct Contracts<'a> {
    pub(crate) http: &'a Http,
}

impl Contracts<'_> {
    const BASE: &'static str = "/api/contract";

    pub async fn create(&self, input: &CreateContract) -> Result<ContractResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(
        &self,
        filter: &ContractFilter,
    ) -> Result<Page<ContractResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<ContractResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateContract,
    ) -> Result<ContractResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    /// Soft delete: the backend flips `isActive` to false instead of
    /// removing the row.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}
