use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{
    BulkCreateMineMonthlyData, CreateMine, CreateMineMonthlyData, MineMonthlyDataResponse,
    MineResponse, Page, UpdateMine, UpdateMineMonthlyData,
};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct MineFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
    pub entity_id: Option<Uuid>,
    pub contract_id: Option<Uuid>,
}

impl QueryParams for MineFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
            .query_opt("entityId", self.entity_id)
            .query_opt("contractId", self.contract_id)
    }
}

pub struct Mines<'a> {
    pub(crate) http: &'a Http,
}

impl Mines<'_> {
    const BASE: &'static str = "/api/mine";

    pub async fn create(&self, input: &CreateMine) -> Result<MineResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(&self, filter: &MineFilter) -> Result<Page<MineResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<MineResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(&self, id: Uuid, input: &UpdateMine) -> Result<MineResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct MineMonthlyDataFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub mine_id: Option<Uuid>,
    pub material_id: Option<Uuid>,
    pub entity_id: Option<Uuid>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Omitted means the backend default: used material only.
    pub is_used: Option<bool>,
    /// Omitted means the backend default: active records only.
    pub is_active: Option<bool>,
}

impl QueryParams for MineMonthlyDataFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("mineId", self.mine_id)
            .query_opt("materialId", self.material_id)
            .query_opt("entityId", self.entity_id)
            .query_opt("month", self.month)
            .query_opt("year", self.year)
            .query_opt("isUsed", self.is_used)
            .query_opt("isActive", self.is_active)
    }
}

/// Monthly production records. Month range (1–12) and the isUsed gating of
/// diesel price / cubic meters are enforced by the backend; violations come
/// back as validation errors, forwarded unchanged.
pub struct MineMonthlyData<'a> {
    pub(crate) http: &'a Http,
}

impl MineMonthlyData<'_> {
    const BASE: &'static str = "/api/mine-monthly-data";

    pub async fn create(
        &self,
        input: &CreateMineMonthlyData,
    ) -> Result<MineMonthlyDataResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    /// Submits one month's lines for a mine in a single call. Whether one
    /// invalid line rejects the whole batch is the backend's policy.
    pub async fn bulk_create(
        &self,
        input: &BulkCreateMineMonthlyData,
    ) -> Result<Vec<MineMonthlyDataResponse>, ApiError> {
        self.http
            .request(ApiRequest::post(format!("{}/bulk", Self::BASE)).json(input)?)
            .await
    }

    pub async fn find_many(
        &self,
        filter: &MineMonthlyDataFilter,
    ) -> Result<Page<MineMonthlyDataResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<MineMonthlyDataResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateMineMonthlyData,
    ) -> Result<MineMonthlyDataResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    /// Soft delete: the backend flips `isActive` to false.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}
