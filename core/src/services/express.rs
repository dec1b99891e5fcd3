//! Services for the auxiliary `/express` resource family.
//!
//! Technician shift/break calls and the logo toggle are backend state
//! transitions: POST/PATCH with no body, parameterized only by id. The
//! client treats their semantics as opaque.

use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{
    CreateCustomer, CreateTechnician, CustomerResponse, ImageAssetResponse, Page,
    TechnicianResponse, UpdateCustomer, UpdateTechnician,
};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
    /// Omitted means the backend default: active customers only.
    pub is_active: Option<bool>,
}

impl QueryParams for CustomerFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
            .query_opt("isActive", self.is_active)
    }
}

pub struct Customers<'a> {
    pub(crate) http: &'a Http,
}

impl Customers<'_> {
    const BASE: &'static str = "/express/customer";

    pub async fn create(&self, input: &CreateCustomer) -> Result<CustomerResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(
        &self,
        filter: &CustomerFilter,
    ) -> Result<Page<CustomerResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<CustomerResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateCustomer,
    ) -> Result<CustomerResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct TechnicianFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
}

impl QueryParams for TechnicianFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
    }
}

pub struct Technicians<'a> {
    pub(crate) http: &'a Http,
}

impl Technicians<'_> {
    const BASE: &'static str = "/express/technician";

    pub async fn create(&self, input: &CreateTechnician) -> Result<TechnicianResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(
        &self,
        filter: &TechnicianFilter,
    ) -> Result<Page<TechnicianResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<TechnicianResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateTechnician,
    ) -> Result<TechnicianResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }

    pub async fn start_shift(&self, id: Uuid) -> Result<(), ApiError> {
        self.action(id, "startShift").await
    }

    pub async fn end_shift(&self, id: Uuid) -> Result<(), ApiError> {
        self.action(id, "endShift").await
    }

    pub async fn start_break(&self, id: Uuid) -> Result<(), ApiError> {
        self.action(id, "startBreak").await
    }

    pub async fn end_break(&self, id: Uuid) -> Result<(), ApiError> {
        self.action(id, "endBreak").await
    }

    async fn action(&self, id: Uuid, name: &str) -> Result<(), ApiError> {
        self.http
            .execute(ApiRequest::post(format!("{}/{{id}}/{name}", Self::BASE)).path_param("id", id))
            .await
    }
}

pub struct Images<'a> {
    pub(crate) http: &'a Http,
}

impl Images<'_> {
    const BASE: &'static str = "/express/image";

    /// Uploads one file as multipart form data with a single `file` field.
    pub async fn upload(
        &self,
        file_name: impl Into<String>,
        content: Vec<u8>,
    ) -> Result<ImageAssetResponse, ApiError> {
        self.http
            .request(
                ApiRequest::post(format!("{}/upload", Self::BASE))
                    .multipart("file", file_name, content),
            )
            .await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<ImageAssetResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }

    /// Marks the image as the brand logo. PATCH with no body; the toggle
    /// itself happens on the backend.
    pub async fn set_logo(&self, id: Uuid) -> Result<(), ApiError> {
        self.http
            .execute(ApiRequest::patch(format!("{}/{{id}}/logo", Self::BASE)).path_param("id", id))
            .await
    }
}
