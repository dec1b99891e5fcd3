use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{CreateUser, Page, UpdateUser, UserResponse};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
    pub entity_id: Option<Uuid>,
    /// Omitted means the backend default: active users only.
    pub is_active: Option<bool>,
}

impl QueryParams for UserFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
            .query_opt("entityId", self.entity_id)
            .query_opt("isActive", self.is_active)
    }
}

pub struct Users<'a> {
    pub(crate) http: &'a Http,
}

impl Users<'_> {
    const BASE: &'static str = "/api/user";

    pub async fn create(&self, input: &CreateUser) -> Result<UserResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(&self, filter: &UserFilter) -> Result<Page<UserResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<UserResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(&self, id: Uuid, input: &UpdateUser) -> Result<UserResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}
