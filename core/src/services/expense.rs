use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{
    BulkCreateExpenseMonthlyData, CreateExpense, CreateExpenseMonthlyData,
    ExpenseMonthlyDataResponse, ExpenseResponse, Page, UpdateExpense, UpdateExpenseMonthlyData,
};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
    pub entity_id: Option<Uuid>,
    /// Omitted means the backend default: active expenses only.
    pub is_active: Option<bool>,
}

impl QueryParams for ExpenseFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
            .query_opt("entityId", self.entity_id)
            .query_opt("isActive", self.is_active)
    }
}

pub struct Expenses<'a> {
    pub(crate) http: &'a Http,
}

impl Expenses<'_> {
    const BASE: &'static str = "/api/expense";

    pub async fn create(&self, input: &CreateExpense) -> Result<ExpenseResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(
        &self,
        filter: &ExpenseFilter,
    ) -> Result<Page<ExpenseResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<ExpenseResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(&self, id: Uuid, input: &UpdateExpense) -> Result<ExpenseResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    /// Soft delete: the backend flips `isActive` to false.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseMonthlyDataFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub expense_id: Option<Uuid>,
    pub entity_id: Option<Uuid>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl QueryParams for ExpenseMonthlyDataFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("expenseId", self.expense_id)
            .query_opt("entityId", self.entity_id)
            .query_opt("month", self.month)
            .query_opt("year", self.year)
    }
}

/// Monthly expense records, the expense-side analogue of mine monthly data.
pub struct ExpenseMonthlyData<'a> {
    pub(crate) http: &'a Http,
}

impl ExpenseMonthlyData<'_> {
    const BASE: &'static str = "/api/expense-monthly-data";

    pub async fn create(
        &self,
        input: &CreateExpenseMonthlyData,
    ) -> Result<ExpenseMonthlyDataResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    /// Submits one month's expense lines for an entity in a single call.
    pub async fn bulk_create(
        &self,
        input: &BulkCreateExpenseMonthlyData,
    ) -> Result<Vec<ExpenseMonthlyDataResponse>, ApiError> {
        self.http
            .request(ApiRequest::post(format!("{}/bulk", Self::BASE)).json(input)?)
            .await
    }

    pub async fn find_many(
        &self,
        filter: &ExpenseMonthlyDataFilter,
    ) -> Result<Page<ExpenseMonthlyDataResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<ExpenseMonthlyDataResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &UpdateExpenseMonthlyData,
    ) -> Result<ExpenseMonthlyDataResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}
