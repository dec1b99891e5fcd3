use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Http;
use crate::types::{CreateInvoice, InvoiceResponse, Page, UpdateInvoice};

use super::resource::{self, QueryParams};

#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    pub search: Option<String>,
    pub entity_id: Option<Uuid>,
    pub contract_id: Option<Uuid>,
    /// Issue-date window, inclusive on both ends.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl QueryParams for InvoiceFilter {
    fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("skip", self.skip)
            .query_opt("take", self.take)
            .query_opt("search", self.search.as_deref())
            .query_opt("entityId", self.entity_id)
            .query_opt("contractId", self.contract_id)
            .query_opt("from", self.from)
            .query_opt("to", self.to)
    }
}

pub struct Invoices<'a> {
    pub(crate) http: &'a Http,
}

impl Invoices<'_> {
    const BASE: &'static str = "/api/invoice";

    pub async fn create(&self, input: &CreateInvoice) -> Result<InvoiceResponse, ApiError> {
        resource::create(self.http, Self::BASE, input).await
    }

    pub async fn find_many(
        &self,
        filter: &InvoiceFilter,
    ) -> Result<Page<InvoiceResponse>, ApiError> {
        resource::find_many(self.http, Self::BASE, filter).await
    }

    pub async fn find_one(&self, id: Uuid) -> Result<InvoiceResponse, ApiError> {
        resource::find_one(self.http, Self::BASE, id).await
    }

    pub async fn update(&self, id: Uuid, input: &UpdateInvoice) -> Result<InvoiceResponse, ApiError> {
        resource::update(self.http, Self::BASE, id, input).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        resource::delete(self.http, Self::BASE, id).await
    }
}
