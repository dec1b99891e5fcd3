//! Per-resource service modules and the umbrella [`Api`] client.
//!
//! A UI layer constructs one `Api` from one [`ApiConfig`] and reaches every
//! backend resource through its accessors. Service values borrow the shared
//! executor and are free to construct per call.

mod claim;
mod contract;
mod entity;
mod expense;
mod express;
mod invoice;
mod material;
mod mine;
mod resource;
mod user;

pub use claim::{ClaimFilter, Claims};
pub use contract::{ContractFilter, Contracts};
pub use entity::{Entities, EntityFilter};
pub use expense::{ExpenseFilter, ExpenseMonthlyData, ExpenseMonthlyDataFilter, Expenses};
pub use express::{CustomerFilter, Customers, Images, TechnicianFilter, Technicians};
pub use invoice::{InvoiceFilter, Invoices};
pub use material::{MaterialFilter, Materials};
pub use mine::{MineFilter, MineMonthlyData, MineMonthlyDataFilter, Mines};
pub use resource::QueryParams;
pub use user::{UserFilter, Users};

use crate::config::ApiConfig;
use crate::transport::Http;

/// Entry point for every backend call.
#[derive(Debug, Clone)]
pub struct Api {
    http: Http,
}

impl Api {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Http::new(config),
        }
    }

    pub fn users(&self) -> Users<'_> {
        Users { http: &self.http }
    }

    pub fn entities(&self) -> Entities<'_> {
        Entities { http: &self.http }
    }

    pub fn contracts(&self) -> Contracts<'_> {
        Contracts { http: &self.http }
    }

    pub fn mines(&self) -> Mines<'_> {
        Mines { http: &self.http }
    }

    pub fn mine_monthly_data(&self) -> MineMonthlyData<'_> {
        MineMonthlyData { http: &self.http }
    }

    pub fn materials(&self) -> Materials<'_> {
        Materials { http: &self.http }
    }

    pub fn expenses(&self) -> Expenses<'_> {
        Expenses { http: &self.http }
    }

    pub fn expense_monthly_data(&self) -> ExpenseMonthlyData<'_> {
        ExpenseMonthlyData { http: &self.http }
    }

    pub fn invoices(&self) -> Invoices<'_> {
        Invoices { http: &self.http }
    }

    pub fn claims(&self) -> Claims<'_> {
        Claims { http: &self.http }
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers { http: &self.http }
    }

    pub fn technicians(&self) -> Technicians<'_> {
        Technicians { http: &self.http }
    }

    pub fn images(&self) -> Images<'_> {
        Images { http: &self.http }
    }

    /// The underlying executor, for one-off requests outside the typed
    /// surface.
    pub fn http(&self) -> &Http {
        &self.http
    }
}
