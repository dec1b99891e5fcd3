//! Request and response shapes for every backend resource.
//!
//! Conventions shared by all DTOs:
//! - wire names are camelCase (`#[serde(rename_all = "camelCase")]`);
//! - `Create*` shapes mark fields required unless the backend contract
//!   makes them optional;
//! - `Update*` shapes make every field optional — omitted fields are left
//!   unchanged server-side (partial patch);
//! - `*Response` shapes carry `id` plus `createdAt`/`updatedAt` audit
//!   timestamps and may embed related responses.
//!
//! Closed enumerations and range constraints (user role, month 1–12) are
//! enforced by the backend, not validated here.

mod claim;
mod common;
mod contract;
mod entity;
mod expense;
mod express;
mod invoice;
mod material;
mod mine;
mod user;

pub use claim::{ClaimResponse, CreateClaim, UpdateClaim};
pub use common::Page;
pub use contract::{ContractResponse, CreateContract, UpdateContract};
pub use entity::{CreateEntity, EntityResponse, UpdateEntity};
pub use expense::{
    BulkCreateExpenseMonthlyData, CreateExpense, CreateExpenseMonthlyData, ExpenseMonthlyDataResponse,
    ExpenseMonthlyLine, ExpenseResponse, UpdateExpense, UpdateExpenseMonthlyData,
};
pub use express::{
    CreateCustomer, CreateTechnician, CustomerResponse, ImageAssetResponse, TechnicianResponse,
    UpdateCustomer, UpdateTechnician,
};
pub use invoice::{CreateInvoice, InvoiceResponse, UpdateInvoice};
pub use material::{CreateMaterial, MaterialResponse, UpdateMaterial};
pub use mine::{
    BulkCreateMineMonthlyData, CreateMine, CreateMineMonthlyData, MineMonthlyDataResponse,
    MineMonthlyLine, MineResponse, UpdateMine, UpdateMineMonthlyData,
};
pub use user::{CreateUser, UpdateUser, UserResponse, UserRole};
