use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::material::MaterialResponse;
use super::mine::MineResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContract {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub entity_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diesel_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phosphate_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContract {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diesel_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phosphate_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Contract detail responses embed the mines and materials the contract
/// covers; list endpoints may omit them, so both default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub diesel_price: Option<f64>,
    #[serde(default)]
    pub extraction_price: Option<f64>,
    #[serde(default)]
    pub phosphate_price: Option<f64>,
    pub entity_id: Uuid,
    pub is_active: bool,
    #[serde(default)]
    pub mines: Vec<MineResponse>,
    #[serde(default)]
    pub materials: Vec<MaterialResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
