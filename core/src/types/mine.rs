use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::contract::ContractResponse;
use super::material::MaterialResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMine {
    pub name: String,
    pub contract_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub contract_id: Uuid,
    #[serde(default)]
    pub contract: Option<ContractResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One monthly production record for a mine.
///
/// `month` is constrained to 1–12 by the backend; the client forwards
/// whatever it is given. `is_used` distinguishes used material from
/// overburden — `diesel_price` and `cubic_meters` are only meaningful when
/// it is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMineMonthlyData {
    pub mine_id: Uuid,
    pub material_id: Uuid,
    pub month: u32,
    pub year: i32,
    pub quantity: f64,
    pub is_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diesel_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cubic_meters: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMineMonthlyData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_used: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diesel_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cubic_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineMonthlyDataResponse {
    pub id: Uuid,
    pub month: u32,
    pub year: i32,
    pub quantity: f64,
    pub is_used: bool,
    #[serde(default)]
    pub diesel_price: Option<f64>,
    #[serde(default)]
    pub cubic_meters: Option<f64>,
    /// Computed server-side from quantity and contract pricing.
    #[serde(default)]
    pub total_price: Option<f64>,
    pub is_active: bool,
    pub mine_id: Uuid,
    pub material_id: Uuid,
    #[serde(default)]
    pub mine: Option<MineResponse>,
    #[serde(default)]
    pub material: Option<MaterialResponse>,
    /// Owning entity reference; the backend does not declare a shape for it,
    /// so it stays an open string-keyed map.
    #[serde(default)]
    pub entity: Option<serde_json::Map<String, serde_json::Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of a bulk monthly submission: the parent mine/month/year live on
/// [`BulkCreateMineMonthlyData`], each line carries one material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineMonthlyLine {
    pub material_id: Uuid,
    pub quantity: f64,
    pub is_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diesel_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cubic_meters: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateMineMonthlyData {
    pub mine_id: Uuid,
    pub month: u32,
    pub year: i32,
    pub items: Vec<MineMonthlyLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overburden_line_omits_used_only_fields() {
        let input = CreateMineMonthlyData {
            mine_id: Uuid::nil(),
            material_id: Uuid::nil(),
            month: 3,
            year: 2024,
            quantity: 1500.0,
            is_used: false,
            diesel_price: None,
            cubic_meters: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["isUsed"], false);
        assert!(json.get("dieselPrice").is_none());
        assert!(json.get("cubicMeters").is_none());
    }

    #[test]
    fn bulk_payload_carries_parent_key_once() {
        let input = BulkCreateMineMonthlyData {
            mine_id: Uuid::nil(),
            month: 7,
            year: 2024,
            items: vec![
                MineMonthlyLine {
                    material_id: Uuid::new_v4(),
                    quantity: 10.0,
                    is_used: true,
                    diesel_price: Some(1.9),
                    cubic_meters: Some(4.0),
                },
                MineMonthlyLine {
                    material_id: Uuid::new_v4(),
                    quantity: 20.0,
                    is_used: false,
                    diesel_price: None,
                    cubic_meters: None,
                },
            ],
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["month"], 7);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert!(json["items"][1].get("dieselPrice").is_none());
    }

    #[test]
    fn response_keeps_entity_reference_as_open_map() {
        let body = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "month": 12,
            "year": 2023,
            "quantity": 800.5,
            "isUsed": true,
            "dieselPrice": 1.7,
            "totalPrice": 1360.85,
            "isActive": true,
            "mineId": "00000000-0000-0000-0000-000000000002",
            "materialId": "00000000-0000-0000-0000-000000000003",
            "entity": {"id": "00000000-0000-0000-0000-000000000004", "name": "Acme Mining"},
            "createdAt": "2024-01-05T08:00:00Z",
            "updatedAt": "2024-01-05T08:00:00Z"
        }"#;
        let record: MineMonthlyDataResponse = serde_json::from_str(body).unwrap();
        let entity = record.entity.unwrap();
        assert_eq!(entity["name"], "Acme Mining");
        assert!(record.mine.is_none());
    }
}
