//! In-memory stand-in for the mining-operations backend.
//!
//! Implements the slice of the contract the core crate's integration tests
//! exercise: contracts, mines, mine monthly data (with bulk create), users,
//! and express customers. Schemas are defined independently from the core
//! crate; integration tests catch any drift between the two.
//!
//! Backend conventions reproduced here:
//! - findMany returns a `{rows, count}` envelope, `count` being the total
//!   match count before the skip/take window;
//! - `search` is a case-insensitive substring filter;
//! - omitted `isActive` and `isUsed` filters both default to true;
//! - contracts and monthly data soft-delete (isActive flips to false);
//! - month is validated to 1–12 with a `{statusCode, message}` envelope;
//! - `/api` and `/express` routes require an Authorization header.

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub diesel_price: Option<f64>,
    pub extraction_price: Option<f64>,
    pub phosphate_price: Option<f64>,
    pub entity_id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContract {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub entity_id: Uuid,
    pub end_date: Option<NaiveDate>,
    pub diesel_price: Option<f64>,
    pub extraction_price: Option<f64>,
    pub phosphate_price: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContract {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub diesel_price: Option<f64>,
    pub extraction_price: Option<f64>,
    pub phosphate_price: Option<f64>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mine {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub contract_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMine {
    pub name: String,
    pub contract_id: Uuid,
    pub location: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMine {
    pub name: Option<String>,
    pub location: Option<String>,
    pub contract_id: Option<Uuid>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineMonthlyData {
    pub id: Uuid,
    pub month: u32,
    pub year: i32,
    pub quantity: f64,
    pub is_used: bool,
    pub diesel_price: Option<f64>,
    pub cubic_meters: Option<f64>,
    pub total_price: Option<f64>,
    pub is_active: bool,
    pub mine_id: Uuid,
    pub material_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMineMonthlyData {
    pub mine_id: Uuid,
    pub material_id: Uuid,
    pub month: u32,
    pub year: i32,
    pub quantity: f64,
    pub is_used: bool,
    pub diesel_price: Option<f64>,
    pub cubic_meters: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMineMonthlyData {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub quantity: Option<f64>,
    pub is_used: Option<bool>,
    pub diesel_price: Option<f64>,
    pub cubic_meters: Option<f64>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateMineMonthlyData {
    pub mine_id: Uuid,
    pub month: u32,
    pub year: i32,
    pub items: Vec<MineMonthlyLine>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineMonthlyLine {
    pub material_id: Uuid,
    pub quantity: f64,
    pub is_used: bool,
    pub diesel_price: Option<f64>,
    pub cubic_meters: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub is_active: bool,
    pub role: String,
    pub entity_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
    #[allow(dead_code)]
    pub password: String,
    pub role: String,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub entity_id: Option<Uuid>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub username: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub entity_id: Option<Uuid>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub mobile: Option<String>,
    pub count: Option<u32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub mobile: Option<String>,
    pub count: Option<u32>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
    pub count: Option<u32>,
    pub is_active: Option<bool>,
}

/// findMany query parameters shared across resources. Resource handlers
/// ignore the filters they do not support.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub skip: Option<usize>,
    pub take: Option<usize>,
    pub search: Option<String>,
    pub entity_id: Option<Uuid>,
    pub contract_id: Option<Uuid>,
    pub mine_id: Option<Uuid>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub is_active: Option<bool>,
    pub is_used: Option<bool>,
}

/// Page envelope: matched rows plus the total match count before the
/// skip/take window.
#[derive(Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub rows: Vec<T>,
    pub count: usize,
}

#[derive(Default)]
pub struct Store {
    pub contracts: HashMap<Uuid, Contract>,
    pub mines: HashMap<Uuid, Mine>,
    pub mine_monthly: HashMap<Uuid, MineMonthlyData>,
    pub users: HashMap<Uuid, User>,
    pub customers: HashMap<Uuid, Customer>,
    pub slow_hits: u64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));

    let guarded = Router::new()
        .route(
            "/api/contract/create",
            post(create_contract),
        )
        .route("/api/contract/findMany", get(find_many_contracts))
        .route(
            "/api/contract/{id}",
            get(get_contract).patch(update_contract).delete(delete_contract),
        )
        .route("/api/mine/create", post(create_mine))
        .route("/api/mine/findMany", get(find_many_mines))
        .route(
            "/api/mine/{id}",
            get(get_mine).patch(update_mine).delete(delete_mine),
        )
        .route(
            "/api/mine-monthly-data/create",
            post(create_mine_monthly),
        )
        .route(
            "/api/mine-monthly-data/bulk",
            post(bulk_create_mine_monthly),
        )
        .route("/api/mine-monthly-data/findMany", get(find_many_mine_monthly))
        .route(
            "/api/mine-monthly-data/{id}",
            get(get_mine_monthly)
                .patch(update_mine_monthly)
                .delete(delete_mine_monthly),
        )
        .route("/api/user/create", post(create_user))
        .route("/api/user/findMany", get(find_many_users))
        .route(
            "/api/user/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route(
            "/express/customer/create",
            post(create_customer),
        )
        .route("/express/customer/findMany", get(find_many_customers))
        .route(
            "/express/customer/{id}",
            get(get_customer).patch(update_customer).delete(delete_customer),
        )
        .layer(middleware::from_fn(require_auth));

    Router::new()
        .merge(guarded)
        .route("/slow/counter", get(slow_counter))
        .route("/slow/hits", get(slow_hits))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The real backend validates JWTs; presence of the header is enough here.
async fn require_auth(req: Request, next: Next) -> Result<Response, StatusCode> {
    if req.headers().get(header::AUTHORIZATION).is_none() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(req).await)
}

/// Sleeps before recording the hit, so a call aborted during the sleep
/// leaves no trace. `/slow/hits` reads the counter without touching it.
async fn slow_counter(State(db): State<Db>) -> Json<serde_json::Value> {
    tokio::time::sleep(Duration::from_millis(400)).await;
    let mut store = db.write().await;
    store.slow_hits += 1;
    Json(json!({"hits": store.slow_hits}))
}

async fn slow_hits(State(db): State<Db>) -> Json<serde_json::Value> {
    let store = db.read().await;
    Json(json!({"hits": store.slow_hits}))
}

fn validation_error(message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"statusCode": 400, "message": message})),
    )
}

fn page<T>(mut rows: Vec<T>, params: &ListParams) -> PageEnvelope<T> {
    let count = rows.len();
    let skip = params.skip.unwrap_or(0).min(count);
    rows.drain(..skip);
    if let Some(take) = params.take {
        rows.truncate(take);
    }
    PageEnvelope { rows, count }
}

fn matches_search(haystack: &str, search: &Option<String>) -> bool {
    match search {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

// --- contracts ---

async fn create_contract(
    State(db): State<Db>,
    Json(input): Json<CreateContract>,
) -> (StatusCode, Json<Contract>) {
    let now = Utc::now();
    let contract = Contract {
        id: Uuid::new_v4(),
        name: input.name,
        description: input.description,
        start_date: input.start_date,
        end_date: input.end_date,
        diesel_price: input.diesel_price,
        extraction_price: input.extraction_price,
        phosphate_price: input.phosphate_price,
        entity_id: input.entity_id,
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    db.write().await.contracts.insert(contract.id, contract.clone());
    (StatusCode::CREATED, Json(contract))
}

async fn find_many_contracts(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<PageEnvelope<Contract>> {
    let store = db.read().await;
    let is_active = params.is_active.unwrap_or(true);
    let mut rows: Vec<Contract> = store
        .contracts
        .values()
        .filter(|c| c.is_active == is_active)
        .filter(|c| matches_search(&c.name, &params.search))
        .filter(|c| params.entity_id.is_none_or(|id| c.entity_id == id))
        .cloned()
        .collect();
    rows.sort_by_key(|c| c.created_at);
    Json(page(rows, &params))
}

async fn get_contract(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Contract>, StatusCode> {
    let store = db.read().await;
    store.contracts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_contract(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateContract>,
) -> Result<Json<Contract>, StatusCode> {
    let mut store = db.write().await;
    let contract = store.contracts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        contract.name = name;
    }
    if let Some(description) = input.description {
        contract.description = description;
    }
    if let Some(start_date) = input.start_date {
        contract.start_date = start_date;
    }
    if let Some(end_date) = input.end_date {
        contract.end_date = Some(end_date);
    }
    if let Some(diesel_price) = input.diesel_price {
        contract.diesel_price = Some(diesel_price);
    }
    if let Some(extraction_price) = input.extraction_price {
        contract.extraction_price = Some(extraction_price);
    }
    if let Some(phosphate_price) = input.phosphate_price {
        contract.phosphate_price = Some(phosphate_price);
    }
    if let Some(is_active) = input.is_active {
        contract.is_active = is_active;
    }
    contract.updated_at = Utc::now();
    Ok(Json(contract.clone()))
}

/// Soft delete: flips isActive instead of removing the row.
async fn delete_contract(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let contract = store.contracts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    contract.is_active = false;
    contract.updated_at = Utc::now();
    Ok(StatusCode::NO_CONTENT)
}

// --- mines ---

async fn create_mine(
    State(db): State<Db>,
    Json(input): Json<CreateMine>,
) -> (StatusCode, Json<Mine>) {
    let now = Utc::now();
    let mine = Mine {
        id: Uuid::new_v4(),
        name: input.name,
        location: input.location,
        contract_id: input.contract_id,
        created_at: now,
        updated_at: now,
    };
    db.write().await.mines.insert(mine.id, mine.clone());
    (StatusCode::CREATED, Json(mine))
}

async fn find_many_mines(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<PageEnvelope<Mine>> {
    let store = db.read().await;
    let mut rows: Vec<Mine> = store
        .mines
        .values()
        .filter(|m| matches_search(&m.name, &params.search))
        .filter(|m| params.contract_id.is_none_or(|id| m.contract_id == id))
        .cloned()
        .collect();
    rows.sort_by_key(|m| m.created_at);
    Json(page(rows, &params))
}

async fn get_mine(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Mine>, StatusCode> {
    let store = db.read().await;
    store.mines.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_mine(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateMine>,
) -> Result<Json<Mine>, StatusCode> {
    let mut store = db.write().await;
    let mine = store.mines.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        mine.name = name;
    }
    if let Some(location) = input.location {
        mine.location = Some(location);
    }
    if let Some(contract_id) = input.contract_id {
        mine.contract_id = contract_id;
    }
    mine.updated_at = Utc::now();
    Ok(Json(mine.clone()))
}

async fn delete_mine(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .mines
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- mine monthly data ---

fn month_in_range(month: u32) -> bool {
    (1..=12).contains(&month)
}

async fn create_mine_monthly(
    State(db): State<Db>,
    Json(input): Json<CreateMineMonthlyData>,
) -> Result<(StatusCode, Json<MineMonthlyData>), (StatusCode, Json<serde_json::Value>)> {
    if !month_in_range(input.month) {
        return Err(validation_error("month must be between 1 and 12"));
    }
    let now = Utc::now();
    let record = MineMonthlyData {
        id: Uuid::new_v4(),
        month: input.month,
        year: input.year,
        quantity: input.quantity,
        is_used: input.is_used,
        diesel_price: input.diesel_price,
        cubic_meters: input.cubic_meters,
        total_price: input.diesel_price.map(|p| p * input.quantity),
        is_active: true,
        mine_id: input.mine_id,
        material_id: input.material_id,
        created_at: now,
        updated_at: now,
    };
    db.write().await.mine_monthly.insert(record.id, record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

/// All-or-nothing: one invalid line rejects the whole batch.
async fn bulk_create_mine_monthly(
    State(db): State<Db>,
    Json(input): Json<BulkCreateMineMonthlyData>,
) -> Result<(StatusCode, Json<Vec<MineMonthlyData>>), (StatusCode, Json<serde_json::Value>)> {
    if !month_in_range(input.month) {
        return Err(validation_error("month must be between 1 and 12"));
    }
    let now = Utc::now();
    let mut created = Vec::with_capacity(input.items.len());
    for line in input.items {
        created.push(MineMonthlyData {
            id: Uuid::new_v4(),
            month: input.month,
            year: input.year,
            quantity: line.quantity,
            is_used: line.is_used,
            diesel_price: line.diesel_price,
            cubic_meters: line.cubic_meters,
            total_price: line.diesel_price.map(|p| p * line.quantity),
            is_active: true,
            mine_id: input.mine_id,
            material_id: line.material_id,
            created_at: now,
            updated_at: now,
        });
    }
    let mut store = db.write().await;
    for record in &created {
        store.mine_monthly.insert(record.id, record.clone());
    }
    Ok((StatusCode::CREATED, Json(created)))
}

async fn find_many_mine_monthly(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<PageEnvelope<MineMonthlyData>> {
    let store = db.read().await;
    let is_active = params.is_active.unwrap_or(true);
    let is_used = params.is_used.unwrap_or(true);
    let mut rows: Vec<MineMonthlyData> = store
        .mine_monthly
        .values()
        .filter(|r| r.is_active == is_active)
        .filter(|r| r.is_used == is_used)
        .filter(|r| params.mine_id.is_none_or(|id| r.mine_id == id))
        .filter(|r| params.month.is_none_or(|m| r.month == m))
        .filter(|r| params.year.is_none_or(|y| r.year == y))
        .cloned()
        .collect();
    rows.sort_by_key(|r| r.created_at);
    Json(page(rows, &params))
}

async fn get_mine_monthly(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<MineMonthlyData>, StatusCode> {
    let store = db.read().await;
    store
        .mine_monthly
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_mine_monthly(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateMineMonthlyData>,
) -> Result<Json<MineMonthlyData>, (StatusCode, Json<serde_json::Value>)> {
    if let Some(month) = input.month {
        if !month_in_range(month) {
            return Err(validation_error("month must be between 1 and 12"));
        }
    }
    let mut store = db.write().await;
    let record = store.mine_monthly.get_mut(&id).ok_or((
        StatusCode::NOT_FOUND,
        Json(json!({"statusCode": 404, "message": "record not found"})),
    ))?;
    if let Some(month) = input.month {
        record.month = month;
    }
    if let Some(year) = input.year {
        record.year = year;
    }
    if let Some(quantity) = input.quantity {
        record.quantity = quantity;
    }
    if let Some(is_used) = input.is_used {
        record.is_used = is_used;
    }
    if let Some(diesel_price) = input.diesel_price {
        record.diesel_price = Some(diesel_price);
    }
    if let Some(cubic_meters) = input.cubic_meters {
        record.cubic_meters = Some(cubic_meters);
    }
    if let Some(is_active) = input.is_active {
        record.is_active = is_active;
    }
    record.updated_at = Utc::now();
    Ok(Json(record.clone()))
}

async fn delete_mine_monthly(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let record = store.mine_monthly.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    record.is_active = false;
    record.updated_at = Utc::now();
    Ok(StatusCode::NO_CONTENT)
}

// --- users ---

async fn create_user(State(db): State<Db>, Json(input): Json<CreateUser>) -> (StatusCode, Json<User>) {
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        username: input.username,
        email: input.email,
        is_active: input.is_active.unwrap_or(true),
        role: input.role,
        entity_id: input.entity_id,
        created_at: now,
        updated_at: now,
    };
    db.write().await.users.insert(user.id, user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn find_many_users(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<PageEnvelope<User>> {
    let store = db.read().await;
    let is_active = params.is_active.unwrap_or(true);
    let mut rows: Vec<User> = store
        .users
        .values()
        .filter(|u| u.is_active == is_active)
        .filter(|u| matches_search(&u.username, &params.search))
        .filter(|u| params.entity_id.is_none_or(|id| u.entity_id == Some(id)))
        .cloned()
        .collect();
    rows.sort_by_key(|u| u.created_at);
    Json(page(rows, &params))
}

async fn get_user(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store.users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<User>, StatusCode> {
    let mut store = db.write().await;
    let user = store.users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(username) = input.username {
        user.username = username;
    }
    if let Some(role) = input.role {
        user.role = role;
    }
    if let Some(email) = input.email {
        user.email = Some(email);
    }
    if let Some(is_active) = input.is_active {
        user.is_active = is_active;
    }
    if let Some(entity_id) = input.entity_id {
        user.entity_id = Some(entity_id);
    }
    user.updated_at = Utc::now();
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .users
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- express customers ---

async fn create_customer(
    State(db): State<Db>,
    Json(input): Json<CreateCustomer>,
) -> (StatusCode, Json<Customer>) {
    let now = Utc::now();
    let customer = Customer {
        id: Uuid::new_v4(),
        first_name: input.first_name,
        last_name: input.last_name,
        mobile: input.mobile,
        count: input.count,
        is_active: input.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };
    db.write().await.customers.insert(customer.id, customer.clone());
    (StatusCode::CREATED, Json(customer))
}

async fn find_many_customers(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<PageEnvelope<Customer>> {
    let store = db.read().await;
    let is_active = params.is_active.unwrap_or(true);
    let mut rows: Vec<Customer> = store
        .customers
        .values()
        .filter(|c| c.is_active == is_active)
        .filter(|c| {
            matches_search(&c.first_name, &params.search)
                || (params.search.is_some() && matches_search(&c.last_name, &params.search))
        })
        .cloned()
        .collect();
    rows.sort_by_key(|c| c.created_at);
    Json(page(rows, &params))
}

async fn get_customer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, StatusCode> {
    let store = db.read().await;
    store.customers.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_customer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateCustomer>,
) -> Result<Json<Customer>, StatusCode> {
    let mut store = db.write().await;
    let customer = store.customers.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(first_name) = input.first_name {
        customer.first_name = first_name;
    }
    if let Some(last_name) = input.last_name {
        customer.last_name = last_name;
    }
    if let Some(mobile) = input.mobile {
        customer.mobile = Some(mobile);
    }
    if let Some(count) = input.count {
        customer.count = Some(count);
    }
    if let Some(is_active) = input.is_active {
        customer.is_active = is_active;
    }
    customer.updated_at = Utc::now();
    Ok(Json(customer.clone()))
}

async fn delete_customer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .customers
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_serializes_camel_case() {
        let now = Utc::now();
        let contract = Contract {
            id: Uuid::nil(),
            name: "Gulf".to_string(),
            description: "d".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            diesel_price: Some(1.5),
            extraction_price: None,
            phosphate_price: None,
            entity_id: Uuid::nil(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&contract).unwrap();
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["dieselPrice"], 1.5);
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn create_contract_rejects_missing_name() {
        let result: Result<CreateContract, _> = serde_json::from_str(
            r#"{"description":"d","startDate":"2024-01-01","entityId":"00000000-0000-0000-0000-000000000000"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_shapes_accept_empty_object() {
        let input: UpdateContract = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_none());
        assert!(input.is_active.is_none());
    }

    #[test]
    fn page_windowing() {
        let params = ListParams {
            skip: Some(1),
            take: Some(2),
            ..Default::default()
        };
        let envelope = page(vec![1, 2, 3, 4, 5], &params);
        assert_eq!(envelope.count, 5);
        assert_eq!(envelope.rows, vec![2, 3]);
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search("Gulf Phosphate", &Some("gulf".to_string())));
        assert!(!matches_search("Desert Mine", &Some("gulf".to_string())));
        assert!(matches_search("anything", &None));
    }

    #[test]
    fn month_range_bounds() {
        assert!(month_in_range(1));
        assert!(month_in_range(12));
        assert!(!month_in_range(0));
        assert!(!month_in_range(13));
    }
}
