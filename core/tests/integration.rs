//! End-to-end tests against the live mock server.
//!
//! Each test starts its own server on a random port so state never leaks
//! between tests, then drives the typed client over real HTTP.

use std::time::Duration;

use mineops_core::services::{ContractFilter, CustomerFilter, MineFilter, MineMonthlyDataFilter, UserFilter};
use mineops_core::types::{
    BulkCreateMineMonthlyData, CreateContract, CreateCustomer, CreateMine, CreateMineMonthlyData,
    CreateUser, MineMonthlyLine, UpdateContract, UpdateCustomer, UpdateUser, UserRole,
};
use mineops_core::{Api, ApiConfig, ApiError, ApiRequest};
use chrono::NaiveDate;
use uuid::Uuid;

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

fn api(base_url: &str) -> Api {
    Api::new(ApiConfig::new(base_url).with_static_token("test-token"))
}

fn gulf_contract(name: &str) -> CreateContract {
    CreateContract {
        name: name.to_string(),
        description: "Phosphate extraction".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        entity_id: Uuid::new_v4(),
        end_date: None,
        diesel_price: Some(1.5),
        extraction_price: None,
        phosphate_price: Some(80.0),
    }
}

#[tokio::test]
async fn contract_crud_lifecycle() {
    let base = start_server().await;
    let api = api(&base);
    let contracts = api.contracts();

    let created = contracts.create(&gulf_contract("Gulf Phosphate 2024")).await.unwrap();
    assert_eq!(created.name, "Gulf Phosphate 2024");
    assert!(created.is_active);

    let fetched = contracts.find_one(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.phosphate_price, Some(80.0));

    // Partial patch: only dieselPrice goes over the wire; everything else
    // must come back unchanged.
    let updated = contracts
        .update(
            created.id,
            &UpdateContract {
                diesel_price: Some(1.85),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.diesel_price, Some(1.85));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.start_date, created.start_date);
    assert!(updated.end_date.is_none());

    contracts.delete(created.id).await.unwrap();

    // Soft delete: the row still exists but drops out of the default
    // (active-only) listing.
    let gone = contracts.find_one(created.id).await.unwrap();
    assert!(!gone.is_active);
    let active = contracts.find_many(&ContractFilter::default()).await.unwrap();
    assert_eq!(active.count, 0);
    let inactive = contracts
        .find_many(&ContractFilter {
            is_active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(inactive.count, 1);
}

#[tokio::test]
async fn find_many_search_scenario() {
    let base = start_server().await;
    let api = api(&base);
    let contracts = api.contracts();

    for name in ["Gulf Phosphate 2024", "gulf east extension", "Desert Mine Contract"] {
        contracts.create(&gulf_contract(name)).await.unwrap();
    }

    let page = contracts
        .find_many(&ContractFilter {
            skip: Some(0),
            take: Some(10),
            search: Some("Gulf".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.rows.len() as u64, page.count);
    for row in &page.rows {
        assert!(row.name.to_lowercase().contains("gulf"), "{}", row.name);
    }
}

#[tokio::test]
async fn omitted_is_active_equals_explicit_true() {
    let base = start_server().await;
    let api = api(&base);
    let contracts = api.contracts();

    let keep = contracts.create(&gulf_contract("Keep")).await.unwrap();
    let retired = contracts.create(&gulf_contract("Retired")).await.unwrap();
    contracts.delete(retired.id).await.unwrap();

    let default = contracts.find_many(&ContractFilter::default()).await.unwrap();
    let explicit = contracts
        .find_many(&ContractFilter {
            is_active: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(default.count, 1);
    assert_eq!(explicit.count, 1);
    assert_eq!(default.rows[0].id, keep.id);
    assert_eq!(explicit.rows[0].id, keep.id);
}

#[tokio::test]
async fn pagination_window_and_total_count() {
    let base = start_server().await;
    let api = api(&base);
    let contracts = api.contracts();

    for i in 0..5 {
        contracts.create(&gulf_contract(&format!("Contract {i}"))).await.unwrap();
    }

    let page = contracts
        .find_many(&ContractFilter {
            skip: Some(2),
            take: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.count, 5);
    assert_eq!(page.rows.len(), 2);
}

#[tokio::test]
async fn month_out_of_range_is_forwarded_unchanged() {
    let base = start_server().await;
    let api = api(&base);

    let err = api
        .mine_monthly_data()
        .create(&CreateMineMonthlyData {
            mine_id: Uuid::new_v4(),
            material_id: Uuid::new_v4(),
            month: 13,
            year: 2024,
            quantity: 100.0,
            is_used: true,
            diesel_price: Some(1.7),
            cubic_meters: Some(3.0),
        })
        .await
        .unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "month must be between 1 and 12");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn bulk_create_is_all_or_nothing() {
    let base = start_server().await;
    let api = api(&base);
    let monthly = api.mine_monthly_data();
    let mine_id = Uuid::new_v4();

    let line = |quantity| MineMonthlyLine {
        material_id: Uuid::new_v4(),
        quantity,
        is_used: true,
        diesel_price: None,
        cubic_meters: None,
    };

    // Invalid parent month rejects the whole batch.
    let err = monthly
        .bulk_create(&BulkCreateMineMonthlyData {
            mine_id,
            month: 13,
            year: 2024,
            items: vec![line(10.0), line(20.0)],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 400, .. }));

    let page = monthly
        .find_many(&MineMonthlyDataFilter {
            mine_id: Some(mine_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.count, 0, "rejected batch must persist nothing");

    // Valid batch lands every line.
    let created = monthly
        .bulk_create(&BulkCreateMineMonthlyData {
            mine_id,
            month: 6,
            year: 2024,
            items: vec![line(10.0), line(20.0)],
        })
        .await
        .unwrap();
    assert_eq!(created.len(), 2);

    let page = monthly
        .find_many(&MineMonthlyDataFilter {
            mine_id: Some(mine_id),
            month: Some(6),
            year: Some(2024),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.count, 2);
}

#[tokio::test]
async fn omitted_is_used_equals_explicit_true() {
    let base = start_server().await;
    let api = api(&base);
    let monthly = api.mine_monthly_data();
    let mine_id = Uuid::new_v4();

    let record = |is_used| CreateMineMonthlyData {
        mine_id,
        material_id: Uuid::new_v4(),
        month: 6,
        year: 2024,
        quantity: 50.0,
        is_used,
        diesel_price: None,
        cubic_meters: None,
    };
    let used = monthly.create(&record(true)).await.unwrap();
    monthly.create(&record(false)).await.unwrap();

    let default = monthly
        .find_many(&MineMonthlyDataFilter {
            mine_id: Some(mine_id),
            ..Default::default()
        })
        .await
        .unwrap();
    let explicit = monthly
        .find_many(&MineMonthlyDataFilter {
            mine_id: Some(mine_id),
            is_used: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(default.count, 1);
    assert_eq!(explicit.count, 1);
    assert_eq!(default.rows[0].id, used.id);
    assert_eq!(explicit.rows[0].id, used.id);
}

#[tokio::test]
async fn mine_listing_filters_by_contract() {
    let base = start_server().await;
    let api = api(&base);
    let mines = api.mines();
    let contract_id = Uuid::new_v4();

    mines
        .create(&CreateMine {
            name: "North Pit".to_string(),
            contract_id,
            location: Some("Sector 7".to_string()),
        })
        .await
        .unwrap();
    mines
        .create(&CreateMine {
            name: "South Pit".to_string(),
            contract_id: Uuid::new_v4(),
            location: None,
        })
        .await
        .unwrap();

    let page = mines
        .find_many(&MineFilter {
            contract_id: Some(contract_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.rows[0].name, "North Pit");
}

#[tokio::test]
async fn user_crud_with_role_enum() {
    let base = start_server().await;
    let api = api(&base);
    let users = api.users();

    let created = users
        .create(&CreateUser {
            username: "fmanager".to_string(),
            password: "hunter2".to_string(),
            role: UserRole::FinancialManager,
            email: None,
            is_active: None,
            entity_id: None,
        })
        .await
        .unwrap();
    assert_eq!(created.role, UserRole::FinancialManager);
    assert!(created.is_active);
    assert!(created.email.is_none());

    let updated = users
        .update(
            created.id,
            &UpdateUser {
                username: Some("finance.manager".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.username, "finance.manager");
    assert_eq!(updated.role, UserRole::FinancialManager);

    let page = users.find_many(&UserFilter::default()).await.unwrap();
    assert_eq!(page.count, 1);

    users.delete(created.id).await.unwrap();
    let err = users.find_one(created.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn customer_optional_fields_default_server_side() {
    let base = start_server().await;
    let api = api(&base);
    let customers = api.customers();

    let created = customers
        .create(&CreateCustomer {
            first_name: "Nadia".to_string(),
            last_name: "Haddad".to_string(),
            mobile: None,
            count: None,
            is_active: None,
        })
        .await
        .unwrap();
    assert!(created.is_active);
    assert!(created.mobile.is_none());
    assert!(created.count.is_none());

    let updated = customers
        .update(
            created.id,
            &UpdateCustomer {
                mobile: Some("+21255501234".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.mobile.as_deref(), Some("+21255501234"));
    assert_eq!(updated.first_name, "Nadia");

    let page = customers
        .find_many(&CustomerFilter {
            search: Some("nadia".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.count, 1);
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let base = start_server().await;
    let api = Api::new(ApiConfig::new(&base));

    let err = api
        .contracts()
        .find_many(&ContractFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn cancelled_call_delivers_nothing() {
    let base = start_server().await;
    let api = api(&base);

    let (tx, rx) = tokio::sync::oneshot::channel::<bool>();
    let http = api.http().clone();
    let handle = tokio::spawn(async move {
        let result: Result<serde_json::Value, ApiError> =
            http.request(ApiRequest::get("/slow/counter")).await;
        let _ = tx.send(result.is_ok());
    });

    // The mock endpoint sleeps 400ms before counting the hit; abort while
    // the call is in flight.
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.abort();

    assert!(handle.await.unwrap_err().is_cancelled());
    assert!(rx.await.is_err(), "cancelled call must deliver no result");

    // Past the sleep window: the abort closed the connection, so the server
    // never recorded the hit.
    tokio::time::sleep(Duration::from_millis(600)).await;
    let hits: serde_json::Value = api.http().request(ApiRequest::get("/slow/hits")).await.unwrap();
    assert_eq!(hits["hits"], 0, "cancelled call must leave no side effect");
}

#[tokio::test]
async fn cancellation_after_completion_is_a_noop() {
    let base = start_server().await;
    let api = api(&base);

    let http = api.http().clone();
    let handle = tokio::spawn(async move {
        let result: Result<serde_json::Value, ApiError> =
            http.request(ApiRequest::get("/slow/counter")).await;
        result.is_ok()
    });

    tokio::time::sleep(Duration::from_millis(700)).await;
    handle.abort();
    assert!(handle.await.unwrap(), "completed call keeps its result");

    let hits: serde_json::Value = api.http().request(ApiRequest::get("/slow/hits")).await.unwrap();
    assert_eq!(hits["hits"], 1);
}

#[tokio::test]
async fn concurrent_calls_have_no_ordering_guarantee() {
    let base = start_server().await;
    let api = api(&base);
    let contracts = api.contracts();

    let create_a = gulf_contract("A");
    let create_b = gulf_contract("B");
    let (a, b) = tokio::join!(contracts.create(&create_a), contracts.create(&create_b));
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_ne!(a.id, b.id);

    let page = contracts.find_many(&ContractFilter::default()).await.unwrap();
    assert_eq!(page.count, 2);
}
