//! HTTP-level integration tests for customers, invoices, the dashboard cards
//! and the `/query` diagnostic endpoint.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, create_customer, delete, get, post_form, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn invoice_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_invoice_returns_201_with_location(pool: PgPool) {
    let customer_id = create_customer(&pool, "Lee Robinson", "lee@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/invoices",
        json!({"customer_id": customer_id, "amount": 15795, "status": "pendente", "date": "2025-06-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[LOCATION], "/api/v1/invoices");
    let json = body_json(response).await;
    assert_eq!(json["data"]["amount"], 15795);
    assert_eq!(json["data"]["status"], "pendente");
    assert_eq!(json["data"]["date"], "2025-06-01");
    assert_eq!(json["data"]["customer_id"], customer_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_invoice_is_retrievable_with_identical_values(pool: PgPool) {
    let customer_id = create_customer(&pool, "Amy Burns", "amy@example.com").await;

    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/invoices",
            json!({"customer_id": customer_id, "amount": 500, "status": "pago"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = get(common::build_test_app(pool), &format!("/api/v1/invoices/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"], created["data"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_form_submission_redirects_to_listing(pool: PgPool) {
    let customer_id = create_customer(&pool, "Delba", "delba@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/api/v1/invoices",
        &format!("customer_id={customer_id}&amount=2000&status=pago&date="),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/api/v1/invoices");
    assert_eq!(invoice_count(&pool).await, 1);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_status_is_rejected_and_nothing_written(pool: PgPool) {
    let customer_id = create_customer(&pool, "Lee Robinson", "lee@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/invoices",
        json!({"customer_id": customer_id, "amount": 100, "status": "cancelado"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["status"][0], "Please select an invoice status.");
    assert_eq!(invoice_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_fields_are_reported_per_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/api/v1/invoices", "customer_id=&amount=&status=").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["customer_id"][0], "Please select a customer.");
    assert_eq!(json["fields"]["amount"][0], "Please enter an amount greater than 0.");
    assert_eq!(json["fields"]["status"][0], "Please select an invoice status.");
    assert_eq!(invoice_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_customer_is_a_field_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/invoices",
        json!({"customer_id": 4242, "amount": 100, "status": "pago"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["customer_id"][0], "Customer with id 4242 does not exist.");
    assert_eq!(invoice_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_positive_amount_is_rejected(pool: PgPool) {
    let customer_id = create_customer(&pool, "Lee Robinson", "lee@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/invoices",
        json!({"customer_id": customer_id, "amount": 0, "status": "pago"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(invoice_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_amount_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/api/v1/invoices", "customer_id=1&amount=abc&status=pago").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_only_submitted_fields(pool: PgPool) {
    let customer_id = create_customer(&pool, "Lee Robinson", "lee@example.com").await;
    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/invoices",
            json!({"customer_id": customer_id, "amount": 4000, "status": "pendente", "date": "2025-02-02"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/invoices/{id}"),
        json!({"status": "pago"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["status"], "pago");
    assert_eq!(json["data"]["amount"], 4000);
    assert_eq!(json["data"]["date"], "2025-02-02");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_form_update_uses_post(pool: PgPool) {
    let customer_id = create_customer(&pool, "Lee Robinson", "lee@example.com").await;
    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/invoices",
            json!({"customer_id": customer_id, "amount": 4000, "status": "pendente"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/invoices/{id}"),
        "amount=4500&status=pago",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (amount, status): (i64, String) =
        sqlx::query_as("SELECT amount, status FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!((amount, status.as_str()), (4500, "pago"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_invoice_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/invoices/999999", json!({"status": "pago"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_invoice_then_404(pool: PgPool) {
    let customer_id = create_customer(&pool, "Lee Robinson", "lee@example.com").await;
    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/invoices",
            json!({"customer_id": customer_id, "amount": 10, "status": "pago"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/invoices/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(pool), &format!("/api/v1/invoices/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], format!("Invoice with id {id} not found"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_email_is_unique_ignoring_case(pool: PgPool) {
    create_customer(&pool, "Xavier", "X@y.com").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/customers",
        json!({"name": "Other", "email": "x@y.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_form_update_ignores_blank_fields(pool: PgPool) {
    let customer_id = create_customer(&pool, "Lee Robinson", "lee@robinson.com").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/customers/{customer_id}"),
        "name=&email=&image_url=%2Fcustomers%2Flee.png",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/customers/{customer_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["name"], "Lee Robinson");
    assert_eq!(json["data"]["email"], "lee@robinson.com");
    assert_eq!(json["data"]["image_url"], "/customers/lee.png");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_customer_with_invoices_cannot_be_deleted(pool: PgPool) {
    let customer_id = create_customer(&pool, "Lee Robinson", "lee@example.com").await;
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        json!({"customer_id": customer_id, "amount": 10, "status": "pago"}),
    )
    .await;

    let response = delete(
        common::build_test_app(pool),
        &format!("/api/v1/customers/{customer_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Listings and aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invoice_listing_is_paginated_and_searchable(pool: PgPool) {
    let lee = create_customer(&pool, "Lee Robinson", "lee@example.com").await;
    let amy = create_customer(&pool, "Amy Burns", "amy@example.com").await;
    for amount in 1..=7 {
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/invoices",
            json!({"customer_id": lee, "amount": amount * 100, "status": "pendente"}),
        )
        .await;
    }
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/invoices",
        json!({"customer_id": amy, "amount": 999, "status": "pago"}),
    )
    .await;

    let json = body_json(get(common::build_test_app(pool.clone()), "/api/v1/invoices").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
    assert_eq!(json["page"], 1);
    assert_eq!(json["per_page"], 6);
    assert_eq!(json["total"], 8);
    assert_eq!(json["total_pages"], 2);

    let json = body_json(
        get(common::build_test_app(pool.clone()), "/api/v1/invoices?query=amy").await,
    )
    .await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["name"], "Amy Burns");
    assert_eq!(json["data"][0]["email"], "amy@example.com");

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/invoices?customer_id={lee}&page=2"),
        )
        .await,
    )
    .await;
    assert_eq!(json["total"], 7);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_latest_invoices_and_dashboard_cards(pool: PgPool) {
    let lee = create_customer(&pool, "Lee Robinson", "lee@example.com").await;
    for (amount, status) in [(100, "pago"), (250, "pendente"), (50, "pendente")] {
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/invoices",
            json!({"customer_id": lee, "amount": amount, "status": status}),
        )
        .await;
    }

    let latest = body_json(
        get(common::build_test_app(pool.clone()), "/api/v1/invoices/latest").await,
    )
    .await;
    assert_eq!(latest["data"].as_array().unwrap().len(), 3);
    assert_eq!(latest["data"][0]["amount"], 50);

    let cards = body_json(
        get(common::build_test_app(pool.clone()), "/api/v1/dashboard/cards").await,
    )
    .await;
    assert_eq!(cards["data"]["number_of_invoices"], 3);
    assert_eq!(cards["data"]["number_of_customers"], 1);
    assert_eq!(cards["data"]["total_paid_invoices"], 100);
    assert_eq!(cards["data"]["total_pending_invoices"], 300);

    let customers = body_json(get(common::build_test_app(pool), "/api/v1/customers").await).await;
    assert_eq!(customers["data"][0]["total_invoices"], 3);
    assert_eq!(customers["data"][0]["total_pending"], 300);
    assert_eq!(customers["data"][0]["total_paid"], 100);
}

// ---------------------------------------------------------------------------
// GET /query
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_query_returns_invoices_of_amount_666(pool: PgPool) {
    let customer_id = create_customer(&pool, "Evil Rabbit", "evil@example.com").await;
    for amount in [666, 667] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/invoices",
            json!({"customer_id": customer_id, "amount": amount, "status": "pendente"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(common::build_test_app(pool), "/query").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!([{"amount": 666, "name": "Evil Rabbit"}]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_query_on_empty_database_returns_empty_array(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/query").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
