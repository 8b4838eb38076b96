//! HTTP-level integration tests for clients, banks, asset types,
//! categories, assets and investments.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_form, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(common::build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri} failed");
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Clientes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cliente_crud(pool: PgPool) {
    let cliente = create(
        &pool,
        "/api/v1/clientes",
        json!({"nome": "Ana Souza", "email": "ana@example.com", "telefone": "11 99999-0000"}),
    )
    .await;
    let id = cliente["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/clientes/{id}"),
        json!({"nome": "Ana S. Souza"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["nome"], "Ana S. Souza");
    assert_eq!(json["data"]["email"], "ana@example.com");
    assert_eq!(json["data"]["telefone"], "11 99999-0000");

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/clientes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/api/v1/clientes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cliente_invalid_email_is_rejected(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool),
        "/api/v1/clientes",
        "nome=Ana&email=not-an-email",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["email"][0], "Please enter a valid email address.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cliente_duplicate_email_returns_409(pool: PgPool) {
    create(&pool, "/api/v1/clientes", json!({"nome": "Ana", "email": "ana@example.com"})).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/clientes",
        json!({"nome": "Outra", "email": "ana@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cliente_email_is_unique_ignoring_case(pool: PgPool) {
    create(&pool, "/api/v1/clientes", json!({"nome": "Ana", "email": "Ana@Example.com"})).await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        "/api/v1/clientes",
        "nome=Outra&email=ana%40example.com",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cliente_form_update_ignores_blank_fields(pool: PgPool) {
    let cliente = create(
        &pool,
        "/api/v1/clientes",
        json!({"nome": "Ana Souza", "email": "ana@example.com"}),
    )
    .await;
    let id = cliente["id"].as_i64().unwrap();

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/clientes/{id}"),
        "nome=&email=&telefone=11999",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/v1/clientes/{id}")).await,
    )
    .await;
    assert_eq!(json["data"]["nome"], "Ana Souza");
    assert_eq!(json["data"]["email"], "ana@example.com");
    assert_eq!(json["data"]["telefone"], "11999");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_banco_and_ativo_form_updates_ignore_blank_names(pool: PgPool) {
    let banco = create(&pool, "/api/v1/bancos", json!({"nome": "Banco Azul"})).await;
    let ativo = create(&pool, "/api/v1/ativos", json!({"nome": "Tesouro Selic"})).await;
    let (banco_id, ativo_id) = (banco["id"].as_i64().unwrap(), ativo["id"].as_i64().unwrap());

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/bancos/{banco_id}"),
        "nome=&codigo=341",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/ativos/{ativo_id}"),
        "nome=++&ticker=SELIC",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let banco = body_json(
        get(common::build_test_app(pool.clone()), &format!("/api/v1/bancos/{banco_id}")).await,
    )
    .await;
    assert_eq!(banco["data"]["nome"], "Banco Azul");
    assert_eq!(banco["data"]["codigo"], "341");

    let ativo = body_json(
        get(common::build_test_app(pool), &format!("/api/v1/ativos/{ativo_id}")).await,
    )
    .await;
    assert_eq!(ativo["data"]["nome"], "Tesouro Selic");
    assert_eq!(ativo["data"]["ticker"], "SELIC");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bank_code_must_be_digits(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/bancos",
        json!({"nome": "Banco Azul", "codigo": "34A"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let banco = create(&pool, "/api/v1/bancos", json!({"nome": "Banco Azul", "codigo": "341"})).await;
    assert_eq!(banco["codigo"], "341");
}

// ---------------------------------------------------------------------------
// Tipos, categorias, ativos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tipo_rename_and_blank_name(pool: PgPool) {
    let tipo = create(&pool, "/api/v1/tipos", json!({"nome": "Renda Fixa"})).await;
    let id = tipo["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tipos/{id}"),
        json!({"nome": "Renda Variável"}),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["nome"], "Renda Variável");

    let response = post_form(common::build_test_app(pool), "/api/v1/tipos", "nome=%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["fields"]["nome"][0], "Must not be blank.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ativo_from_form_with_categories(pool: PgPool) {
    let tipo = create(&pool, "/api/v1/tipos", json!({"nome": "Renda Fixa"})).await;
    let c1 = create(&pool, "/api/v1/categorias", json!({"nome": "Longo prazo"})).await;
    let c2 = create(&pool, "/api/v1/categorias", json!({"nome": "Liquidez"})).await;
    let (tipo_id, c1, c2) = (
        tipo["id"].as_i64().unwrap(),
        c1["id"].as_i64().unwrap(),
        c2["id"].as_i64().unwrap(),
    );

    let response = post_form(
        common::build_test_app(pool.clone()),
        "/api/v1/ativos",
        &format!("nome=Tesouro+IPCA&ticker=&tipo_id={tipo_id}&categoria_ids={c1},{c2}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/ativos?categoria_id={c2}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["total"], 1);
    let ativo = &json["data"][0];
    assert_eq!(ativo["nome"], "Tesouro IPCA");
    assert!(ativo["ticker"].is_null());
    assert_eq!(ativo["tipo_nome"], "Renda Fixa");
    assert_eq!(ativo["categoria_ids"], json!([c1.min(c2), c1.max(c2)]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ativo_with_unknown_references_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/ativos",
        json!({"nome": "Fundo X", "tipo_id": 77, "categoria_ids": [88, 99]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["tipo_id"][0], "Tipo with id 77 does not exist.");
    assert_eq!(json["fields"]["categoria_ids"].as_array().unwrap().len(), 2);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ativos")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_categoria_in_use_cannot_be_deleted(pool: PgPool) {
    let categoria = create(&pool, "/api/v1/categorias", json!({"nome": "Dividendos"})).await;
    let id = categoria["id"].as_i64().unwrap();
    create(&pool, "/api/v1/ativos", json!({"nome": "ITSA4", "categoria_ids": [id]})).await;

    let response = delete(common::build_test_app(pool), &format!("/api/v1/categorias/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Investimentos
// ---------------------------------------------------------------------------

async fn investment_refs(pool: &PgPool) -> (i64, i64, i64) {
    let cliente = create(
        pool,
        "/api/v1/clientes",
        json!({"nome": "Ana Souza", "email": "ana@example.com"}),
    )
    .await;
    let banco = create(pool, "/api/v1/bancos", json!({"nome": "Banco Azul"})).await;
    let ativo = create(pool, "/api/v1/ativos", json!({"nome": "Tesouro Selic"})).await;
    (
        cliente["id"].as_i64().unwrap(),
        banco["id"].as_i64().unwrap(),
        ativo["id"].as_i64().unwrap(),
    )
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_investimento_create_and_list_by_cliente(pool: PgPool) {
    let (cliente_id, banco_id, ativo_id) = investment_refs(&pool).await;

    let investimento = create(
        &pool,
        "/api/v1/investimentos",
        json!({
            "cliente_id": cliente_id,
            "banco_id": banco_id,
            "ativo_id": ativo_id,
            "valor": "1500.50",
            "data": "2025-03-01"
        }),
    )
    .await;
    assert_eq!(investimento["valor"], "1500.50");
    assert_eq!(investimento["cliente_nome"], "Ana Souza");
    assert_eq!(investimento["banco_nome"], "Banco Azul");
    assert_eq!(investimento["ativo_nome"], "Tesouro Selic");

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/investimentos?cliente_id={cliente_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["data"], "2025-03-01");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_investimento_validation(pool: PgPool) {
    let (cliente_id, banco_id, _) = investment_refs(&pool).await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        "/api/v1/investimentos",
        &format!("cliente_id={cliente_id}&banco_id={banco_id}&ativo_id=&valor=-10"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["ativo_id"].is_array());
    assert!(json["fields"]["valor"].is_array());
    assert!(json["fields"].get("cliente_id").is_none());

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/investimentos",
        json!({"cliente_id": 9999, "banco_id": banco_id, "ativo_id": 9998, "valor": "10"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["cliente_id"][0], "Cliente with id 9999 does not exist.");
    assert_eq!(json["fields"]["ativo_id"][0], "Ativo with id 9998 does not exist.");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM investimentos")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_investimento_update_keeps_unsubmitted_fields(pool: PgPool) {
    let (cliente_id, banco_id, ativo_id) = investment_refs(&pool).await;
    let investimento = create(
        &pool,
        "/api/v1/investimentos",
        json!({"cliente_id": cliente_id, "banco_id": banco_id, "ativo_id": ativo_id, "valor": "100"}),
    )
    .await;
    let id = investimento["id"].as_i64().unwrap();

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/investimentos/{id}"),
        "valor=250.75&data=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/v1/investimentos/{id}")).await,
    )
    .await;
    assert_eq!(json["data"]["valor"], "250.75");
    assert_eq!(json["data"]["cliente_id"], cliente_id);
    assert_eq!(json["data"]["data"], investimento["data"]);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_password_is_hashed_and_never_returned(pool: PgPool) {
    let user = create(
        &pool,
        "/api/v1/users",
        json!({"name": "Admin", "email": "admin@example.com", "password": "123456"}),
    )
    .await;
    assert!(user.get("password_hash").is_none());
    assert!(user.get("password").is_none());

    let hash: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE id = $1")
        .bind(user["id"].as_i64().unwrap())
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(carteira_api::auth::password::verify_password("123456", &hash).unwrap());

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/users/by-email/admin@example.com",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], user["id"]);

    let response = get(common::build_test_app(pool), "/api/v1/users/by-email/nobody@example.com").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_short_password_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/users",
        json!({"name": "Admin", "email": "admin@example.com", "password": "12345"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["password"][0], "Password must be at least 6 characters.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_blank_password_keeps_hash(pool: PgPool) {
    let user = create(
        &pool,
        "/api/v1/users",
        json!({"name": "Admin", "email": "admin@example.com", "password": "123456"}),
    )
    .await;
    let id = user["id"].as_i64().unwrap();

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{id}"),
        "name=Root&password=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (name, hash): (String, String) =
        sqlx::query_as("SELECT name, password_hash FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(name, "Root");
    assert!(carteira_api::auth::password::verify_password("123456", &hash).unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_email_is_unique_ignoring_case(pool: PgPool) {
    let user = create(
        &pool,
        "/api/v1/users",
        json!({"name": "Ana", "email": "Ana@Example.com", "password": "123456"}),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        json!({"name": "Outra", "email": "ana@example.com", "password": "654321"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(
        common::build_test_app(pool),
        "/api/v1/users/by-email/ANA@example.com",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user["id"]);
    assert_eq!(json["data"]["email"], "Ana@Example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_form_update_ignores_blank_name_and_email(pool: PgPool) {
    let user = create(
        &pool,
        "/api/v1/users",
        json!({"name": "Admin", "email": "admin@example.com", "password": "123456"}),
    )
    .await;
    let id = user["id"].as_i64().unwrap();

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{id}"),
        "name=&email=&password=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let json = body_json(
        get(common::build_test_app(pool), &format!("/api/v1/users/{id}")).await,
    )
    .await;
    assert_eq!(json["data"]["name"], "Admin");
    assert_eq!(json["data"]["email"], "admin@example.com");
}
