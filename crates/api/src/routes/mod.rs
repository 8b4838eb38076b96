pub mod ativo;
pub mod banco;
pub mod categoria;
pub mod cliente;
pub mod customer;
pub mod diagnostic;
pub mod health;
pub mod investimento;
pub mod invoice;
pub mod tipo;
pub mod user;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard/cards                 card figures (GET)
/// /commands                        explicit entity commands (POST)
///
/// /clientes                        list, create
/// /clientes/{id}                   get, update, delete
/// /bancos                          list, create
/// /bancos/{id}                     get, update, delete
/// /tipos                           list, create
/// /tipos/{id}                      get, update, delete
/// /categorias                      list, create
/// /categorias/{id}                 get, update, delete
/// /ativos                          list, create
/// /ativos/{id}                     get, update, delete
/// /investimentos                   list, create
/// /investimentos/{id}              get, update, delete
///
/// /customers                       list (with invoice totals), create
/// /customers/{id}                  get, update, delete
/// /invoices                        list, create
/// /invoices/latest                 five most recent
/// /invoices/{id}                   get, update, delete
///
/// /users                           list, create
/// /users/by-email/{email}          get by email
/// /users/{id}                      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/cards", get(handlers::dashboard::cards))
        .route("/commands", post(handlers::command::execute))
        .nest("/clientes", cliente::router())
        .nest("/bancos", banco::router())
        .nest("/tipos", tipo::router())
        .nest("/categorias", categoria::router())
        .nest("/ativos", ativo::router())
        .nest("/investimentos", investimento::router())
        .nest("/customers", customer::router())
        .nest("/invoices", invoice::router())
        .nest("/users", user::router())
}
