#![allow(dead_code)]

use alias_shortener::application::services::RegistrySettings;
use alias_shortener::infrastructure::persistence::{
    InMemoryStore, PgCounterRepository, PgUrlRepository,
};
use alias_shortener::routes::app_router;
use alias_shortener::state::AppState;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_DOMAIN: &str = "http://short.ly";
pub const TEST_FLOOR: i64 = 1_000_000;

pub fn test_settings() -> RegistrySettings {
    RegistrySettings {
        default_domain: TEST_DOMAIN.to_string(),
        allocation_retries: 2,
    }
}

/// State over a fresh in-memory store seeded at [`TEST_FLOOR`].
pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    create_test_state_at(TEST_FLOOR)
}

pub fn create_test_state_at(floor: i64) -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new(floor));
    let state = AppState::new(store.clone(), store.clone(), test_settings());
    (state, store)
}

/// Full application router over an in-memory store.
pub fn create_test_server() -> (TestServer, Arc<InMemoryStore>) {
    create_test_server_at(TEST_FLOOR)
}

pub fn create_test_server_at(floor: i64) -> (TestServer, Arc<InMemoryStore>) {
    let (state, store) = create_test_state_at(floor);
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();
    (server, store)
}

pub async fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let counter_repository = Arc::new(PgCounterRepository::new(pool.clone()));
    counter_repository.ensure_seeded(TEST_FLOOR).await.unwrap();

    AppState::new(
        Arc::new(PgUrlRepository::new(pool)),
        counter_repository,
        test_settings(),
    )
}

/// Inserts a mapping that expired an hour ago, bypassing the service checks.
pub async fn create_expired_mapping(pool: &PgPool, alias: &str, url: &str) {
    sqlx::query(
        "INSERT INTO urls (original_url, alias, expires_at, created_at)
         VALUES ($1, $2, NOW() - INTERVAL '1 hour', NOW() - INTERVAL '2 hours')",
    )
    .bind(url)
    .bind(alias)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_mapping(pool: &PgPool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO urls (original_url, alias) VALUES ($1, $2)")
        .bind(url)
        .bind(alias)
        .execute(pool)
        .await
        .unwrap();
}
