// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let supplier_routes = Router::new()
        .route(
            "/",
            get(handlers::suppliers::list_suppliers).post(handlers::suppliers::create_supplier),
        )
        .route("/access", post(handlers::suppliers::supplier_access))
        .route(
            "/cnpj/{cnpj}",
            get(handlers::suppliers::get_supplier_by_cnpj),
        )
        .route(
            "/{id}",
            get(handlers::suppliers::get_supplier)
                .patch(handlers::suppliers::update_supplier)
                .delete(handlers::suppliers::delete_supplier),
        );

    let store_routes = Router::new()
        .route(
            "/",
            get(handlers::stores::list_stores).post(handlers::stores::create_store),
        )
        .route("/search", post(handlers::stores::search_stores))
        .route(
            "/{code}",
            get(handlers::stores::get_store)
                .patch(handlers::stores::update_store)
                .delete(handlers::stores::delete_store),
        );

    let kit_routes = Router::new().route(
        "/",
        get(handlers::kits::list_kits).post(handlers::kits::create_kit),
    );

    let ticket_routes = Router::new()
        .route(
            "/",
            get(handlers::tickets::list_tickets).post(handlers::tickets::create_ticket),
        )
        .route("/{id}/resolve", patch(handlers::tickets::resolve_ticket));

    // Gestão de administradores é toda protegida; o registro inicial
    // entra pela rota pública /api/auth/register.
    let admin_routes = Router::new()
        .route(
            "/",
            get(handlers::admins::list_admins).post(handlers::admins::create_admin),
        )
        .route(
            "/{id}",
            patch(handlers::admins::update_admin).delete(handlers::admins::delete_admin),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let photo_routes = Router::new()
        .route("/", post(handlers::photos::create_photo))
        .route(
            "/{store_code}",
            get(handlers::photos::list_photos_by_store),
        );

    let installation_routes = Router::new().route(
        "/",
        get(handlers::installations::list_installations)
            .post(handlers::installations::create_installation),
    );

    let dashboard_routes = Router::new().route("/metrics", get(handlers::dashboard::get_metrics));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/suppliers", supplier_routes)
        .nest("/api/stores", store_routes)
        .nest("/api/kits", kit_routes)
        .nest("/api/tickets", ticket_routes)
        .nest("/api/admins", admin_routes)
        .nest("/api/photos", photo_routes)
        .nest("/api/installations", installation_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
