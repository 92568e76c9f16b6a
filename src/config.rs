// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::db::{
    AdminRepository, DashboardRepository, InstallationRepository, KitRepository, PhotoRepository,
    StoreRepository, SupplierRepository, TicketRepository,
};
use crate::services::{
    AdminService, AuthService, DashboardService, InstallationService, KitService, StoreService,
    SupplierService, TicketService,
};

// O estado compartilhado, acessível em toda a aplicação.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub supplier_service: SupplierService,
    pub store_service: StoreService,
    pub kit_service: KitService,
    pub ticket_service: TicketService,
    pub admin_service: AdminService,
    pub installation_service: InstallationService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // A pool limita as consultas em voo; requisições além da
        // capacidade esperam na fila em vez de falhar.
        let db_pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let supplier_repo = SupplierRepository::new(db_pool.clone());
        let store_repo = StoreRepository::new(db_pool.clone());
        let photo_repo = PhotoRepository::new(db_pool.clone());
        let kit_repo = KitRepository::new(db_pool.clone());
        let ticket_repo = TicketRepository::new(db_pool.clone());
        let admin_repo = AdminRepository::new(db_pool.clone());
        let installation_repo = InstallationRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let auth_service = AuthService::new(admin_repo.clone(), jwt_secret);
        let supplier_service = SupplierService::new(supplier_repo);
        let store_service = StoreService::new(store_repo, photo_repo);
        let kit_service = KitService::new(kit_repo);
        let ticket_service = TicketService::new(ticket_repo);
        let admin_service = AdminService::new(admin_repo);
        let installation_service = InstallationService::new(installation_repo);
        let dashboard_service = DashboardService::new(dashboard_repo);

        Ok(Self {
            db_pool,
            auth_service,
            supplier_service,
            store_service,
            kit_service,
            ticket_service,
            admin_service,
            installation_service,
            dashboard_service,
        })
    }
}
