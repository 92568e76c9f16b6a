// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Suppliers ---
        handlers::suppliers::list_suppliers,
        handlers::suppliers::create_supplier,
        handlers::suppliers::get_supplier,
        handlers::suppliers::get_supplier_by_cnpj,
        handlers::suppliers::supplier_access,
        handlers::suppliers::update_supplier,
        handlers::suppliers::delete_supplier,

        // --- Stores ---
        handlers::stores::list_stores,
        handlers::stores::create_store,
        handlers::stores::search_stores,
        handlers::stores::get_store,
        handlers::stores::update_store,
        handlers::stores::delete_store,

        // --- Kits ---
        handlers::kits::list_kits,
        handlers::kits::create_kit,

        // --- Tickets ---
        handlers::tickets::list_tickets,
        handlers::tickets::create_ticket,
        handlers::tickets::resolve_ticket,

        // --- Admins ---
        handlers::admins::create_admin,
        handlers::admins::list_admins,
        handlers::admins::update_admin,
        handlers::admins::delete_admin,

        // --- Photos ---
        handlers::photos::list_photos_by_store,
        handlers::photos::create_photo,

        // --- Installations ---
        handlers::installations::list_installations,
        handlers::installations::create_installation,

        // --- Dashboard ---
        handlers::dashboard::get_metrics,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::LoginPayload,
            models::auth::AuthResponse,

            // --- Suppliers ---
            models::supplier::Supplier,
            models::supplier::CreateSupplierPayload,
            models::supplier::UpdateSupplierPayload,
            models::supplier::CnpjSearchPayload,

            // --- Stores ---
            models::store::Store,
            models::store::CreateStorePayload,
            models::store::UpdateStorePayload,
            models::store::StoreFilterPayload,

            // --- Kits ---
            models::kit::Kit,
            models::kit::CreateKitPayload,

            // --- Tickets ---
            models::ticket::TicketStatus,
            models::ticket::Ticket,
            models::ticket::CreateTicketPayload,

            // --- Admins ---
            models::admin::Admin,
            models::admin::CreateAdminPayload,
            models::admin::UpdateAdminPayload,

            // --- Photos ---
            models::photo::Photo,
            models::photo::CreatePhotoPayload,

            // --- Installations ---
            models::installation::Installation,
            models::installation::CreateInstallationPayload,

            // --- Dashboard ---
            models::dashboard::DashboardMetrics,
            models::dashboard::TicketsByStatus,
            models::dashboard::MonthlyInstallationEntry,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação do Administrador"),
        (name = "Suppliers", description = "Gestão de Fornecedores"),
        (name = "Stores", description = "Gestão de Lojas da Rede"),
        (name = "Kits", description = "Kits de Instalação"),
        (name = "Tickets", description = "Chamados de Suporte"),
        (name = "Admins", description = "Gestão de Administradores"),
        (name = "Photos", description = "Galeria de Fotos das Lojas"),
        (name = "Installations", description = "Registro de Instalações"),
        (name = "Dashboard", description = "Indicadores da Rede")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
