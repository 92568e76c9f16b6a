pub mod auth;
pub use auth::AuthService;
pub mod supplier_service;
pub use supplier_service::SupplierService;
pub mod store_service;
pub use store_service::StoreService;
pub mod kit_service;
pub use kit_service::KitService;
pub mod ticket_service;
pub use ticket_service::TicketService;
pub mod admin_service;
pub use admin_service::AdminService;
pub mod installation_service;
pub use installation_service::InstallationService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
