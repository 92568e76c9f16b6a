pub mod supplier_repo;
pub use supplier_repo::SupplierRepository;
pub mod store_repo;
pub use store_repo::StoreRepository;
pub mod kit_repo;
pub use kit_repo::KitRepository;
pub mod ticket_repo;
pub use ticket_repo::TicketRepository;
pub mod admin_repo;
pub use admin_repo::AdminRepository;
pub mod photo_repo;
pub use photo_repo::PhotoRepository;
pub mod installation_repo;
pub use installation_repo::InstallationRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
