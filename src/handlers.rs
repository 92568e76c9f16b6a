pub mod admins;
pub mod auth;
pub mod dashboard;
pub mod installations;
pub mod kits;
pub mod photos;
pub mod stores;
pub mod suppliers;
pub mod tickets;
