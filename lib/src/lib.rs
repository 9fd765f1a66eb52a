pub mod browser;
pub mod config;
pub mod error;
pub mod filter;
pub mod import_export;
pub mod models;
pub mod storage;
pub mod store;
pub mod utils;
pub mod validate;

// Re-export error types for convenience
pub use error::LinkVaultError;
pub use models::link::normalize_category;
pub use store::LinkStore;
pub use validate::{extract_title_from_url, is_valid_link};
