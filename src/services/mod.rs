pub mod access_record_store;
pub mod issuance_service;
pub mod verification_service;

pub use access_record_store::*;
pub use issuance_service::*;
pub use verification_service::*;
