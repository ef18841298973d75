pub mod request_repo;

pub use request_repo::*;
