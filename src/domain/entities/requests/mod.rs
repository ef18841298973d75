pub mod blood_request;

pub use blood_request::*;
