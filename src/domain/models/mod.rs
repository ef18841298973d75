//! # Domain Models Module
//!
//! 인증/토큰 관련 도메인 모델을 정의합니다.

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
