//! # Repositories Module
//!
//! 데이터 액세스 계층입니다. MongoDB를 주 저장소로 사용하고
//! Redis를 캐싱/세션 저장소로 사용합니다.
//!
//! - [`persons`] - 사용자(헌혈자/수혈자/관리자) 리포지토리
//! - [`requests`] - 혈액 요청 리포지토리
//! - [`tokens`] - 리프레시 세션 리포지토리 (Redis 전용)

pub mod persons;
pub mod requests;
pub mod tokens;

pub use persons::*;
pub use requests::*;
pub use tokens::*;
