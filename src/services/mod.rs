//! # Services Module
//!
//! 비즈니스 로직 계층입니다. 핸들러와 리포지토리 사이에서
//! 도메인 규칙을 적용합니다.
//!
//! - [`persons`] - 회원가입, 인증, 헌혈자 관리
//! - [`matching`] - 혈액 요청과 헌혈자 매칭
//! - [`requests`] - 혈액 요청 생명주기 관리
//! - [`auth`] - JWT 토큰 발급/검증/갱신

pub mod auth;
pub mod matching;
pub mod persons;
pub mod requests;

pub use auth::*;
pub use matching::*;
pub use persons::*;
pub use requests::*;
