//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 대응되는 핵심 도메인 엔티티들을 정의합니다.
//!
//! - [`persons`] - 사용자(헌혈자/수혈자/관리자) 엔티티
//! - [`requests`] - 혈액 요청 엔티티
//!
//! 모든 엔티티는 `serde` 기반 BSON 직렬화와 `_id` ObjectId 매핑을 지원하며,
//! 와이어 포맷과 동일하게 camelCase 필드명으로 저장됩니다.

pub mod persons;
pub mod requests;

pub use persons::*;
pub use requests::*;
