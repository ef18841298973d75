//! # Domain Module
//!
//! 비즈니스 도메인의 핵심 타입들을 정의하는 모듈입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← MongoDB 문서와 매핑되는 핵심 엔티티 (Person, BloodRequest)
//! ├── models/       ← 인증/토큰 등 도메인 모델
//! └── dto/          ← HTTP 요청/응답 데이터 전송 객체
//! ```

pub mod dto;
pub mod entities;
pub mod models;
