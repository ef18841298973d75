//! # DTO Module
//!
//! HTTP 계층의 요청/응답 데이터 전송 객체를 정의합니다.
//! 요청 DTO는 `validator` 기반 입력 검증을 수행하고,
//! 응답 DTO는 엔티티에서 민감 정보(비밀번호)를 제거한 형태로 변환합니다.

pub mod persons;
pub mod requests;
pub mod tokens;
