//! # Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층으로 위임하는 핸들러들입니다.
//!
//! - [`auth`] - 회원가입, 로그인, 토큰 갱신, 로그아웃
//! - [`donors`] - 헌혈자 검색/조회/수정/삭제, 알림
//! - [`requests`] - 혈액 요청 등록/조회/상태 변경/삭제

pub mod auth;
pub mod donors;
pub mod requests;
