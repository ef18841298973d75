//! 혈액 기부 매칭 서비스 백엔드
//!
//! Rust 기반의 헌혈자-수혈자 매칭 서비스입니다.
//! JWT 토큰 기반 인증, 혈액형/도시 기반 헌혈자 매칭,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 헌혈자/수혈자/관리자 계정 등록 및 관리
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 인증, Redis 세션
//! - **헌혈자 검색**: 혈액형 정확 일치 + 도시 대소문자 무시 검색
//! - **혈액 요청**: 등록 즉시 매칭 헌혈자 계산, 상태 전이 관리
//! - **헌혈자 알림**: 매칭되는 대기 중 요청 조회
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자/요청 데이터 영구 저장
//! - **Redis**: 캐싱 및 세션 관리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use blood_donation_backend::services::persons::PersonService;
//! use blood_donation_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let person_service = PersonService::instance();
//! let token_service = TokenService::instance();
//!
//! // 로그인 및 토큰 발급
//! let person = person_service.authenticate(email, password).await?;
//! let tokens = token_service.generate_token_pair(&person).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
