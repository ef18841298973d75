//! Redis 세션 저장소 모듈
//!
//! Redis를 백엔드로 하는 세션/토큰 저장과 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 멀티플렉싱 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 (리프레시 토큰 세션 만료 관리)
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
