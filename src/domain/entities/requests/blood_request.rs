//! Blood Request Entity Implementation
//!
//! 수혈자가 등록하는 혈액 요청 엔티티입니다.
//! 요청 상태는 닫힌 전이 테이블을 따르며, 종결 상태에서는 변경이 불가능합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::persons::BloodGroup;

/// 혈액 요청 상태
///
/// 허용되는 전이는 pending → fulfilled, pending → cancelled 뿐입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// 매칭 대기 중
    Pending,
    /// 헌혈 완료 (종결)
    Fulfilled,
    /// 요청 취소 (종결)
    Cancelled,
}

impl RequestStatus {
    /// 문자열에서 RequestStatus를 생성합니다. 알 수 없는 값이면 None을 반환합니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(RequestStatus::Pending),
            "fulfilled" => Some(RequestStatus::Fulfilled),
            "cancelled" => Some(RequestStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Fulfilled => "fulfilled",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    /// 종결 상태인지 확인
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Fulfilled | RequestStatus::Cancelled)
    }

    /// 상태 전이 허용 여부
    ///
    /// pending에서만 fulfilled 또는 cancelled로 이동할 수 있습니다.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        match self {
            RequestStatus::Pending => {
                matches!(next, RequestStatus::Fulfilled | RequestStatus::Cancelled)
            }
            RequestStatus::Fulfilled | RequestStatus::Cancelled => false,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 혈액 요청 엔티티
///
/// `requests` 컬렉션에 저장됩니다. 수혈자의 연락 정보는 요청 시점의
/// 스냅샷으로 비정규화하여 함께 저장합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 요청을 등록한 수혈자 ID
    pub receiver_id: ObjectId,
    /// 수혈자 이름 (스냅샷)
    pub receiver_name: String,
    /// 수혈자 이메일 (스냅샷)
    pub receiver_email: String,
    /// 수혈자 연락처 (스냅샷)
    pub receiver_phone: String,
    /// 필요한 혈액형
    pub blood_group_needed: BloodGroup,
    /// 요청 도시 (대소문자 무시 비교 대상)
    pub city: String,
    /// 요청 상태
    pub status: RequestStatus,
    /// 생성 시간
    pub created_at: DateTime,
}

impl BloodRequest {
    /// 새 혈액 요청 생성 (상태는 항상 pending으로 시작)
    pub fn new(
        receiver_id: ObjectId,
        receiver_name: String,
        receiver_email: String,
        receiver_phone: String,
        blood_group_needed: BloodGroup,
        city: String,
    ) -> Self {
        Self {
            id: None,
            receiver_id,
            receiver_name,
            receiver_email,
            receiver_phone,
            blood_group_needed,
            city,
            status: RequestStatus::Pending,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(RequestStatus::parse("pending"), Some(RequestStatus::Pending));
        assert_eq!(RequestStatus::parse("Fulfilled"), Some(RequestStatus::Fulfilled));
        assert_eq!(RequestStatus::parse("CANCELLED"), Some(RequestStatus::Cancelled));
        assert_eq!(RequestStatus::parse("done"), None);
        assert_eq!(RequestStatus::parse(""), None);
    }

    #[test]
    fn test_pending_can_move_to_terminal_states() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Fulfilled));
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Cancelled));
        assert!(!RequestStatus::Pending.can_transition_to(RequestStatus::Pending));
    }

    #[test]
    fn test_terminal_states_are_frozen() {
        for terminal in [RequestStatus::Fulfilled, RequestStatus::Cancelled] {
            assert!(terminal.is_terminal());
            assert!(!terminal.can_transition_to(RequestStatus::Pending));
            assert!(!terminal.can_transition_to(RequestStatus::Fulfilled));
            assert!(!terminal.can_transition_to(RequestStatus::Cancelled));
        }
        assert!(!RequestStatus::Pending.is_terminal());
    }

    #[test]
    fn test_new_request_starts_pending() {
        let request = BloodRequest::new(
            ObjectId::new(),
            "Anita".to_string(),
            "anita@example.com".to_string(),
            "0209876543".to_string(),
            BloodGroup::ONegative,
            "Mumbai".to_string(),
        );

        assert_eq!(request.status, RequestStatus::Pending);
        assert!(request.id_string().is_none());

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["bloodGroupNeeded"], "O-");
        assert_eq!(value["status"], "pending");
    }
}
