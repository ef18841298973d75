//! Person Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 헌혈자(donor), 수혈자(receiver), 관리자(admin) 역할을 하나의
//! 통합된 모델로 표현하며, 헌혈자 전용 속성은 선택 필드로 관리합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 가입 시점에 고정되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonRole {
    /// 헌혈자 - 혈액형, 나이, 가용 여부를 추가로 가짐
    Donor,
    /// 수혈자 - 혈액 요청을 등록하는 역할
    Receiver,
    /// 관리자 - 헌혈자/요청 목록 관리 권한
    Admin,
}

impl PersonRole {
    /// 문자열에서 PersonRole을 생성합니다. 알 수 없는 값이면 None을 반환합니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "donor" => Some(PersonRole::Donor),
            "receiver" => Some(PersonRole::Receiver),
            "admin" => Some(PersonRole::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonRole::Donor => "donor",
            PersonRole::Receiver => "receiver",
            PersonRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ABO/Rh 혈액형 (8종)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    /// 문자열에서 BloodGroup을 생성합니다. 8종 외의 값이면 None을 반환합니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A+" => Some(BloodGroup::APositive),
            "A-" => Some(BloodGroup::ANegative),
            "B+" => Some(BloodGroup::BPositive),
            "B-" => Some(BloodGroup::BNegative),
            "AB+" => Some(BloodGroup::AbPositive),
            "AB-" => Some(BloodGroup::AbNegative),
            "O+" => Some(BloodGroup::OPositive),
            "O-" => Some(BloodGroup::ONegative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl std::fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_availability() -> bool {
    true
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// `persons` 컬렉션에 저장되며, 헌혈자 전용 필드(혈액형, 나이, 가용 여부)는
/// 비헌혈자 역할에서는 의미를 갖지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (소문자 정규화, unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호 (응답 DTO에는 포함되지 않음)
    pub password: String,
    /// 사용자 역할 (가입 시 고정)
    pub role: PersonRole,
    /// 연락처
    pub phone: String,
    /// 거주 도시 (대소문자 무시 비교 대상)
    pub city: String,
    /// 혈액형 (헌혈자 전용)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,
    /// 나이 (헌혈자 전용, 18-65)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// 헌혈 가용 여부 (헌혈자 전용, 기본값 true)
    #[serde(default = "default_availability")]
    pub is_available: bool,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Person {
    /// 새 사용자 생성
    ///
    /// 헌혈자 전용 필드는 역할이 donor일 때만 의미가 있으며,
    /// 가용 여부를 명시하지 않으면 true로 시작합니다.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        role: PersonRole,
        phone: String,
        city: String,
        blood_group: Option<BloodGroup>,
        age: Option<i32>,
        is_available: Option<bool>,
    ) -> Self {
        Self {
            id: None,
            name,
            email,
            password: password_hash,
            role,
            phone,
            city,
            blood_group,
            age,
            is_available: is_available.unwrap_or(true),
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 헌혈자인지 확인
    pub fn is_donor(&self) -> bool {
        self.role == PersonRole::Donor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_group_parse_all_eight_types() {
        for group in BloodGroup::ALL {
            assert_eq!(BloodGroup::parse(group.as_str()), Some(group));
        }
        assert_eq!(BloodGroup::parse("C+"), None);
        assert_eq!(BloodGroup::parse(""), None);
        assert_eq!(BloodGroup::parse("a+"), None);
    }

    #[test]
    fn test_blood_group_serde_uses_display_names() {
        let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");

        let parsed: BloodGroup = serde_json::from_str("\"O+\"").unwrap();
        assert_eq!(parsed, BloodGroup::OPositive);

        assert!(serde_json::from_str::<BloodGroup>("\"XYZ\"").is_err());
    }

    #[test]
    fn test_person_role_parse() {
        assert_eq!(PersonRole::parse("donor"), Some(PersonRole::Donor));
        assert_eq!(PersonRole::parse("Receiver"), Some(PersonRole::Receiver));
        assert_eq!(PersonRole::parse("ADMIN"), Some(PersonRole::Admin));
        assert_eq!(PersonRole::parse("guest"), None);
    }

    #[test]
    fn test_person_defaults_availability_to_true() {
        let person = Person::new(
            "Raj".to_string(),
            "raj@example.com".to_string(),
            "$2b$04$hash".to_string(),
            PersonRole::Donor,
            "0101234567".to_string(),
            "Pune".to_string(),
            Some(BloodGroup::BPositive),
            Some(30),
            None,
        );

        assert!(person.is_available);
        assert!(person.is_donor());
        assert!(person.id_string().is_none());
    }

    #[test]
    fn test_person_serializes_camel_case() {
        let person = Person::new(
            "Raj".to_string(),
            "raj@example.com".to_string(),
            "$2b$04$hash".to_string(),
            PersonRole::Donor,
            "0101234567".to_string(),
            "Pune".to_string(),
            Some(BloodGroup::BPositive),
            Some(30),
            Some(false),
        );

        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["bloodGroup"], "B+");
        assert_eq!(value["isAvailable"], false);
        assert_eq!(value["role"], "donor");
        assert!(value.get("blood_group").is_none());
    }
}
