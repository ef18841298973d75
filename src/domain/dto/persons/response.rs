use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;

use crate::domain::entities::persons::{BloodGroup, Person, PersonRole};

/// 사용자 응답 DTO
///
/// 비밀번호 해시를 제외한 사용자 정보만 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: PersonRole,
    pub phone: String,
    pub city: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    pub is_available: bool,
    pub created_at: DateTime,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        let Person {
            id,
            name,
            email,
            role,
            phone,
            city,
            blood_group,
            age,
            is_available,
            created_at,
            ..
        } = person;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            role,
            phone,
            city,
            blood_group,
            age,
            is_available,
            created_at,
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: PersonResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl LoginResponse {
    /// 리프레시 토큰과 함께 로그인 응답 생성
    pub fn new(
        person: Person,
        access_token: String,
        expires_in: i64,
        refresh_token: Option<String>,
    ) -> Self {
        Self {
            user: PersonResponse::from(person),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_excludes_password() {
        let mut person = Person::new(
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
        person.id = Some(ObjectId::new());

        let response = PersonResponse::from(person.clone());
        assert_eq!(response.id, person.id.unwrap().to_hex());

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["bloodGroup"], "B+");
        assert_eq!(value["isAvailable"], true);
    }
}
