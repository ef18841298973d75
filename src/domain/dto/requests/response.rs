use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;

use crate::domain::dto::persons::PersonResponse;
use crate::domain::entities::persons::BloodGroup;
use crate::domain::entities::requests::{BloodRequest, RequestStatus};

/// 혈액 요청 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequestResponse {
    pub id: String,
    pub receiver_id: String,
    pub receiver_name: String,
    pub receiver_email: String,
    pub receiver_phone: String,
    pub blood_group_needed: BloodGroup,
    pub city: String,
    pub status: RequestStatus,
    pub created_at: DateTime,
}

impl From<BloodRequest> for BloodRequestResponse {
    fn from(request: BloodRequest) -> Self {
        let BloodRequest {
            id,
            receiver_id,
            receiver_name,
            receiver_email,
            receiver_phone,
            blood_group_needed,
            city,
            status,
            created_at,
        } = request;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            receiver_id: receiver_id.to_hex(),
            receiver_name,
            receiver_email,
            receiver_phone,
            blood_group_needed,
            city,
            status,
            created_at,
        }
    }
}

/// 혈액 요청 등록 응답 DTO (즉시 계산된 매칭 헌혈자 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodRequestResponse {
    pub request: BloodRequestResponse,
    pub matching_donors: Vec<PersonResponse>,
    pub donor_count: usize,
}

impl CreateBloodRequestResponse {
    pub fn new(request: BloodRequest, matching_donors: Vec<PersonResponse>) -> Self {
        let donor_count = matching_donors.len();
        Self {
            request: BloodRequestResponse::from(request),
            matching_donors,
            donor_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_serializes_camel_case() {
        let mut request = BloodRequest::new(
            ObjectId::new(),
            "Anita".to_string(),
            "anita@example.com".to_string(),
            "0209876543".to_string(),
            BloodGroup::AbPositive,
            "Delhi".to_string(),
        );
        request.id = Some(ObjectId::new());

        let response = CreateBloodRequestResponse::new(request, vec![]);
        assert_eq!(response.donor_count, 0);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["request"]["bloodGroupNeeded"], "AB+");
        assert_eq!(value["matchingDonors"].as_array().unwrap().len(), 0);
        assert_eq!(value["donorCount"], 0);
    }
}
