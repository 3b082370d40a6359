use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Category reference by name, embedded in athlete payloads
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryRef {
    #[validate(length(
        min = 1,
        max = 10,
        message = "Category name must be between 1 and 10 characters"
    ))]
    pub name: String,
}

/// Training center reference by name, embedded in athlete payloads
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TrainingCenterRef {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Training center name must be between 1 and 20 characters"
    ))]
    pub name: String,
}

/// Request payload for creating a new athlete
///
/// References the category and training center by their human-readable
/// names; the resolved primary keys are attached server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(length(equal = 11, message = "CPF must be exactly 11 characters"))]
    pub cpf: String,

    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: i32,

    pub weight: Decimal,

    pub height: Decimal,

    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[validate(nested)]
    pub category: CategoryRef,

    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Request payload for partially updating an existing athlete
///
/// Only fields present in the payload are applied; the category and
/// training center references are not updatable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(length(equal = 11))]
    pub cpf: Option<String>,

    #[validate(range(min = 1, max = 150))]
    pub age: Option<i32>,

    pub weight: Option<Decimal>,

    pub height: Option<Decimal>,

    #[validate(custom(function = "validate_sex"))]
    pub sex: Option<String>,
}

/// Response containing athlete information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub created_at: NaiveDateTime,
    pub category_id: Uuid,
    pub training_center_id: Uuid,
}

// Validation helpers
fn validate_sex(sex: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXES: &[&str] = &["M", "F"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_sex"))
    }
}

impl From<crate::models::Athlete> for AthleteResponse {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            name: athlete.name,
            cpf: athlete.cpf,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            created_at: athlete.created_at,
            category_id: athlete.category_id,
            training_center_id: athlete.training_center_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateAthleteRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Joao",
            "cpf": "12345678901",
            "age": 25,
            "weight": "75.5",
            "height": "1.70",
            "sex": "M",
            "category": { "name": "Legs" },
            "training_center": { "name": "CT kings" }
        }))
        .unwrap()
    }

    #[test]
    fn accepts_valid_payload() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_category_name_over_limit() {
        let mut req = valid_request();
        req.category.name = "a".repeat(11);
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_wrong_cpf_length() {
        let mut req = valid_request();
        req.cpf = "123".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_unknown_sex() {
        let mut req = valid_request();
        req.sex = "X".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<CreateAthleteRequest, _> = serde_json::from_value(serde_json::json!({
            "name": "Joao",
            "cpf": "12345678901",
            "age": 25,
            "weight": "75.5",
            "height": "1.70",
            "sex": "M",
            "category": { "name": "Legs" },
            "training_center": { "name": "CT kings" },
            "nickname": "JJ"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn update_accepts_partial_payload() {
        let req: UpdateAthleteRequest =
            serde_json::from_value(serde_json::json!({ "age": 26 })).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.age, Some(26));
        assert!(req.name.is_none());
    }
}
