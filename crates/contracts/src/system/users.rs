use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer account as returned by `GET /user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image: Option<String>,
    pub email: String,
    #[serde(default, rename = "isVerifiedByOTP")]
    pub is_verified_by_otp: bool,
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub password_changed_at: Option<DateTime<Utc>>,
}

impl User {
    /// Active and not soft-deleted
    pub fn is_enabled(&self) -> bool {
        self.is_active && !self.is_deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_api() {
        let json = r#"{
            "_id": "u1",
            "name": "Karim",
            "email": "k@example.com",
            "isVerifiedByOTP": true,
            "role": "user",
            "isActive": true,
            "isDeleted": false,
            "createdAt": "2024-12-31T23:59:59Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_verified_by_otp);
        assert!(user.is_enabled());
        assert_eq!(user.address, "");
    }
}
