//! Stored user accounts and their public summary.

use serde::{Deserialize, Serialize};

/// A stored user account.
///
/// Records are persisted as an undifferentiated list, so the field names
/// follow the camelCase layout of the stored JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Display name entered at sign-up.
    pub full_name: String,

    /// Contact phone number, digits only.
    pub phone_number: String,

    /// Login email. Compared case-insensitively.
    pub email: String,

    /// Plaintext password as entered.
    pub password: String,

    /// Optional company name; empty when not provided.
    #[serde(default)]
    pub company_name: String,

    /// Whether the account belongs to an agency.
    #[serde(default)]
    pub is_agency: bool,
}

impl UserRecord {
    /// Returns `true` when `email` refers to this record, ignoring case.
    #[must_use]
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// The public view of this account, without the password.
    #[must_use]
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            company_name: (!self.company_name.is_empty()).then(|| self.company_name.clone()),
            is_agency: self.is_agency,
        }
    }
}

/// What the account settings screen shows for a signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// The user's full name.
    pub full_name: String,
    /// The user's email address.
    pub email: String,
    /// Company name, when one was given.
    pub company_name: Option<String>,
    /// Agency flag.
    pub is_agency: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marry() -> UserRecord {
        UserRecord {
            full_name: "Marry Doe".to_string(),
            phone_number: "1234567890".to_string(),
            email: "marry@gmail.com".to_string(),
            password: "Password123".to_string(),
            company_name: "PopX Inc".to_string(),
            is_agency: true,
        }
    }

    #[test]
    fn test_email_matches_ignores_case() {
        let user = marry();
        assert!(user.email_matches("MARRY@gmail.com"));
        assert!(user.email_matches("marry@gmail.com"));
        assert!(!user.email_matches("mary@gmail.com"));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&marry()).unwrap();
        assert!(json.contains("\"fullName\":\"Marry Doe\""));
        assert!(json.contains("\"phoneNumber\""));
        assert!(json.contains("\"companyName\""));
        assert!(json.contains("\"isAgency\":true"));
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let json = r#"{"fullName":"A B","phoneNumber":"1","email":"a@b.co","password":"12345678"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.company_name, "");
        assert!(!user.is_agency);
    }

    #[test]
    fn test_summary_omits_password_and_empty_company() {
        let mut user = marry();
        let summary = user.summary();
        assert_eq!(summary.full_name, "Marry Doe");
        assert_eq!(summary.company_name.as_deref(), Some("PopX Inc"));

        user.company_name.clear();
        assert_eq!(user.summary().company_name, None);

        let json = serde_json::to_string(&user.summary()).unwrap();
        assert!(!json.contains("Password123"));
    }
}
