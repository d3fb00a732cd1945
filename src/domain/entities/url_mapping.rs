//! URL mapping entity representing one shortening.

use chrono::{DateTime, Utc};

/// Principal recorded on auto-generated mappings.
pub const SYSTEM_PRINCIPAL: i64 = 0;

/// A persisted alias → URL mapping.
///
/// Mappings are immutable once created. An expired mapping stays in storage but
/// resolves to nothing.
#[derive(Debug, Clone)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub alias: String,
    pub custom_domain: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub created_by: i64,
}

impl UrlMapping {
    /// Returns true if the mapping has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if the mapping is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }

    /// Returns true if the mapping was created through the auto-allocation path.
    pub fn is_system_owned(&self) -> bool {
        self.created_by == SYSTEM_PRINCIPAL
    }
}

/// Input data for persisting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub alias: String,
    pub custom_domain: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: i64,
}

impl NewUrlMapping {
    /// Mapping for an auto-generated alias owned by the system principal.
    pub fn auto(original_url: String, alias: String) -> Self {
        Self {
            original_url,
            alias,
            custom_domain: None,
            expires_at: None,
            created_by: SYSTEM_PRINCIPAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn mapping(expires_at: Option<DateTime<Utc>>) -> UrlMapping {
        UrlMapping {
            id: 1,
            original_url: "https://example.com/a".to_string(),
            alias: "4c93".to_string(),
            custom_domain: None,
            expires_at,
            created_at: Utc::now(),
            created_by: SYSTEM_PRINCIPAL,
        }
    }

    #[test]
    fn test_mapping_without_expiry_never_expires() {
        assert!(!mapping(None).is_expired());
    }

    #[test]
    fn test_mapping_is_expired() {
        let link = mapping(Some(Utc::now() - Duration::seconds(1)));
        assert!(link.is_expired());
    }

    #[test]
    fn test_mapping_expires_exactly_at_deadline() {
        let deadline = Utc::now() + Duration::days(1);
        let link = mapping(Some(deadline));

        assert!(!link.is_expired_at(deadline - Duration::seconds(1)));
        assert!(link.is_expired_at(deadline));
    }

    #[test]
    fn test_new_auto_mapping_belongs_to_system() {
        let new_mapping =
            NewUrlMapping::auto("https://rust-lang.org".to_string(), "4c93".to_string());

        assert_eq!(new_mapping.created_by, SYSTEM_PRINCIPAL);
        assert!(new_mapping.custom_domain.is_none());
        assert!(new_mapping.expires_at.is_none());
    }
}
