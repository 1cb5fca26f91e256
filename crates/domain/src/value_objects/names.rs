//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for player names
const MAX_PLAYER_NAME_LENGTH: usize = 50;

/// Maximum length for item names and quest titles
const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for item descriptions
const MAX_ITEM_DESCRIPTION_LENGTH: usize = 500;

/// Maximum length for quest descriptions
const MAX_QUEST_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum length for email addresses (RFC 5321 limit)
const MAX_EMAIL_LENGTH: usize = 254;

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player name (non-empty, <=50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 50 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Player name cannot be empty"));
        }
        if trimmed.len() > MAX_PLAYER_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Player name cannot exceed {} characters",
                MAX_PLAYER_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

// ============================================================================
// Email
// ============================================================================

/// A validated email address (trimmed, lowercased, <=254 chars)
///
/// Validation is intentionally loose: one `@` with a dot somewhere after it.
/// Deliverability is the mail server's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new validated email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The address is empty after trimming
    /// - The address exceeds 254 characters
    /// - The address does not look like `local@domain.tld`
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let email = email.into();
        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::validation("Email cannot be empty"));
        }
        if normalized.len() > MAX_EMAIL_LENGTH {
            return Err(DomainError::validation(format!(
                "Email cannot exceed {} characters",
                MAX_EMAIL_LENGTH
            )));
        }
        if !Self::looks_like_email(&normalized) {
            return Err(DomainError::validation("Please provide a valid email"));
        }
        Ok(Self(normalized))
    }

    fn looks_like_email(s: &str) -> bool {
        let Some((local, domain)) = s.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.is_empty() {
            return false;
        }
        if local.contains(char::is_whitespace) || domain.contains(char::is_whitespace) {
            return false;
        }
        match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        }
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

// ============================================================================
// ItemName
// ============================================================================

/// A validated item name (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 100 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Item name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Item name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// ItemDescription
// ============================================================================

/// A validated item description (non-empty, <=500 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemDescription(String);

impl ItemDescription {
    /// Create a new validated item description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The description is empty after trimming
    /// - The description exceeds 500 characters after trimming
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Item description cannot be empty"));
        }
        if trimmed.len() > MAX_ITEM_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "Item description cannot exceed {} characters",
                MAX_ITEM_DESCRIPTION_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemDescription {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemDescription> for String {
    fn from(desc: ItemDescription) -> String {
        desc.0
    }
}

// ============================================================================
// QuestTitle
// ============================================================================

/// A validated quest title (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestTitle(String);

impl QuestTitle {
    /// Create a new validated quest title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The title is empty after trimming
    /// - The title exceeds 100 characters after trimming
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Quest title cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Quest title cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for QuestTitle {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<QuestTitle> for String {
    fn from(title: QuestTitle) -> String {
        title.0
    }
}

impl AsRef<str> for QuestTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// QuestDescription
// ============================================================================

/// A validated quest description (non-empty, <=1000 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestDescription(String);

impl QuestDescription {
    /// Create a new validated quest description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The description is empty after trimming
    /// - The description exceeds 1000 characters after trimming
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Quest description cannot be empty"));
        }
        if trimmed.len() > MAX_QUEST_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "Quest description cannot exceed {} characters",
                MAX_QUEST_DESCRIPTION_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for QuestDescription {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<QuestDescription> for String {
    fn from(desc: QuestDescription) -> String {
        desc.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod player_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = PlayerName::new("Aria").unwrap();
            assert_eq!(name.as_str(), "Aria");
            assert_eq!(name.to_string(), "Aria");
        }

        #[test]
        fn empty_name_rejected() {
            let result = PlayerName::new("");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn whitespace_only_rejected() {
            assert!(PlayerName::new("   ").is_err());
        }

        #[test]
        fn name_is_trimmed() {
            let name = PlayerName::new("  Kael Stormborn  ").unwrap();
            assert_eq!(name.as_str(), "Kael Stormborn");
        }

        #[test]
        fn too_long_rejected() {
            let result = PlayerName::new("a".repeat(51));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("50"));
        }

        #[test]
        fn max_length_accepted() {
            let name = PlayerName::new("a".repeat(50)).unwrap();
            assert_eq!(name.as_str().len(), 50);
        }
    }

    mod email {
        use super::*;

        #[test]
        fn valid_email() {
            let email = Email::new("aria@example.com").unwrap();
            assert_eq!(email.as_str(), "aria@example.com");
        }

        #[test]
        fn email_is_lowercased() {
            let email = Email::new("Aria@Example.COM").unwrap();
            assert_eq!(email.as_str(), "aria@example.com");
        }

        #[test]
        fn email_is_trimmed() {
            let email = Email::new("  aria@example.com  ").unwrap();
            assert_eq!(email.as_str(), "aria@example.com");
        }

        #[test]
        fn missing_at_rejected() {
            assert!(Email::new("aria.example.com").is_err());
        }

        #[test]
        fn missing_tld_rejected() {
            assert!(Email::new("aria@localhost").is_err());
        }

        #[test]
        fn empty_local_part_rejected() {
            assert!(Email::new("@example.com").is_err());
        }

        #[test]
        fn empty_rejected() {
            assert!(Email::new("").is_err());
        }

        #[test]
        fn whitespace_inside_rejected() {
            assert!(Email::new("ar ia@example.com").is_err());
        }
    }

    mod item_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = ItemName::new("Healing Potion").unwrap();
            assert_eq!(name.as_str(), "Healing Potion");
        }

        #[test]
        fn empty_name_rejected() {
            let result = ItemName::new("");
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("cannot be empty"));
        }

        #[test]
        fn name_is_trimmed() {
            let name = ItemName::new("  Iron Sword  ").unwrap();
            assert_eq!(name.as_str(), "Iron Sword");
        }

        #[test]
        fn too_long_rejected() {
            let result = ItemName::new("a".repeat(101));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("100"));
        }

        #[test]
        fn max_length_accepted() {
            let name = ItemName::new("a".repeat(100)).unwrap();
            assert_eq!(name.as_str().len(), 100);
        }
    }

    mod item_description {
        use super::*;

        #[test]
        fn valid_description() {
            let desc = ItemDescription::new("Restores 50 health points").unwrap();
            assert_eq!(desc.as_str(), "Restores 50 health points");
        }

        #[test]
        fn empty_rejected() {
            assert!(ItemDescription::new("").is_err());
        }

        #[test]
        fn too_long_rejected() {
            let result = ItemDescription::new("a".repeat(501));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("500"));
        }
    }

    mod quest_title {
        use super::*;

        #[test]
        fn valid_title() {
            let title = QuestTitle::new("Slay the Marsh Wyrm").unwrap();
            assert_eq!(title.as_str(), "Slay the Marsh Wyrm");
        }

        #[test]
        fn empty_title_rejected() {
            assert!(QuestTitle::new("").is_err());
        }

        #[test]
        fn title_is_trimmed() {
            let title = QuestTitle::new("  The Lost Caravan  ").unwrap();
            assert_eq!(title.as_str(), "The Lost Caravan");
        }

        #[test]
        fn too_long_rejected() {
            let result = QuestTitle::new("a".repeat(101));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("100"));
        }
    }

    mod quest_description {
        use super::*;

        #[test]
        fn valid_description() {
            let desc = QuestDescription::new("A wyrm terrorizes the eastern marsh.").unwrap();
            assert_eq!(desc.as_str(), "A wyrm terrorizes the eastern marsh.");
        }

        #[test]
        fn empty_rejected() {
            assert!(QuestDescription::new("").is_err());
        }

        #[test]
        fn too_long_rejected() {
            let result = QuestDescription::new("a".repeat(1001));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("1000"));
        }

        #[test]
        fn max_length_accepted() {
            let desc = QuestDescription::new("a".repeat(1000)).unwrap();
            assert_eq!(desc.as_str().len(), 1000);
        }
    }
}
