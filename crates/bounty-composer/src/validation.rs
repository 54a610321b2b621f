//! # Draft Validation
//!
//! Classifies a draft into exactly one outcome. Rules are checked in a
//! fixed order and the first failure wins:
//!
//! 1. reward missing or negative
//! 2. target name empty
//! 3. target name longer than `max_name_length`
//! 4. free-typed vessel text longer than `max_vessel_length`, whether or
//!    not custom-vessel mode is currently on
//! 5. description longer than `max_description_length`
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes.
//! This deliberately differs from the game client, which measures UTF-16
//! code units: a character outside the Basic Multilingual Plane (emoji,
//! for instance) counts once here and twice there.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bounty_core::locale::{
    MSG_DESCRIPTION_TOO_LONG, MSG_INVALID_REWARD, MSG_NAME_TOO_LONG, MSG_NO_NAME, MSG_READY,
    MSG_VESSEL_TOO_LONG,
};
use bounty_core::BountyRules;

/// Why a draft cannot be submitted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Reward is missing, unparseable or negative.
    #[error("reward must be a non-negative integer")]
    InvalidReward,
    /// Target name is empty.
    #[error("target name is empty")]
    EmptyName,
    /// Target name exceeds the configured limit.
    #[error("target name is too long")]
    NameTooLong,
    /// Free-typed vessel exceeds the configured limit.
    #[error("vessel name is too long")]
    VesselTooLong,
    /// Description exceeds the configured limit.
    #[error("description is too long")]
    DescriptionTooLong,
}

impl ValidationError {
    /// Localization key of the message shown for this failure.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidReward => MSG_INVALID_REWARD,
            Self::EmptyName => MSG_NO_NAME,
            Self::NameTooLong => MSG_NAME_TOO_LONG,
            Self::VesselTooLong => MSG_VESSEL_TOO_LONG,
            Self::DescriptionTooLong => MSG_DESCRIPTION_TOO_LONG,
        }
    }
}

/// Outcome of validating a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    /// The draft can be finalized.
    Valid,
    /// The draft fails the given rule.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Whether the create action should be enabled.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failing rule, if any.
    pub fn error(&self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(*e),
        }
    }

    /// Localization key of the status line.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Valid => MSG_READY,
            Self::Invalid(e) => e.message_key(),
        }
    }
}

/// Derived field values a draft is judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftFields<'a> {
    /// Parsed reward, `None` when the text is not an integer.
    pub reward: Option<i32>,
    /// Effective target name.
    pub name: &'a str,
    /// Free-typed vessel text. Checked even while the vessel is picked
    /// from the list, so a hidden over-long entry still blocks creation.
    pub vessel_text: &'a str,
    /// Description text.
    pub description: &'a str,
}

/// Parse reward text as a base-10 `i32`.
///
/// Surrounding whitespace and a leading sign are accepted. Negative values
/// parse fine; rejecting them is the validator's job.
pub fn parse_reward(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Classify `fields` against `rules`.
pub fn validate_fields(fields: &DraftFields<'_>, rules: &BountyRules) -> ValidationResult {
    match fields.reward {
        Some(reward) if reward >= 0 => {}
        _ => return ValidationResult::Invalid(ValidationError::InvalidReward),
    }

    if fields.name.is_empty() {
        return ValidationResult::Invalid(ValidationError::EmptyName);
    }

    if char_len(fields.name) > rules.max_name_length {
        return ValidationResult::Invalid(ValidationError::NameTooLong);
    }

    if char_len(fields.vessel_text) > rules.max_vessel_length {
        return ValidationResult::Invalid(ValidationError::VesselTooLong);
    }

    if char_len(fields.description) > rules.max_description_length {
        return ValidationResult::Invalid(ValidationError::DescriptionTooLong);
    }

    ValidationResult::Valid
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> BountyRules {
        BountyRules {
            max_name_length: 5,
            max_vessel_length: 4,
            max_description_length: 10,
            ..BountyRules::default()
        }
    }

    fn fields<'a>() -> DraftFields<'a> {
        DraftFields {
            reward: Some(100),
            name: "Alice",
            vessel_text: "",
            description: "",
        }
    }

    // ── Reward parsing ───────────────────────────────────────────────

    #[test]
    fn test_parse_reward() {
        assert_eq!(parse_reward("500"), Some(500));
        assert_eq!(parse_reward(" 42 "), Some(42));
        assert_eq!(parse_reward("+7"), Some(7));
        assert_eq!(parse_reward("-5"), Some(-5));
        assert_eq!(parse_reward(""), None);
        assert_eq!(parse_reward("12abc"), None);
        assert_eq!(parse_reward("1.5"), None);
        assert_eq!(parse_reward("99999999999"), None);
    }

    // ── Individual rules ─────────────────────────────────────────────

    #[test]
    fn test_valid_fields() {
        assert_eq!(validate_fields(&fields(), &rules()), ValidationResult::Valid);
    }

    #[test]
    fn test_zero_reward_is_valid() {
        let f = DraftFields { reward: Some(0), ..fields() };
        assert!(validate_fields(&f, &rules()).is_valid());
    }

    #[test]
    fn test_missing_or_negative_reward() {
        for reward in [None, Some(-1), Some(i32::MIN)] {
            let f = DraftFields { reward, ..fields() };
            assert_eq!(
                validate_fields(&f, &rules()),
                ValidationResult::Invalid(ValidationError::InvalidReward)
            );
        }
    }

    #[test]
    fn test_name_length_boundary() {
        let ok = DraftFields { name: "abcde", ..fields() };
        assert!(validate_fields(&ok, &rules()).is_valid());
        let long = DraftFields { name: "abcdef", ..fields() };
        assert_eq!(
            validate_fields(&long, &rules()).error(),
            Some(ValidationError::NameTooLong)
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        // Five characters, ten bytes.
        let f = DraftFields { name: "ééééé", ..fields() };
        assert!(validate_fields(&f, &rules()).is_valid());
    }

    #[test]
    fn test_vessel_text_length() {
        let f = DraftFields { vessel_text: "Falcon", ..fields() };
        assert_eq!(
            validate_fields(&f, &rules()).error(),
            Some(ValidationError::VesselTooLong)
        );
        let f = DraftFields { vessel_text: "Bee", ..fields() };
        assert!(validate_fields(&f, &rules()).is_valid());
    }

    #[test]
    fn test_lengths_are_not_utf16_units() {
        // Five emoji are ten UTF-16 units but five characters.
        let f = DraftFields { name: "😀😀😀😀😀", ..fields() };
        assert!(validate_fields(&f, &rules()).is_valid());
    }

    #[test]
    fn test_description_too_long() {
        let f = DraftFields { description: "0123456789X", ..fields() };
        assert_eq!(
            validate_fields(&f, &rules()).error(),
            Some(ValidationError::DescriptionTooLong)
        );
    }

    // ── Precedence ───────────────────────────────────────────────────

    #[test]
    fn test_reward_precedes_empty_name() {
        let f = DraftFields { reward: Some(-1), name: "", ..fields() };
        assert_eq!(
            validate_fields(&f, &rules()).error(),
            Some(ValidationError::InvalidReward)
        );
    }

    #[test]
    fn test_name_precedes_vessel_precedes_description() {
        let f = DraftFields {
            reward: Some(1),
            name: "too long name",
            vessel_text: "too long vessel",
            description: "too long description",
        };
        assert_eq!(
            validate_fields(&f, &rules()).error(),
            Some(ValidationError::NameTooLong)
        );
        let f = DraftFields { name: "ok", ..f };
        assert_eq!(
            validate_fields(&f, &rules()).error(),
            Some(ValidationError::VesselTooLong)
        );
        let f = DraftFields { vessel_text: "", ..f };
        assert_eq!(
            validate_fields(&f, &rules()).error(),
            Some(ValidationError::DescriptionTooLong)
        );
    }

    // ── Message keys ─────────────────────────────────────────────────

    #[test]
    fn test_message_keys() {
        assert_eq!(ValidationResult::Valid.message_key(), MSG_READY);
        assert_eq!(
            ValidationResult::Invalid(ValidationError::VesselTooLong).message_key(),
            MSG_VESSEL_TOO_LONG
        );
        assert_eq!(ValidationError::EmptyName.message_key(), MSG_NO_NAME);
    }

    #[test]
    fn test_result_serde_format() {
        let json = serde_json::to_string(&ValidationResult::Invalid(ValidationError::EmptyName))
            .unwrap();
        assert_eq!(json, r#"{"invalid":"empty_name"}"#);
        assert_eq!(serde_json::to_string(&ValidationResult::Valid).unwrap(), r#""valid""#);
    }
}
