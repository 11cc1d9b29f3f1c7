//! Field validation rules shared by people, students and groups.
//!
//! # Validation Rules
//!
//! - Person names: non-empty, first character an uppercase Cyrillic letter
//!   in `А`..=`Я` (`Ё` lies outside that block and is rejected)
//! - Ages: integers between [`AGE_MIN`] and [`AGE_MAX`]
//! - Ratings: integers between [`RATING_MIN`] and [`RATING_MAX`]
//! - Group names: non-empty

use crate::error::ValidationError;

/// Minimum allowed age.
pub const AGE_MIN: u8 = 0;

/// Maximum allowed age.
pub const AGE_MAX: u8 = 200;

/// Minimum allowed rating.
pub const RATING_MIN: u8 = 0;

/// Maximum allowed rating.
pub const RATING_MAX: u8 = 100;

/// Validates a person name.
///
/// # Examples
///
/// ```
/// use student_groups::is_valid_person_name;
///
/// assert!(is_valid_person_name("Вася"));
/// assert!(is_valid_person_name("Я"));
/// assert!(!is_valid_person_name("вася"));  // Lowercase initial
/// assert!(!is_valid_person_name("Vasya")); // Latin initial
/// assert!(!is_valid_person_name(""));
/// ```
#[must_use]
pub fn is_valid_person_name(name: &str) -> bool {
    name.chars().next().is_some_and(is_uppercase_cyrillic)
}

/// Returns `true` for the uppercase letters of the basic Cyrillic block.
#[must_use]
const fn is_uppercase_cyrillic(c: char) -> bool {
    matches!(c, 'А'..='Я')
}

/// Checks an age and narrows it to its stored width.
///
/// # Errors
///
/// Returns [`ValidationError::AgeOutOfRange`] outside [`AGE_MIN`]..=[`AGE_MAX`].
pub fn validate_age(value: i64) -> Result<u8, ValidationError> {
    narrow_in_range(value, AGE_MIN, AGE_MAX).ok_or(ValidationError::AgeOutOfRange {
        value,
        min: AGE_MIN,
        max: AGE_MAX,
    })
}

/// Checks a rating and narrows it to its stored width.
///
/// # Errors
///
/// Returns [`ValidationError::RatingOutOfRange`] outside
/// [`RATING_MIN`]..=[`RATING_MAX`].
pub fn validate_rating(value: i64) -> Result<u8, ValidationError> {
    narrow_in_range(value, RATING_MIN, RATING_MAX).ok_or(ValidationError::RatingOutOfRange {
        value,
        min: RATING_MIN,
        max: RATING_MAX,
    })
}

/// Checks that a group name is non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyGroupName`] for the empty string.
pub fn validate_group_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyGroupName);
    }
    Ok(())
}

fn narrow_in_range(value: i64, min: u8, max: u8) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|narrowed| (min..=max).contains(narrowed))
}
