//! Error types for the student-groups crate.
//!
//! This module defines semantic error enums for field validation, operand
//! capability checks, and name-source lookups, following the project's error
//! handling conventions with `thiserror`.

use std::fmt;

use thiserror::Error;

use crate::operand::OperandKind;
use crate::student::StudentId;

/// Field whose value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// A person's name.
    Name,
    /// A person's age.
    Age,
    /// A person's sex.
    Sex,
    /// A student's rating.
    Rating,
    /// A group's name.
    GroupName,
    /// A group's member list.
    Members,
}

impl Field {
    /// Returns the field name as it appears in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Sex => "sex",
            Self::Rating => "rating",
            Self::GroupName => "group name",
            Self::Members => "members",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when a value violates its field's domain rule.
///
/// Setters validate before mutating, so a returned error always leaves the
/// previous value in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name is empty or does not start with an uppercase Cyrillic letter.
    #[error("name '{value}' must be non-empty and start with an uppercase Cyrillic letter")]
    InvalidName {
        /// The rejected name.
        value: String,
    },

    /// The age is outside the allowed range.
    #[error("age {value} must be an integer between {min} and {max}")]
    AgeOutOfRange {
        /// The rejected age.
        value: i64,
        /// Smallest accepted age.
        min: u8,
        /// Largest accepted age.
        max: u8,
    },

    /// The sex is not one of the two accepted values.
    #[error("sex '{value}' must be either 'М' or 'Ж'")]
    InvalidSex {
        /// The rejected input.
        value: String,
    },

    /// The rating is outside the allowed range.
    #[error("rating {value} must be an integer between {min} and {max}")]
    RatingOutOfRange {
        /// The rejected rating.
        value: i64,
        /// Smallest accepted rating.
        min: u8,
        /// Largest accepted rating.
        max: u8,
    },

    /// The group name is empty.
    #[error("group name must not be empty")]
    EmptyGroupName,

    /// The same student identity appears more than once in a group.
    #[error("a member may not appear in a group more than once (student {id})")]
    DuplicateMember {
        /// Identity of the repeated student.
        id: StudentId,
    },
}

impl ValidationError {
    /// Returns the field the error refers to.
    ///
    /// # Example
    ///
    /// ```
    /// use student_groups::{Field, ValidationError};
    ///
    /// assert_eq!(ValidationError::EmptyGroupName.field(), Field::GroupName);
    /// ```
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::InvalidName { .. } => Field::Name,
            Self::AgeOutOfRange { .. } => Field::Age,
            Self::InvalidSex { .. } => Field::Sex,
            Self::RatingOutOfRange { .. } => Field::Rating,
            Self::EmptyGroupName => Field::GroupName,
            Self::DuplicateMember { .. } => Field::Members,
        }
    }
}

/// Errors raised when an operand lacks the capability an operation needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The two operands cannot be combined into a group.
    #[error("cannot combine {left} with {right}")]
    UnsupportedCombination {
        /// Kind of the left operand.
        left: OperandKind,
        /// Kind of the right operand.
        right: OperandKind,
    },

    /// A group candidate is not a student.
    #[error("group members must be students; candidate {index} is {kind}")]
    NotAStudent {
        /// Position of the offending candidate.
        index: usize,
        /// Kind of the offending candidate.
        kind: OperandKind,
    },
}

/// Errors returned by operations that both check capabilities and validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An operand lacked the required capability.
    #[error(transparent)]
    Capability(#[from] CapabilityError),
}

/// Errors raised while fetching name lists from an external source.
///
/// The generator absorbs these and switches to its fallback lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameSourceError {
    /// The HTTP client could not be built.
    #[error("failed to build name source client: {message}")]
    Client {
        /// Description of the client error.
        message: String,
    },

    /// A request failed before a response was received.
    #[error("failed to fetch names from '{url}': {message}")]
    Transport {
        /// URL that was requested.
        url: String,
        /// Description of the transport error.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("name source '{url}' answered with status {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The lists do not hold enough valid names to draw from.
    #[error("name lists are unusable: {male} male and {female} female names")]
    Insufficient {
        /// Valid male names available.
        male: usize,
        /// Valid female names available.
        female: usize,
    },
}
