//! Runtime-typed operands for combination and membership checks.
//!
//! Students and groups combine into groups regardless of which side each
//! one is on. [`Operand`] tags a borrowed value with its kind so that both
//! [`Student::combine`](crate::Student::combine) and
//! [`Group::combine`](crate::Group::combine) dispatch with a single `match`.

use std::fmt;

use crate::error::{CapabilityError, ModelError};
use crate::group::Group;
use crate::student::Student;

/// Kind of an operand, as reported in capability errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// A student.
    Student,
    /// A group.
    Group,
    /// Any other value, named by its kind.
    Other(&'static str),
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => f.write_str("Student"),
            Self::Group => f.write_str("Group"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

/// A borrowed value taking part in a combination.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// A student.
    Student(&'a Student),
    /// A group.
    Group(&'a Group),
    /// A value with no combination semantics, named by its kind.
    Other(&'static str),
}

impl Operand<'_> {
    /// Returns the operand's kind.
    #[must_use]
    pub const fn kind(&self) -> OperandKind {
        match self {
            Self::Student(_) => OperandKind::Student,
            Self::Group(_) => OperandKind::Group,
            Self::Other(kind) => OperandKind::Other(*kind),
        }
    }

    /// Combines two operands into a new group.
    ///
    /// Students and groups follow the rules of [`Student::combine`] and
    /// [`Group::combine`]; an [`Operand::Other`] on the left is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Capability`] for unsupported kinds and
    /// [`ModelError::Validation`] when the result would repeat a student.
    ///
    /// # Example
    ///
    /// ```
    /// use student_groups::{Operand, Sex, Student};
    ///
    /// let a = Student::new("Вася", 20, Sex::Male, 50).expect("valid");
    /// let b = Student::new("Аня", 19, Sex::Female, 60).expect("valid");
    ///
    /// let group = Operand::from(&a).combine(Operand::from(&b)).expect("combined");
    /// assert_eq!(group.size(), 2);
    /// assert!(Operand::Other("integer").combine(Operand::from(&a)).is_err());
    /// ```
    pub fn combine(self, other: Operand<'_>) -> Result<Group, ModelError> {
        match self {
            Self::Student(student) => student.combine(other),
            Self::Group(group) => group.combine(other),
            Self::Other(_) => Err(CapabilityError::UnsupportedCombination {
                left: self.kind(),
                right: other.kind(),
            }
            .into()),
        }
    }
}

impl<'a> From<&'a Student> for Operand<'a> {
    fn from(student: &'a Student) -> Self {
        Self::Student(student)
    }
}

impl<'a> From<&'a Group> for Operand<'a> {
    fn from(group: &'a Group) -> Self {
        Self::Group(group)
    }
}
