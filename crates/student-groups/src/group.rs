//! Named, ordered groups of distinct students.

use std::collections::HashSet;
use std::fmt;
use std::ops::Add;

use serde::Serialize;

use crate::error::{CapabilityError, ModelError, ValidationError};
use crate::operand::{Operand, OperandKind};
use crate::person::Renderable;
use crate::student::Student;
use crate::validation::validate_group_name;

/// Name given to groups built without an explicit name.
pub const DEFAULT_GROUP_NAME: &str = "New group";

/// Placeholder rendered in place of the member list of an empty group.
pub const EMPTY_GROUP_PLACEHOLDER: &str = "Empty";

/// A named, ordered collection of students.
///
/// Members are [`Student`] handles shared with the caller and with any other
/// group holding the same student, so later setter calls show up here.
///
/// ## Invariants
/// - `name` is non-empty.
/// - No student identity appears more than once in `students`.
///
/// # Example
///
/// ```
/// use student_groups::{Group, Sex, Student};
///
/// let a = Student::new("Вася", 20, Sex::Male, 50).expect("valid");
/// let b = Student::new("Аня", 19, Sex::Female, 60).expect("valid");
///
/// let group = Group::with_name([a.clone(), b], "Продажи").expect("valid group");
/// assert_eq!(group.size(), 2);
/// assert!(group.contains(&a));
///
/// assert!(Group::new([a.clone(), a]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    name: String,
    students: Vec<Student>,
}

impl Group {
    /// Builds a group with the default name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateMember`] when a student appears
    /// twice.
    pub fn new(students: impl IntoIterator<Item = Student>) -> Result<Self, ValidationError> {
        Self::with_name(students, DEFAULT_GROUP_NAME)
    }

    /// Builds a named group.
    ///
    /// Members are checked before the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateMember`] when a student appears
    /// twice and [`ValidationError::EmptyGroupName`] for an empty name.
    pub fn with_name(
        students: impl IntoIterator<Item = Student>,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let members: Vec<Student> = students.into_iter().collect();
        ensure_distinct(&members)?;
        let owned_name = name.into();
        validate_group_name(&owned_name)?;
        Ok(Self {
            name: owned_name,
            students: members,
        })
    }

    /// Builds a named group without members.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyGroupName`] for an empty name.
    pub fn empty(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_name(Vec::<Student>::new(), name)
    }

    /// Builds a named group from operands that must all be students.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::NotAStudent`] for the first operand that is
    /// not a student, then the errors of [`Group::with_name`].
    pub fn from_operands(
        candidates: &[Operand<'_>],
        name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let students = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| match candidate {
                Operand::Student(student) => Ok((*student).clone()),
                other => Err(CapabilityError::NotAStudent {
                    index,
                    kind: other.kind(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_name(students, name)?)
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the group name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyGroupName`] and keeps the previous name.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let owned = name.into();
        validate_group_name(&owned)?;
        self.name = owned;
        Ok(())
    }

    /// Returns the members in order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Replaces the whole member list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateMember`] and keeps the previous
    /// members.
    pub fn set_students(
        &mut self,
        students: impl IntoIterator<Item = Student>,
    ) -> Result<(), ValidationError> {
        let members: Vec<Student> = students.into_iter().collect();
        ensure_distinct(&members)?;
        self.students = members;
        Ok(())
    }

    /// Returns the number of members.
    #[must_use]
    pub fn size(&self) -> usize {
        self.students.len()
    }

    /// Returns `true` when the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Returns `true` when the student (by identity) is a member.
    #[must_use]
    pub fn contains(&self, student: &Student) -> bool {
        self.students.iter().any(|member| member.is_same(student))
    }

    /// Iterates over the members in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Combines this group with another operand into a new group.
    ///
    /// - Group + Group: this group's members, then the other's.
    /// - Group + Student: the student appended, as in
    ///   [`Student::combine`].
    /// - Anything else is rejected.
    ///
    /// The result carries the default group name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Capability`] for unsupported operands and
    /// [`ModelError::Validation`] when both sides share a student.
    pub fn combine(&self, other: Operand<'_>) -> Result<Self, ModelError> {
        match other {
            Operand::Group(group) => {
                let members = self.iter().chain(group.iter()).cloned();
                Ok(Self::new(members)?)
            }
            Operand::Student(student) => student.combine(Operand::Group(self)),
            Operand::Other(_) => Err(CapabilityError::UnsupportedCombination {
                left: OperandKind::Group,
                right: other.kind(),
            }
            .into()),
        }
    }
}

fn ensure_distinct(students: &[Student]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(students.len());
    for student in students {
        if !seen.insert(student.id()) {
            return Err(ValidationError::DuplicateMember { id: student.id() });
        }
    }
    Ok(())
}

impl Renderable for Group {
    fn render(&self) -> String {
        let header = format!(
            "Department '{name}' has {size} members:",
            name = self.name,
            size = self.size(),
        );
        if self.is_empty() {
            return format!("{header}\n\t{EMPTY_GROUP_PLACEHOLDER}");
        }
        let lines: Vec<String> = self
            .students
            .iter()
            .enumerate()
            .map(|(index, student)| format!("\t{}. {}", index + 1, student.render()))
            .collect();
        format!("{header}\n{}", lines.join("\n"))
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add<&Group> for &Group {
    type Output = Result<Group, ModelError>;

    fn add(self, other: &Group) -> Self::Output {
        self.combine(Operand::Group(other))
    }
}

impl Add<&Student> for &Group {
    type Output = Result<Group, ModelError>;

    fn add(self, other: &Student) -> Self::Output {
        self.combine(Operand::Student(other))
    }
}
