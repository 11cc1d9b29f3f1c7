//! Students: people with a rating, combinable into groups.

use std::cell::RefCell;
use std::fmt;
use std::ops::Add;
use std::rc::Rc;

use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::error::{CapabilityError, ModelError, ValidationError};
use crate::group::Group;
use crate::operand::{Operand, OperandKind};
use crate::person::{Person, PersonLike, Renderable, Sex};
use crate::validation::validate_rating;

/// Name given to a default-constructed [`Student`].
pub const DEFAULT_STUDENT_NAME: &str = "Вася";

/// Identity of a student, shared by all clones of the same student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    /// Generate a new random [`StudentId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A person with a rating between 0 and 100.
///
/// `Student` is a shared handle. Every constructed student receives a fresh
/// [`StudentId`]; cloning yields another handle to the same student, so a
/// setter called through one handle is seen by every group holding another.
///
/// # Example
///
/// ```
/// use student_groups::{Group, PersonLike, Renderable, Sex, Student};
///
/// let student = Student::new("Василий", 18, Sex::Male, 50).expect("valid student");
/// let group = Group::new([student.clone()]).expect("valid group");
///
/// student.set_rating(75).expect("valid rating");
///
/// assert_eq!(student.name(), "Василий");
/// assert!(group.render().ends_with("Employee: Василий, age 18, sex М, efficiency 75%"));
/// ```
#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    state: Rc<RefCell<StudentState>>,
}

#[derive(Debug, Serialize)]
struct StudentState {
    #[serde(flatten)]
    person: Person,
    rating: u8,
}

#[derive(Serialize)]
struct StudentView<'a> {
    id: StudentId,
    #[serde(flatten)]
    state: &'a StudentState,
}

impl Student {
    /// Validates all fields and builds a student with a new identity.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, in field order.
    pub fn new(name: &str, age: i64, sex: Sex, rating: i64) -> Result<Self, ValidationError> {
        let person = Person::new(name, age, sex)?;
        let validated = validate_rating(rating)?;
        Ok(Self::from_parts(person, validated))
    }

    fn from_parts(person: Person, rating: u8) -> Self {
        Self {
            id: StudentId::random(),
            state: Rc::new(RefCell::new(StudentState { person, rating })),
        }
    }

    /// Returns the student's identity.
    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    /// Returns the rating.
    #[must_use]
    pub fn rating(&self) -> u8 {
        self.state.borrow().rating
    }

    /// Replaces the rating.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RatingOutOfRange`] and keeps the previous
    /// rating.
    pub fn set_rating(&self, rating: i64) -> Result<(), ValidationError> {
        let validated = validate_rating(rating)?;
        self.state.borrow_mut().rating = validated;
        Ok(())
    }

    /// Returns `true` when both handles refer to the same student.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Combines this student with another operand into a new group.
    ///
    /// - Student + Student: a group of both, this student first.
    /// - Student + Group: the group's members followed by this student.
    /// - Anything else is rejected.
    ///
    /// The result carries the default group name and shares its members
    /// with the operands.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Capability`] for unsupported operands and
    /// [`ModelError::Validation`] when the result would repeat a student.
    pub fn combine(&self, other: Operand<'_>) -> Result<Group, ModelError> {
        match other {
            Operand::Student(student) => Ok(Group::new([self.clone(), student.clone()])?),
            Operand::Group(group) => {
                let members = group.iter().cloned().chain([self.clone()]);
                Ok(Group::new(members)?)
            }
            Operand::Other(_) => Err(CapabilityError::UnsupportedCombination {
                left: OperandKind::Student,
                right: other.kind(),
            }
            .into()),
        }
    }

    /// Returns `true` when every candidate is a student.
    ///
    /// ```
    /// use student_groups::{Operand, Student};
    ///
    /// let student = Student::default();
    /// assert!(Student::is_students(&[Operand::from(&student)]));
    /// assert!(!Student::is_students(&[Operand::from(&student), Operand::Other("integer")]));
    /// assert!(Student::is_students(&[]));
    /// ```
    #[must_use]
    pub fn is_students(candidates: &[Operand<'_>]) -> bool {
        candidates
            .iter()
            .all(|candidate| matches!(candidate, Operand::Student(_)))
    }

    /// Builds a group with the default name from candidates that must all be
    /// students.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::NotAStudent`] for the first non-student and
    /// [`ValidationError::DuplicateMember`] for a repeated student.
    pub fn group_from_students(candidates: &[Operand<'_>]) -> Result<Group, ModelError> {
        Group::from_operands(candidates, crate::group::DEFAULT_GROUP_NAME)
    }
}

impl Default for Student {
    fn default() -> Self {
        Self::from_parts(Person::default_named(DEFAULT_STUDENT_NAME), 0)
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Student {}

impl Serialize for Student {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let state = self.state.borrow();
        StudentView {
            id: self.id,
            state: &state,
        }
        .serialize(serializer)
    }
}

impl Renderable for Student {
    fn render(&self) -> String {
        let state = self.state.borrow();
        format!(
            "Employee: {name}, age {age}, sex {sex}, efficiency {rating}%",
            name = state.person.name(),
            age = state.person.age(),
            sex = state.person.sex(),
            rating = state.rating,
        )
    }
}

impl PersonLike for Student {
    fn with_person<T>(&self, read: impl FnOnce(&Person) -> T) -> T {
        read(&self.state.borrow().person)
    }

    fn update_person<T>(&self, write: impl FnOnce(&mut Person) -> T) -> T {
        write(&mut self.state.borrow_mut().person)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Add<&Student> for &Student {
    type Output = Result<Group, ModelError>;

    fn add(self, other: &Student) -> Self::Output {
        self.combine(Operand::Student(other))
    }
}

impl Add<&Group> for &Student {
    type Output = Result<Group, ModelError>;

    fn add(self, other: &Group) -> Self::Output {
        self.combine(Operand::Group(other))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::validation::is_valid_person_name;

    #[fixture]
    fn vasya() -> Student {
        Student::new("Вася", 20, Sex::Male, 50).expect("valid student")
    }

    #[fixture]
    fn anya() -> Student {
        Student::new("Аня", 19, Sex::Female, 60).expect("valid student")
    }

    #[test]
    fn default_student_is_valid() {
        let student = Student::default();
        assert_eq!(student.name(), DEFAULT_STUDENT_NAME);
        assert_eq!(student.age(), 0);
        assert_eq!(student.sex(), Sex::Male);
        assert_eq!(student.rating(), 0);
        assert!(is_valid_person_name(&student.name()));
    }

    #[rstest]
    #[case(-1)]
    #[case(101)]
    fn rejects_out_of_range_ratings(#[case] rating: i64) {
        let result = Student::new("Вася", 20, Sex::Male, rating);
        assert!(matches!(
            result,
            Err(ValidationError::RatingOutOfRange { value, .. }) if value == rating
        ));
    }

    #[rstest]
    fn failed_rating_update_keeps_previous_value(vasya: Student) {
        assert!(vasya.set_rating(150).is_err());
        assert_eq!(vasya.rating(), 50);
    }

    #[rstest]
    fn setters_go_through_person_validation(vasya: Student) {
        assert!(vasya.set_name("").is_err());
        vasya.set_name("Василий").expect("valid name");
        vasya.set_sex(Sex::Female);

        assert_eq!(vasya.name(), "Василий");
        assert_eq!(vasya.sex(), Sex::Female);
    }

    #[rstest]
    fn clones_share_identity_and_state(vasya: Student) {
        let copy = vasya.clone();
        assert!(copy.is_same(&vasya));
        assert_eq!(copy.id(), vasya.id());

        copy.set_rating(90).expect("valid rating");
        copy.set_age(21).expect("valid age");

        assert_eq!(vasya.rating(), 90);
        assert_eq!(vasya.age(), 21);
    }

    #[rstest]
    fn equal_values_have_distinct_identities() {
        let first = Student::new("Вася", 20, Sex::Male, 50).expect("valid student");
        let second = Student::new("Вася", 20, Sex::Male, 50).expect("valid student");
        assert!(!first.is_same(&second));
        assert_ne!(first, second);
    }

    #[rstest]
    fn student_plus_student_keeps_operand_order(vasya: Student, anya: Student) {
        let group = (&vasya + &anya).expect("combined");

        let ids: Vec<_> = group.iter().map(Student::id).collect();
        assert_eq!(ids, vec![vasya.id(), anya.id()]);
        assert_eq!(group.name(), crate::group::DEFAULT_GROUP_NAME);
    }

    #[rstest]
    fn student_plus_itself_is_a_duplicate(vasya: Student) {
        let err = (&vasya + &vasya).expect_err("duplicate should fail");
        assert_eq!(
            err,
            ModelError::Validation(ValidationError::DuplicateMember { id: vasya.id() })
        );
    }

    #[rstest]
    fn student_plus_other_is_rejected(vasya: Student) {
        let err = vasya
            .combine(Operand::Other("integer"))
            .expect_err("combination should fail");
        assert_eq!(
            err,
            ModelError::Capability(CapabilityError::UnsupportedCombination {
                left: OperandKind::Student,
                right: OperandKind::Other("integer"),
            })
        );
    }

    #[rstest]
    fn group_from_students_rejects_other_kinds(vasya: Student) {
        let err = Student::group_from_students(&[Operand::from(&vasya), Operand::Other("text")])
            .expect_err("non-student should fail");
        assert_eq!(
            err,
            ModelError::Capability(CapabilityError::NotAStudent {
                index: 1,
                kind: OperandKind::Other("text"),
            })
        );
    }

    #[rstest]
    fn render_is_idempotent(anya: Student) {
        assert_eq!(anya.render(), anya.render());
        assert_eq!(anya.to_string(), anya.render());
    }

    #[rstest]
    fn serializes_flat_fields(anya: Student) {
        let json = serde_json::to_value(&anya).expect("serialize");
        let field = |key: &str| json.get(key).cloned().unwrap_or_default();
        assert_eq!(field("name"), "Аня");
        assert_eq!(field("age"), 19);
        assert_eq!(field("sex"), "Ж");
        assert_eq!(field("rating"), 60);
        assert_eq!(field("id"), anya.id().as_uuid().to_string());
    }
}
