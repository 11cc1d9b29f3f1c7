//! Validated person attributes shared by every person-like entity.
//!
//! [`Person`] holds the three validated fields. Concrete entities such as
//! [`Student`](crate::Student) share a `Person` between their handles and
//! expose it through the [`PersonLike`] trait, which also requires the
//! [`Renderable`] capability.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;
use crate::validation::{is_valid_person_name, validate_age};

/// Name given to a default-constructed [`Person`].
pub const DEFAULT_PERSON_NAME: &str = "Новый человек";

/// Human-readable rendering capability.
pub trait Renderable {
    /// Renders the value as plain text for display.
    fn render(&self) -> String;
}

/// Sex of a person.
///
/// Parsing accepts `М` and `Ж` in either case and normalizes to the
/// uppercase form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    /// Male, written `М`.
    #[default]
    #[serde(rename = "М")]
    Male,
    /// Female, written `Ж`.
    #[serde(rename = "Ж")]
    Female,
}

impl Sex {
    /// Both values, male first.
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Returns the canonical uppercase letter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "М",
            Self::Female => "Ж",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    /// Parses `М`/`Ж` case-insensitively.
    ///
    /// ```
    /// use student_groups::Sex;
    ///
    /// assert_eq!("ж".parse::<Sex>(), Ok(Sex::Female));
    /// assert!("x".parse::<Sex>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "М" => Ok(Self::Male),
            "Ж" => Ok(Self::Female),
            _ => Err(ValidationError::InvalidSex {
                value: value.to_owned(),
            }),
        }
    }
}

/// A person name starting with an uppercase Cyrillic letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a [`PersonName`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] when the name is empty or does
    /// not start with an uppercase Cyrillic letter.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let owned = name.into();
        if !is_valid_person_name(&owned) {
            return Err(ValidationError::InvalidName { value: owned });
        }
        Ok(Self(owned))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated name, age and sex.
///
/// ## Invariants
/// - `name` satisfies [`is_valid_person_name`].
/// - `age` lies within [`AGE_MIN`](crate::AGE_MIN)..=[`AGE_MAX`](crate::AGE_MAX).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: PersonName,
    age: u8,
    sex: Sex,
}

impl Person {
    /// Validates all fields and builds a person.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking the name first.
    ///
    /// # Example
    ///
    /// ```
    /// use student_groups::{Person, Sex};
    ///
    /// let person = Person::new("Жанна", 21, Sex::Female).expect("valid person");
    /// assert_eq!(person.name(), "Жанна");
    /// assert_eq!(person.age(), 21);
    /// ```
    pub fn new(name: &str, age: i64, sex: Sex) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PersonName::new(name)?,
            age: validate_age(age)?,
            sex,
        })
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the age.
    #[must_use]
    pub const fn age(&self) -> u8 {
        self.age
    }

    /// Returns the sex.
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Replaces the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] and keeps the previous name.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = PersonName::new(name)?;
        Ok(())
    }

    /// Replaces the age.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AgeOutOfRange`] and keeps the previous age.
    pub fn set_age(&mut self, age: i64) -> Result<(), ValidationError> {
        self.age = validate_age(age)?;
        Ok(())
    }

    /// Replaces the sex.
    pub const fn set_sex(&mut self, sex: Sex) {
        self.sex = sex;
    }

    /// Builds a newborn male person from a name constant known to be valid.
    pub(crate) fn default_named(name: &'static str) -> Self {
        debug_assert!(is_valid_person_name(name));
        Self {
            name: PersonName(name.to_owned()),
            age: 0,
            sex: Sex::Male,
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::default_named(DEFAULT_PERSON_NAME)
    }
}

/// Entities carrying validated [`Person`] fields.
///
/// Implementors are shared handles: they lend their embedded `Person` to a
/// closure, and every setter is visible through all clones of the handle.
/// The accessors and setters are provided. The closures must not reach back
/// into the same handle.
pub trait PersonLike: Renderable {
    /// Runs `read` against the embedded person.
    fn with_person<T>(&self, read: impl FnOnce(&Person) -> T) -> T;

    /// Runs `write` against the embedded person.
    fn update_person<T>(&self, write: impl FnOnce(&mut Person) -> T) -> T;

    /// Returns the name.
    fn name(&self) -> String {
        self.with_person(|person| person.name().to_owned())
    }

    /// Returns the age.
    fn age(&self) -> u8 {
        self.with_person(Person::age)
    }

    /// Returns the sex.
    fn sex(&self) -> Sex {
        self.with_person(Person::sex)
    }

    /// Replaces the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] and keeps the previous name.
    fn set_name(&self, name: &str) -> Result<(), ValidationError> {
        self.update_person(|person| person.set_name(name))
    }

    /// Replaces the age.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AgeOutOfRange`] and keeps the previous age.
    fn set_age(&self, age: i64) -> Result<(), ValidationError> {
        self.update_person(|person| person.set_age(age))
    }

    /// Replaces the sex.
    fn set_sex(&self, sex: Sex) {
        self.update_person(|person| person.set_sex(sex));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("м", Sex::Male)]
    #[case("М", Sex::Male)]
    #[case("ж", Sex::Female)]
    #[case("Ж", Sex::Female)]
    fn sex_parses_case_insensitively(#[case] input: &str, #[case] expected: Sex) {
        assert_eq!(input.parse::<Sex>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("M")] // Latin M
    #[case("мж")]
    #[case("male")]
    fn sex_rejects_unknown_values(#[case] input: &str) {
        assert_eq!(
            input.parse::<Sex>(),
            Err(ValidationError::InvalidSex {
                value: input.to_owned()
            })
        );
    }

    #[test]
    fn sex_displays_uppercase_letter() {
        assert_eq!(Sex::Male.to_string(), "М");
        assert_eq!(Sex::Female.to_string(), "Ж");
    }

    #[test]
    fn sex_serializes_as_letter() {
        let json = serde_json::to_string(&Sex::Female).expect("serialize");
        assert_eq!(json, "\"Ж\"");
    }

    #[test]
    fn person_defaults_are_valid() {
        let person = Person::default();
        assert_eq!(person.name(), DEFAULT_PERSON_NAME);
        assert_eq!(person.age(), 0);
        assert_eq!(person.sex(), Sex::Male);
        assert!(is_valid_person_name(person.name()));
    }

    #[test]
    fn failed_name_update_keeps_previous_value() {
        let mut person = Person::new("Михаил", 25, Sex::Male).expect("valid person");

        let result = person.set_name("mikhail");

        assert!(matches!(result, Err(ValidationError::InvalidName { .. })));
        assert_eq!(person.name(), "Михаил");
    }

    #[test]
    fn failed_age_update_keeps_previous_value() {
        let mut person = Person::new("Михаил", 25, Sex::Male).expect("valid person");

        assert!(person.set_age(-5).is_err());
        assert_eq!(person.age(), 25);

        person.set_age(26).expect("valid age");
        assert_eq!(person.age(), 26);
    }

    #[test]
    fn person_name_round_trips_through_string() {
        let name = PersonName::try_from("Анна".to_owned()).expect("valid name");
        assert_eq!(String::from(name), "Анна");
    }
}
