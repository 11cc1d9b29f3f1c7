//! Validated students, departments of students, and a randomized student
//! generator.
//!
//! Every value is checked when it is set, so a [`Student`] or [`Group`] that
//! exists is always valid. Students and groups combine with `+` into new
//! groups; combinations that would repeat a member are rejected.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Validated persons and students with Cyrillic names
//! - Groups that keep their members distinct and render as text
//! - Combination of students and groups through a single dispatcher
//! - A seeded student generator fed by a pluggable name source
//!
//! # Example
//!
//! ```
//! use student_groups::{Renderable, Sex, Student};
//!
//! let ivan = Student::new("Иван", 20, Sex::Male, 80).expect("valid student");
//! let olga = Student::new("Ольга", 22, Sex::Female, 95).expect("valid student");
//!
//! let group = (&ivan + &olga).expect("distinct students");
//!
//! assert_eq!(group.size(), 2);
//! assert!(group.render().starts_with("Department 'New group' has 2 members:"));
//! assert!((&group + &ivan).is_err());
//! ```

mod error;
mod generator;
mod group;
mod names;
mod operand;
mod person;
mod student;
mod validation;

pub mod demo;

pub use error::{CapabilityError, Field, ModelError, NameSourceError, ValidationError};
pub use generator::{GENERATED_AGES, GENERATED_RATINGS, NameOrigin, StudentGenerator};
pub use group::{DEFAULT_GROUP_NAME, EMPTY_GROUP_PLACEHOLDER, Group};
pub use names::{
    DEFAULT_FEMALE_NAMES_URL, DEFAULT_MALE_NAMES_URL, FALLBACK_FEMALE_NAME, FALLBACK_MALE_NAME,
    HttpNameSource, NameLists, NameSource,
};
pub use operand::{Operand, OperandKind};
pub use person::{DEFAULT_PERSON_NAME, Person, PersonLike, PersonName, Renderable, Sex};
pub use student::{DEFAULT_STUDENT_NAME, Student, StudentId};
pub use validation::{
    AGE_MAX, AGE_MIN, RATING_MAX, RATING_MIN, is_valid_person_name, validate_age,
    validate_group_name, validate_rating,
};
