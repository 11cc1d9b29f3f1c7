//! Name lists and the sources that supply them.
//!
//! The generator depends on the [`NameSource`] trait only. [`HttpNameSource`]
//! downloads the lists; a [`NameLists`] value serves itself, which is how
//! offline runs and tests supply deterministic names.

mod http;

use tracing::debug;

use crate::error::NameSourceError;
use crate::person::{PersonName, Sex};

pub use http::{DEFAULT_FEMALE_NAMES_URL, DEFAULT_MALE_NAMES_URL, HttpNameSource};

/// Male name used when no usable list is available.
pub const FALLBACK_MALE_NAME: &str = "Максим";

/// Female name used when no usable list is available.
pub const FALLBACK_FEMALE_NAME: &str = "Анна";

/// Supplies male and female name lists.
pub trait NameSource {
    /// Fetches both lists.
    ///
    /// # Errors
    ///
    /// Returns [`NameSourceError`] when the lists cannot be obtained.
    fn fetch(&self) -> Result<NameLists, NameSourceError>;
}

impl<F> NameSource for F
where
    F: Fn() -> Result<NameLists, NameSourceError>,
{
    fn fetch(&self) -> Result<NameLists, NameSourceError> {
        self()
    }
}

impl NameSource for NameLists {
    fn fetch(&self) -> Result<NameLists, NameSourceError> {
        Ok(self.clone())
    }
}

/// Male and female names, each a valid [`PersonName`].
///
/// # Example
///
/// ```
/// use student_groups::{NameLists, Sex};
///
/// let lists = NameLists::from_raw(["Иван", "john"], ["Мария"]);
///
/// assert_eq!(lists.for_sex(Sex::Male).len(), 1);
/// assert_eq!(lists.len(), 2);
/// assert!(lists.ensure_usable().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLists {
    male: Vec<PersonName>,
    female: Vec<PersonName>,
}

impl NameLists {
    /// Builds lists from already validated names.
    #[must_use]
    pub const fn new(male: Vec<PersonName>, female: Vec<PersonName>) -> Self {
        Self { male, female }
    }

    /// Builds lists from raw strings, discarding entries that are not valid
    /// person names.
    pub fn from_raw<M, F>(male: M, female: F) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self::new(keep_valid(male, Sex::Male), keep_valid(female, Sex::Female))
    }

    /// Returns the single-name lists used when a source is unusable.
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_raw([FALLBACK_MALE_NAME], [FALLBACK_FEMALE_NAME])
    }

    /// Returns the names for one sex.
    #[must_use]
    pub fn for_sex(&self, sex: Sex) -> &[PersonName] {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }

    /// Returns the combined number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.male.len() + self.female.len()
    }

    /// Returns `true` when both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }

    /// Checks that a name can be drawn for either sex.
    ///
    /// # Errors
    ///
    /// Returns [`NameSourceError::Insufficient`] when fewer than two names
    /// are available or either list is empty.
    pub fn ensure_usable(&self) -> Result<(), NameSourceError> {
        if self.len() < 2 || self.male.is_empty() || self.female.is_empty() {
            return Err(NameSourceError::Insufficient {
                male: self.male.len(),
                female: self.female.len(),
            });
        }
        Ok(())
    }
}

fn keep_valid<I>(raw: I, sex: Sex) -> Vec<PersonName>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut discarded = 0_usize;
    let names: Vec<PersonName> = raw
        .into_iter()
        .filter_map(|name| {
            PersonName::new(name)
                .inspect_err(|_| discarded += 1)
                .ok()
        })
        .collect();
    if discarded > 0 {
        debug!(%sex, discarded, kept = names.len(), "discarded invalid names");
    }
    names
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn fallback_lists_hold_one_name_each() {
        let lists = NameLists::fallback();
        assert_eq!(lists.for_sex(Sex::Male).len(), 1);
        assert_eq!(lists.for_sex(Sex::Female).len(), 1);
        assert_eq!(lists.ensure_usable(), Ok(()));
    }

    #[test]
    fn from_raw_discards_invalid_entries() {
        let lists = NameLists::from_raw(["Иван", "", "ivan", "Пётр"], ["мария", "Ольга"]);

        let male: Vec<&str> = lists
            .for_sex(Sex::Male)
            .iter()
            .map(PersonName::as_str)
            .collect();
        let female: Vec<&str> = lists
            .for_sex(Sex::Female)
            .iter()
            .map(PersonName::as_str)
            .collect();
        assert_eq!(male, vec!["Иван", "Пётр"]);
        assert_eq!(female, vec!["Ольга"]);
    }

    #[rstest]
    #[case(&[], &[], 0, 0)]
    #[case(&["Иван"], &[], 1, 0)]
    #[case(&["Иван", "Пётр"], &[], 2, 0)]
    #[case(&[], &["Ольга"], 0, 1)]
    fn unusable_lists_are_reported(
        #[case] male: &[&str],
        #[case] female: &[&str],
        #[case] male_count: usize,
        #[case] female_count: usize,
    ) {
        let lists = NameLists::from_raw(male.iter().copied(), female.iter().copied());
        assert_eq!(
            lists.ensure_usable(),
            Err(NameSourceError::Insufficient {
                male: male_count,
                female: female_count,
            })
        );
    }

    #[test]
    fn closures_act_as_sources() {
        let source = || -> Result<NameLists, NameSourceError> {
            Err(NameSourceError::Transport {
                url: "http://names.invalid".to_owned(),
                message: "offline".to_owned(),
            })
        };
        assert!(source.fetch().is_err());
    }

    #[test]
    fn lists_serve_themselves() {
        let lists = NameLists::from_raw(["Иван"], ["Ольга"]);
        assert_eq!(lists.fetch(), Ok(lists.clone()));
    }
}
