//! Randomized student generation.
//!
//! [`StudentGenerator`] is an unbounded iterator of students. Names come from
//! an injected [`NameSource`], fetched once on the first draw; every other
//! value comes from the injected RNG. A failing or unusable source is logged
//! once and replaced by [`NameLists::fallback`] for the generator's lifetime.
//!
//! Usability is judged after invalid entries have been discarded: the lists
//! must hold at least two valid names in total and at least one for each
//! sex, so a draw never reaches an empty list. A source with, say, three
//! valid male names and no female names therefore falls back.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, error, warn};

use crate::error::{NameSourceError, ValidationError};
use crate::names::{FALLBACK_FEMALE_NAME, FALLBACK_MALE_NAME, NameLists, NameSource};
use crate::person::{PersonName, Sex};
use crate::student::Student;

/// Ages drawn for generated students.
pub const GENERATED_AGES: RangeInclusive<i64> = 17..=30;

/// Ratings drawn for generated students.
pub const GENERATED_RATINGS: RangeInclusive<i64> = 33..=100;

/// Where a generator's names came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOrigin {
    /// The injected source supplied usable lists.
    Source,
    /// The source failed and the fallback lists are in use.
    Fallback {
        /// Why the source's lists were not used.
        reason: NameSourceError,
    },
}

#[derive(Debug)]
struct LoadedNames {
    lists: NameLists,
    origin: NameOrigin,
}

/// Unbounded iterator of randomly generated students.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use student_groups::{NameLists, NameOrigin, StudentGenerator};
///
/// let names = NameLists::from_raw(["Иван", "Пётр"], ["Мария"]);
/// let mut generator = StudentGenerator::new(names, ChaCha8Rng::seed_from_u64(7));
///
/// let students: Vec<_> = generator.by_ref().take(5).collect();
///
/// assert_eq!(students.len(), 5);
/// assert_eq!(generator.name_origin(), Some(&NameOrigin::Source));
/// ```
#[derive(Debug)]
pub struct StudentGenerator<S, R> {
    source: S,
    rng: R,
    loaded: Option<LoadedNames>,
}

impl<S, R> StudentGenerator<S, R>
where
    S: NameSource,
    R: Rng,
{
    /// Creates a generator. The source is not queried until the first draw.
    #[must_use]
    pub const fn new(source: S, rng: R) -> Self {
        Self {
            source,
            rng,
            loaded: None,
        }
    }

    /// Returns where the names came from, or `None` before the first draw.
    #[must_use]
    pub fn name_origin(&self) -> Option<&NameOrigin> {
        self.loaded.as_ref().map(|loaded| &loaded.origin)
    }

    /// Draws one student.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a drawn value is rejected, which the
    /// validated name lists and generation ranges rule out.
    pub fn draw(&mut self) -> Result<Student, ValidationError> {
        let source = &self.source;
        let loaded = self.loaded.get_or_insert_with(|| load_names(source));
        let rng = &mut self.rng;

        let sex = Sex::ALL.choose(rng).copied().unwrap_or_default();
        let name = loaded
            .lists
            .for_sex(sex)
            .choose(rng)
            .map_or(fallback_name(sex), PersonName::as_str);
        let age = rng.random_range(GENERATED_AGES);
        let rating = rng.random_range(GENERATED_RATINGS);

        Student::new(name, age, sex, rating)
    }
}

impl<S, R> Iterator for StudentGenerator<S, R>
where
    S: NameSource,
    R: Rng,
{
    type Item = Student;

    fn next(&mut self) -> Option<Self::Item> {
        match self.draw() {
            Ok(student) => Some(student),
            Err(err) => {
                error!(error = %err, "generated student failed validation");
                None
            }
        }
    }
}

fn load_names<S: NameSource>(source: &S) -> LoadedNames {
    let fetched = source
        .fetch()
        .and_then(|lists| lists.ensure_usable().map(|()| lists));
    match fetched {
        Ok(lists) => {
            debug!(count = lists.len(), "loaded name lists");
            LoadedNames {
                lists,
                origin: NameOrigin::Source,
            }
        }
        Err(reason) => {
            warn!(error = %reason, "name source unavailable, using fallback names");
            LoadedNames {
                lists: NameLists::fallback(),
                origin: NameOrigin::Fallback { reason },
            }
        }
    }
}

const fn fallback_name(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => FALLBACK_MALE_NAME,
        Sex::Female => FALLBACK_FEMALE_NAME,
    }
}
