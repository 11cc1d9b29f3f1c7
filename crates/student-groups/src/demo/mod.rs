//! Demonstration run printing sample students and groups.
//!
//! The `student-groups-demo` binary delegates to [`run`], keeping the flow
//! testable without spawning a process.

mod config;
mod error;

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reqwest::Url;
use serde::Serialize;
use tracing::info;

use crate::generator::{NameOrigin, StudentGenerator};
use crate::group::Group;
use crate::names::{
    DEFAULT_FEMALE_NAMES_URL, DEFAULT_MALE_NAMES_URL, HttpNameSource, NameLists, NameSource,
};
use crate::person::{Renderable, Sex};
use crate::student::Student;

pub use config::DemoSettings;
pub use error::DemoError;

/// Summary of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Number of students drawn from the generator.
    pub drawn: usize,
    /// Where the generator's names came from; `None` when nothing was drawn.
    ///
    /// Offline runs serve the fallback lists as the source itself, so they
    /// report [`NameOrigin::Source`]. [`NameOrigin::Fallback`] means a
    /// configured source failed.
    pub name_origin: Option<NameOrigin>,
    /// Number of groups written to the output.
    pub groups: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    groups: &'a [Group],
    rejected_combination: Option<String>,
}

/// Builds the sample groups and writes them to `out`.
///
/// # Errors
///
/// Returns [`DemoError`] when a configured URL is invalid, the HTTP client
/// cannot be built, or the output cannot be written.
///
/// # Example
///
/// ```
/// use student_groups::demo::{DemoSettings, run};
///
/// let settings = DemoSettings {
///     offline: true,
///     json: false,
///     count: Some(12),
///     seed: Some(7),
///     timeout_secs: None,
///     male_names_url: None,
///     female_names_url: None,
/// };
/// let mut out = Vec::new();
///
/// let report = run(&settings, &mut out).expect("demo runs");
///
/// assert_eq!(report.drawn, 12);
/// assert!(String::from_utf8(out).expect("utf-8").contains("Разработчики"));
/// ```
pub fn run<W: Write>(settings: &DemoSettings, out: &mut W) -> Result<DemoReport, DemoError> {
    let vasiliy = Student::new("Василий", 18, Sex::Male, 50)?;
    let zhanna = Student::new("Жанна", 21, Sex::Female, 70)?;
    let mikhail = Student::new("Михаил", 25, Sex::Male, 45)?;
    let vasilina = Student::new("Василина", 18, Sex::Female, 35)?;
    let pafnutiy = Student::new("Пафнутий", 23, Sex::Male, 100)?;

    let support = Group::with_name([zhanna.clone(), vasiliy.clone()], "Техническая поддержка")?;
    let sales = Group::with_name([vasilina.clone(), mikhail.clone()], "Продажи")?;
    let analysts = Group::with_name(
        [pafnutiy.clone(), vasilina, mikhail, zhanna],
        "Аналитики",
    )?;

    let (drawn, name_origin) = draw_students(settings)?;
    let drawn_count = drawn.len();
    let mut remaining = drawn.into_iter();
    let developers = Group::with_name(remaining.by_ref().take(3), "Разработчики")?;
    let testers = Group::with_name(remaining.by_ref().take(5), "Тестировщики")?;
    let web = Group::with_name(remaining.by_ref().take(4), "Веб разработка")?;

    let mut merged = (&support + &sales)?;
    merged.set_name("Поддержка и продажи")?;
    let pair = (&vasiliy + &pafnutiy)?;
    let rejected_combination = (&support + &analysts).err().map(|err| err.to_string());

    let groups = [support, sales, developers, testers, analysts, web, merged, pair];
    if settings.json {
        let output = JsonOutput {
            groups: &groups,
            rejected_combination,
        };
        let json = serde_json::to_string_pretty(&output).map_err(|error| DemoError::Output {
            message: error.to_string(),
        })?;
        write_line(out, &json)?;
    } else {
        for group in &groups {
            write_line(out, &group.render())?;
            write_line(out, "")?;
        }
        if let Some(reason) = &rejected_combination {
            write_line(out, &format!("Combining support with analysts failed: {reason}"))?;
        }
    }

    Ok(DemoReport {
        drawn: drawn_count,
        name_origin,
        groups: groups.len(),
    })
}

fn draw_students(
    settings: &DemoSettings,
) -> Result<(Vec<Student>, Option<NameOrigin>), DemoError> {
    let rng = settings
        .seed
        .map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64);
    if settings.offline {
        return Ok(draw_from(NameLists::fallback(), rng, settings.count()));
    }
    let source = HttpNameSource::new(
        configured_url(settings.male_names_url.as_deref(), DEFAULT_MALE_NAMES_URL)?,
        configured_url(settings.female_names_url.as_deref(), DEFAULT_FEMALE_NAMES_URL)?,
        settings.timeout(),
    )?;
    Ok(draw_from(source, rng, settings.count()))
}

fn draw_from<S: NameSource>(
    source: S,
    rng: ChaCha8Rng,
    count: usize,
) -> (Vec<Student>, Option<NameOrigin>) {
    let mut generator = StudentGenerator::new(source, rng);
    let students: Vec<Student> = generator.by_ref().take(count).collect();
    let origin = generator.name_origin().cloned();
    info!(drawn = students.len(), origin = ?origin, "drew generated students");
    (students, origin)
}

fn configured_url(configured: Option<&str>, default: &str) -> Result<Url, DemoError> {
    let raw = configured.unwrap_or(default);
    Url::parse(raw).map_err(|error| DemoError::InvalidUrl {
        url: raw.to_owned(),
        message: error.to_string(),
    })
}

fn write_line<W: Write>(out: &mut W, text: &str) -> Result<(), DemoError> {
    writeln!(out, "{text}").map_err(|error| DemoError::Output {
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::names::{FALLBACK_FEMALE_NAME, FALLBACK_MALE_NAME};

    #[fixture]
    fn offline_settings() -> DemoSettings {
        DemoSettings {
            offline: true,
            json: false,
            count: Some(20),
            seed: Some(2026),
            timeout_secs: None,
            male_names_url: None,
            female_names_url: None,
        }
    }

    fn run_to_string(settings: &DemoSettings) -> (DemoReport, String) {
        let mut out = Vec::new();
        let report = run(settings, &mut out).expect("demo runs");
        (report, String::from_utf8(out).expect("utf-8 output"))
    }

    #[rstest]
    fn offline_run_serves_fallback_lists_as_the_source(offline_settings: DemoSettings) {
        let (report, text) = run_to_string(&offline_settings);

        assert_eq!(report.drawn, 20);
        assert_eq!(report.groups, 8);
        assert_eq!(report.name_origin, Some(NameOrigin::Source));
        assert!(
            text.contains(&format!("Employee: {FALLBACK_MALE_NAME},"))
                || text.contains(&format!("Employee: {FALLBACK_FEMALE_NAME},"))
        );
        assert!(text.contains("Department 'Техническая поддержка' has 2 members:"));
        assert!(text.contains("Department 'Тестировщики' has 5 members:"));
        assert!(text.contains("Combining support with analysts failed"));
    }

    #[rstest]
    fn short_draws_leave_groups_empty(mut offline_settings: DemoSettings) {
        offline_settings.count = Some(2);

        let (report, text) = run_to_string(&offline_settings);

        assert_eq!(report.drawn, 2);
        assert!(text.contains("Department 'Разработчики' has 2 members:"));
        assert!(text.contains("Department 'Веб разработка' has 0 members:\n\tEmpty"));
    }

    #[rstest]
    fn json_output_lists_groups(mut offline_settings: DemoSettings) {
        offline_settings.json = true;

        let (_, text) = run_to_string(&offline_settings);
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        let groups = value
            .get("groups")
            .and_then(serde_json::Value::as_array)
            .expect("groups array");
        let first_name = groups
            .first()
            .and_then(|group| group.get("name"))
            .and_then(serde_json::Value::as_str);
        assert_eq!(groups.len(), 8);
        assert_eq!(first_name, Some("Техническая поддержка"));
        assert!(
            value
                .get("rejectedCombination")
                .is_some_and(serde_json::Value::is_string)
        );
    }

    #[rstest]
    fn invalid_url_is_reported(mut offline_settings: DemoSettings) {
        offline_settings.offline = false;
        offline_settings.male_names_url = Some("not a url".to_owned());

        let err = run(&offline_settings, &mut Vec::new()).expect_err("invalid url");

        assert!(matches!(err, DemoError::InvalidUrl { .. }));
    }

    #[rstest]
    fn unreachable_source_falls_back(mut offline_settings: DemoSettings) {
        offline_settings.offline = false;
        offline_settings.timeout_secs = Some(1);
        offline_settings.male_names_url = Some("http://127.0.0.1:9/m.txt".to_owned());
        offline_settings.female_names_url = Some("http://127.0.0.1:9/f.txt".to_owned());

        let (report, _) = run_to_string(&offline_settings);

        assert!(matches!(
            report.name_origin,
            Some(NameOrigin::Fallback { .. })
        ));
        assert_eq!(report.drawn, 20);
    }
}
