//! Reqwest-backed name source.
//!
//! This adapter owns transport details only: the blocking client, request
//! timeout, status mapping and splitting the plain-text bodies into names.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::debug;

use super::{NameLists, NameSource};
use crate::error::NameSourceError;

/// Default location of the male name list.
pub const DEFAULT_MALE_NAMES_URL: &str = "https://raw.githubusercontent.com/linuxforse/random_russian_and_ukraine_name_surname/master/imena_m_ru.txt";

/// Default location of the female name list.
pub const DEFAULT_FEMALE_NAMES_URL: &str = "https://raw.githubusercontent.com/linuxforse/random_russian_and_ukraine_name_surname/master/imena_f_ru.txt";

const USER_AGENT: &str = "student-groups/0.1";

/// Name source that downloads two whitespace-separated text files.
#[derive(Debug, Clone)]
pub struct HttpNameSource {
    client: Client,
    male_url: Url,
    female_url: Url,
}

impl HttpNameSource {
    /// Build a source using a blocking client with an explicit timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NameSourceError::Client`] when the client cannot be built.
    pub fn new(male_url: Url, female_url: Url, timeout: Duration) -> Result<Self, NameSourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| NameSourceError::Client {
                message: error.to_string(),
            })?;
        Ok(Self {
            client,
            male_url,
            female_url,
        })
    }

    /// Build a source pointing at [`DEFAULT_MALE_NAMES_URL`] and
    /// [`DEFAULT_FEMALE_NAMES_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`NameSourceError::Client`] when the client cannot be built.
    pub fn with_default_urls(timeout: Duration) -> Result<Self, NameSourceError> {
        Self::new(
            parse_url(DEFAULT_MALE_NAMES_URL)?,
            parse_url(DEFAULT_FEMALE_NAMES_URL)?,
            timeout,
        )
    }

    /// Returns the male list URL.
    #[must_use]
    pub const fn male_url(&self) -> &Url {
        &self.male_url
    }

    /// Returns the female list URL.
    #[must_use]
    pub const fn female_url(&self) -> &Url {
        &self.female_url
    }

    fn fetch_list(&self, url: &Url) -> Result<Vec<String>, NameSourceError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|error| map_transport_error(url, &error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NameSourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|error| map_transport_error(url, &error))?;
        let names = split_names(&body);
        debug!(url = %url, count = names.len(), "fetched name list");
        Ok(names)
    }
}

impl NameSource for HttpNameSource {
    fn fetch(&self) -> Result<NameLists, NameSourceError> {
        let male = self.fetch_list(&self.male_url)?;
        let female = self.fetch_list(&self.female_url)?;
        Ok(NameLists::from_raw(male, female))
    }
}

fn parse_url(raw: &str) -> Result<Url, NameSourceError> {
    Url::parse(raw).map_err(|error| NameSourceError::Client {
        message: format!("invalid URL '{raw}': {error}"),
    })
}

fn map_transport_error(url: &Url, error: &reqwest::Error) -> NameSourceError {
    NameSourceError::Transport {
        url: url.to_string(),
        message: error.to_string(),
    }
}

fn split_names(body: &str) -> Vec<String> {
    body.split_whitespace().map(str::to_owned).collect()
}
