//! Query-string access for the page address the app was loaded from.

use url::Url;

/// Errors that can occur when reading a page address.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("invalid page address '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// Decoded query parameters, in the order they appear in the address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parameters from an absolute page address.
    pub fn from_url(url: &Url) -> Self {
        Self {
            pairs: url.query_pairs().into_owned().collect(),
        }
    }

    /// Parameters from a bare search string, with or without the leading `?`.
    ///
    /// A trailing `#fragment` is not part of the query and is dropped, as it
    /// is for absolute URLs.
    pub fn parse(search: &str) -> Self {
        let search = search.trim();
        let search = search.strip_prefix('?').unwrap_or(search);
        let search = search.split_once('#').map_or(search, |(query, _)| query);
        Self {
            pairs: url::form_urlencoded::parse(search.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Parameters from whatever the caller was given as the page address.
    ///
    /// Empty input and input starting with `?` are search strings; anything
    /// else must be an absolute URL.
    pub fn from_address(address: &str) -> Result<Self, QueryError> {
        let address = address.trim();
        if address.is_empty() || address.starts_with('?') {
            return Ok(Self::parse(address));
        }
        let url = Url::parse(address).map_err(|source| QueryError::InvalidUrl {
            input: address.to_string(),
            source,
        })?;
        Ok(Self::from_url(&url))
    }

    /// First value of `name`; `None` when the parameter is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
