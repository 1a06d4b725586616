use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Correlation key shared by every participant of one group call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(String);

impl GroupId {
    /// Synthesize a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Adopt an identifier supplied from outside; empty strings are rejected
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the group id from the first `param` in the query of `href`
pub fn group_id_from_href(href: &str, param: &str) -> Option<GroupId> {
    let url = Url::parse(href).ok()?;
    let (_, value) = url.query_pairs().find(|(key, _)| key == param)?;
    GroupId::parse(&value)
}

/// `href` with `param` set to `id`, replacing any existing occurrence
pub fn href_with_group_id(href: &str, param: &str, id: &GroupId) -> String {
    let Ok(mut url) = Url::parse(href) else {
        return format!("{}?{}={}", href, param, id);
    };

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(param, id.as_str());

    url.to_string()
}

/// `href` with everything from the first `?` removed
pub fn href_without_query(href: &str) -> &str {
    href.split_once('?').map(|(base, _)| base).unwrap_or(href)
}
