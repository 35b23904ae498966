//! SCM connection string parsing.
//!
//! A connection string has the form
//! `scm:<provider><delimiter><provider_specific_part>`, where `<delimiter>`
//! is either `:` or `|`. Providers and provider-specific parts may contain
//! the *other* delimiter character later in the string, so the scan stops at
//! the first occurrence of either.

use crate::error::MetadataError;
use std::fmt;

/// Required literal prefix of every connection string.
pub const SCM_PREFIX: &str = "scm:";

const CONNECTION_FORMAT: &str = "scm:<provider><delimiter><provider_specific_part>";

/// The character separating the provider from the provider-specific part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Colon,
    Pipe,
}

impl Delimiter {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Colon => ':',
            Self::Pipe => '|',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A parsed SCM connection string.
///
/// Immutable value object; `Display` reconstructs the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScmConnection {
    provider: String,
    delimiter: Delimiter,
    specific_part: String,
}

impl ScmConnection {
    /// Parse a raw connection string.
    ///
    /// The delimiter is whichever of `:` and `|` occurs at the smaller index
    /// strictly after the `scm:` prefix; if only one of the two is present,
    /// that one is used. The provider may be empty and is not validated
    /// further at this layer.
    pub fn parse(raw: &str) -> Result<Self, MetadataError> {
        let Some(rest) = raw.strip_prefix(SCM_PREFIX) else {
            return Err(MetadataError::MalformedConnectionString(format!(
                "does not start with \"{SCM_PREFIX}\": \"{raw}\""
            )));
        };

        let index = match (rest.find(':'), rest.find('|')) {
            (Some(colon), Some(pipe)) => colon.min(pipe),
            (Some(colon), None) => colon,
            (None, Some(pipe)) => pipe,
            (None, None) => {
                return Err(MetadataError::MalformedConnectionString(format!(
                    "does not adhere to format \"{CONNECTION_FORMAT}\": \"{raw}\""
                )));
            }
        };

        let (provider, remainder) = rest.split_at(index);
        let delimiter = if remainder.starts_with('|') {
            Delimiter::Pipe
        } else {
            Delimiter::Colon
        };
        let specific_part = remainder.get(1..).unwrap_or_default();

        Ok(Self {
            provider: provider.to_string(),
            delimiter,
            specific_part: specific_part.to_string(),
        })
    }

    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// The provider-specific part, typically a remote URL or local path.
    #[must_use]
    pub fn specific_part(&self) -> &str {
        &self.specific_part
    }
}

impl fmt::Display for ScmConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SCM_PREFIX}{}{}{}",
            self.provider, self.delimiter, self.specific_part
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> Vec<String> {
        let mut out = Vec::new();
        for suffix in ["", ".git", ".git/"] {
            out.push(format!("git://git.gryphon.zone/path/to/repository{suffix}"));
            out.push(format!("http://git.gryphon.zone/path/to/repository{suffix}"));
            out.push(format!("https://git.gryphon.zone/path/to/repository{suffix}"));
            out.push(format!("ssh://git@git.gryphon.zone/path/to/repository{suffix}"));
            out.push(format!("git://git.gryphon.zone:9418/path/to/repository{suffix}"));
            out.push(format!("ssh://git@git.gryphon.zone:22/path/to/repository{suffix}"));
            out.push(format!("file://localhost/path/to/repository{suffix}"));
            out.push(format!("git.gryphon.zone/path/to/repository{suffix}"));
            out.push(format!("git@git.gryphon.zone:22/path/to/repository{suffix}"));
        }
        out
    }

    #[test]
    fn test_parse_round_trips_with_colon_delimiter() {
        for url in urls() {
            let raw = format!("scm:git:{url}");
            let parsed = ScmConnection::parse(&raw).unwrap();
            assert_eq!(parsed.provider(), "git");
            assert_eq!(parsed.delimiter(), Delimiter::Colon);
            assert_eq!(parsed.specific_part(), url);
            assert_eq!(parsed.to_string(), raw);
        }
    }

    #[test]
    fn test_parse_round_trips_with_pipe_delimiter() {
        for url in urls() {
            let raw = format!("scm:git|{url}");
            let parsed = ScmConnection::parse(&raw).unwrap();
            assert_eq!(parsed.provider(), "git");
            assert_eq!(parsed.delimiter(), Delimiter::Pipe);
            assert_eq!(parsed.specific_part(), url);
            assert_eq!(parsed.to_string(), raw);
        }
    }

    #[test]
    fn test_earliest_delimiter_wins_when_pipe_comes_first() {
        // The specific part contains a colon, but the pipe occurs earlier.
        let parsed = ScmConnection::parse("scm:git|https://example.com/repo").unwrap();
        assert_eq!(parsed.provider(), "git");
        assert_eq!(parsed.delimiter(), Delimiter::Pipe);
        assert_eq!(parsed.specific_part(), "https://example.com/repo");
    }

    #[test]
    fn test_earliest_delimiter_wins_when_colon_comes_first() {
        // The specific part contains a pipe, but the colon occurs earlier.
        let parsed = ScmConnection::parse("scm:git:with|pipe/repo").unwrap();
        assert_eq!(parsed.provider(), "git");
        assert_eq!(parsed.delimiter(), Delimiter::Colon);
        assert_eq!(parsed.specific_part(), "with|pipe/repo");
    }

    #[test]
    fn test_provider_may_be_empty() {
        let parsed = ScmConnection::parse("scm::url").unwrap();
        assert_eq!(parsed.provider(), "");
        assert_eq!(parsed.delimiter(), Delimiter::Colon);
        assert_eq!(parsed.specific_part(), "url");
    }

    #[test]
    fn test_specific_part_may_be_empty() {
        let parsed = ScmConnection::parse("scm:git:").unwrap();
        assert_eq!(parsed.provider(), "git");
        assert_eq!(parsed.specific_part(), "");
        assert_eq!(parsed.to_string(), "scm:git:");
    }

    #[test]
    fn test_missing_prefix_is_rejected() {
        let err = ScmConnection::parse("git:https://example.com/repo").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("does not start with"), "{message}");
        assert!(message.contains("git:https://example.com/repo"), "{message}");
    }

    #[test]
    fn test_missing_delimiter_is_rejected() {
        let err = ScmConnection::parse("scm:gitnodelimiter").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("does not adhere to format"), "{message}");
        assert!(
            message.contains("scm:<provider><delimiter><provider_specific_part>"),
            "{message}"
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(ScmConnection::parse("").is_err());
    }
}
