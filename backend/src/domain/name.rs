//! Name normalisation.
//!
//! Raw names arrive as arbitrary user text. [`NormalizedName`] keeps only
//! ASCII letters, digits and single spaces, lowercased, and [`NameParts`]
//! splits it into the first and last tokens the variation builder uses.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

static DISALLOWED_RE: OnceLock<Regex> = OnceLock::new();

fn disallowed_regex() -> &'static Regex {
    DISALLOWED_RE.get_or_init(|| {
        Regex::new(r"[^A-Za-z0-9\s]")
            .unwrap_or_else(|error| panic!("name filter regex failed to compile: {error}"))
    })
}

/// Lowercase projection of a raw name containing only `[a-z0-9 ]`.
///
/// ## Invariants
/// - Non-empty.
/// - Tokens are separated by exactly one space, with no leading or trailing
///   space, so normalising an already normalised value is a no-op.
///
/// # Examples
/// ```
/// use gmail_variants::domain::NormalizedName;
///
/// let name = NormalizedName::parse("  John-Paul   O'Neil! ").expect("usable name");
/// assert_eq!(name.as_ref(), "johnpaul oneil");
/// assert!(NormalizedName::parse("!!!").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Normalise raw input, returning `None` when nothing usable remains.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let stripped = disallowed_regex().replace_all(raw, "");
        let joined = stripped
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            None
        } else {
            Some(Self(joined))
        }
    }

    /// Split into first and last name tokens.
    pub fn parts(&self) -> NameParts<'_> {
        let mut tokens = self.0.split(' ');
        // The invariant guarantees at least one token.
        let first = tokens.next().unwrap_or_default();
        let last = tokens.last();
        NameParts { first, last }
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// First and last tokens of a [`NormalizedName`].
///
/// Middle tokens are ignored. A single-token name has no last name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameParts<'a> {
    /// First token.
    pub first: &'a str,
    /// Final token, present only when the name has two or more tokens.
    pub last: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("John Doe", "john doe")]
    #[case("Al!!", "al")]
    #[case("  MARY\tjane\n smith ", "mary jane smith")]
    #[case("Zoë Ångström", "zo ngstrm")]
    #[case("R2 D2", "r2 d2")]
    fn normalises_to_lowercase_alphanumerics(#[case] raw: &str, #[case] expected: &str) {
        let name = NormalizedName::parse(raw).expect("usable name");
        assert_eq!(name.as_ref(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("!!! ???")]
    #[case("\u{00e9}\u{00e8}")]
    fn unusable_names_yield_none(#[case] raw: &str) {
        assert!(NormalizedName::parse(raw).is_none());
    }

    #[rstest]
    #[case("John Doe")]
    #[case(" a--b  c ")]
    #[case("Ünïcode Nâme 42")]
    fn normalisation_is_idempotent(#[case] raw: &str) {
        let once = NormalizedName::parse(raw).expect("usable name");
        let twice = NormalizedName::parse(once.as_ref()).expect("still usable");
        assert_eq!(once, twice);
    }

    #[test]
    fn normalised_names_only_contain_allowed_characters() {
        let name = NormalizedName::parse("Ça va? Très_bien-42 !").expect("usable name");
        assert!(
            name.as_ref()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
        );
    }

    #[rstest]
    #[case("john", "john", None)]
    #[case("john doe", "john", Some("doe"))]
    #[case("john quincy adams", "john", Some("adams"))]
    fn parts_pick_first_and_last_tokens(
        #[case] raw: &str,
        #[case] first: &str,
        #[case] last: Option<&str>,
    ) {
        let name = NormalizedName::parse(raw).expect("usable name");
        assert_eq!(name.parts(), NameParts { first, last });
    }
}
