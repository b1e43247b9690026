//! Fallback transforms for move tokens the rules reject as written.
//!
//! A token is tried as written first, then through each transform in
//! [`Fallback::ORDER`]. Transforms that produce a candidate identical to an
//! earlier one are skipped, so the rules never see the same text twice.

use std::borrow::Cow;
use std::fmt::{self, Display};

/// One way of rewriting a move token before handing it to the rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Fallback {
    /// The token as written.
    Exact,
    Lowercase,
    Uppercase,
    /// Trailing check `+` and mate `#` markers removed.
    StripAnnotations,
}

impl Fallback {
    /// The order candidates are tried in. The first success wins.
    pub const ORDER: [Fallback; 4] = [
        Fallback::Exact,
        Fallback::Lowercase,
        Fallback::Uppercase,
        Fallback::StripAnnotations,
    ];

    pub fn transform<'a>(&self, token: &'a str) -> Cow<'a, str> {
        match self {
            Fallback::Exact => Cow::Borrowed(token),
            Fallback::Lowercase => Cow::Owned(token.to_lowercase()),
            Fallback::Uppercase => Cow::Owned(token.to_uppercase()),
            Fallback::StripAnnotations => {
                Cow::Borrowed(token.trim_end_matches(|ch| ch == '+' || ch == '#'))
            }
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Fallback::Exact => "exact",
            Fallback::Lowercase => "lowercase",
            Fallback::Uppercase => "uppercase",
            Fallback::StripAnnotations => "strip annotations",
        }
    }
}

impl Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tries `attempt` on each candidate of token in [`Fallback::ORDER`].
/// Returns the transform that succeeded with its value, or None if all failed.
pub fn first_success<T, E, F>(token: &str, mut attempt: F) -> Option<(Fallback, T)>
where
    F: FnMut(&str) -> Result<T, E>,
{
    let mut tried: Vec<Cow<str>> = Vec::with_capacity(Fallback::ORDER.len());
    for fallback in Fallback::ORDER {
        let candidate = fallback.transform(token);
        if tried.contains(&candidate) {
            continue;
        }
        if let Ok(value) = attempt(candidate.as_ref()) {
            return Some((fallback, value));
        }
        tried.push(candidate);
    }
    None
}
