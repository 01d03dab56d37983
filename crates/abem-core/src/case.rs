//! Modifier-name normalization.
//!
//! Modifier keys arrive in whatever casing the caller's state uses:
//! `isActive`, `IsActive`, `is-active`. They are folded into one camel-like
//! suffix:
//!
//! 1. a single leading `-` and every run of two or more `-` are removed;
//! 2. a leading `Xy` (capital followed by lowercase) becomes `xy`, while
//!    acronym prefixes such as `DOM` stay as written;
//! 3. each remaining `-x` becomes `X`.
//!
//! Only ASCII letters take part in the case rules.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn dash_runs_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-{2,}|^-").expect("dash-run regex must compile"))
}

fn leading_capital_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][a-z]").expect("leading-capital regex must compile"))
}

fn inner_dash_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-([A-Za-z])").expect("inner-dash regex must compile"))
}

/// Normalize a modifier key or list entry into its class suffix.
///
/// ```
/// use abem_core::to_camel_case;
///
/// assert_eq!(to_camel_case("FooBar"), "fooBar");
/// assert_eq!(to_camel_case("BAZ-Qux"), "BAZQux");
/// assert_eq!(to_camel_case("-DOM-Content-Loaded"), "DOMContentLoaded");
/// ```
pub fn to_camel_case(token: &str) -> String {
    let collapsed = dash_runs_re().replace_all(token, "");
    let lowered = leading_capital_re().replace(&collapsed, |caps: &Captures<'_>| {
        caps[0].to_ascii_lowercase()
    });
    inner_dash_re()
        .replace_all(&lowered, |caps: &Captures<'_>| caps[1].to_ascii_uppercase())
        .into_owned()
}
