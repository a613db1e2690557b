//! Precompiled plural rules for common languages.
//!
//! Each rule is the standard gettext `plural=` expression for a family of
//! languages, compiled to a native function by `plural_fn!` from the same
//! source string that is stored beside it. The shortcut therefore cannot
//! drift from the general evaluator; `tests/commons.rs` checks both paths
//! agree anyway.
//!
//! Rule sources are stored in canonical form (see [`crate::Plural`]'s
//! `Display`) and looked up by their whitespace-free normalization.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::interpreter::{EvalError, normalize};
use crate::plural_fn;

/// A precompiled plural rule.
#[derive(Debug)]
pub struct CommonRule {
    /// Language codes using this rule (e.g., "en", "pt_BR").
    pub languages: &'static [&'static str],
    /// Number of plural forms the rule selects between.
    pub nplurals: usize,
    /// Canonical expression source.
    pub source: &'static str,
    /// Native evaluation of `source`.
    pub eval: fn(i64) -> Result<i64, EvalError>,
}

macro_rules! common_rule {
    ($nplurals:literal, [$($language:literal),+ $(,)?], $source:tt) => {
        CommonRule {
            languages: &[$($language),+],
            nplurals: $nplurals,
            source: $source,
            eval: plural_fn!($source),
        }
    };
}

/// Every known common rule.
pub static COMMON_RULES: &[CommonRule] = &[
    // One form
    common_rule!(1, ["ja", "ko", "vi", "zh", "th", "id", "ms"], "0"),
    // Two forms, singular for one only
    common_rule!(
        2,
        [
            "en", "de", "nl", "sv", "da", "no", "nb", "nn", "fo", "es", "pt", "it", "bg", "el",
            "fi", "et", "he", "eo", "hu", "tr", "ca"
        ],
        "n != 1"
    ),
    // Two forms, singular for zero and one
    common_rule!(2, ["fr", "pt_BR"], "n > 1"),
    // Latvian
    common_rule!(
        3,
        ["lv"],
        "n % 10 == 1 && n % 100 != 11 ? 0 : n != 0 ? 1 : 2"
    ),
    // Irish, Northern Sami
    common_rule!(3, ["ga", "se"], "n == 1 ? 0 : n == 2 ? 1 : 2"),
    // Romanian
    common_rule!(
        3,
        ["ro"],
        "n == 1 ? 0 : ( n == 0 || ( n % 100 > 0 && n % 100 < 20 ) ) ? 1 : 2"
    ),
    // Lithuanian
    common_rule!(
        3,
        ["lt"],
        "n % 10 == 1 && n % 100 != 11 ? 0 : n % 10 >= 2 && ( n % 100 < 10 || n % 100 >= 20 ) ? 1 : 2"
    ),
    // Russian, Ukrainian, Belarusian, Serbian, Croatian, Bosnian
    common_rule!(
        3,
        ["ru", "uk", "be", "sr", "hr", "bs"],
        "n % 10 == 1 && n % 100 != 11 ? 0 : n % 10 >= 2 && n % 10 <= 4 && ( n % 100 < 10 || n % 100 >= 20 ) ? 1 : 2"
    ),
    // Czech, Slovak
    common_rule!(
        3,
        ["cs", "sk"],
        "( n == 1 ) ? 0 : ( n >= 2 && n <= 4 ) ? 1 : 2"
    ),
    // Polish
    common_rule!(
        3,
        ["pl"],
        "n == 1 ? 0 : n % 10 >= 2 && n % 10 <= 4 && ( n % 100 < 10 || n % 100 >= 20 ) ? 1 : 2"
    ),
    // Slovenian
    common_rule!(
        4,
        ["sl"],
        "n % 100 == 1 ? 0 : n % 100 == 2 ? 1 : n % 100 == 3 || n % 100 == 4 ? 2 : 3"
    ),
    // Arabic
    common_rule!(
        6,
        ["ar"],
        "n == 0 ? 0 : n == 1 ? 1 : n == 2 ? 2 : n % 100 >= 3 && n % 100 <= 10 ? 3 : n % 100 >= 11 ? 4 : 5"
    ),
];

static BY_SOURCE: LazyLock<HashMap<String, &'static CommonRule>> = LazyLock::new(|| {
    COMMON_RULES
        .iter()
        .map(|rule| (normalize(rule.source), rule))
        .collect()
});

/// Find the common rule whose normalized source is exactly `normalized`.
pub fn lookup(normalized: &str) -> Option<&'static CommonRule> {
    BY_SOURCE.get(normalized).copied()
}

/// Find the common rule for a language code.
///
/// Tries the exact code first, then its base language, so `pt_BR` finds the
/// Brazilian rule while `de_AT` and `de-CH` fall back to `de`.
///
/// # Example
///
/// ```
/// use plurex::commons::for_language;
///
/// assert_eq!(for_language("pt_BR").unwrap().source, "n > 1");
/// assert_eq!(for_language("pt").unwrap().source, "n != 1");
/// assert_eq!(for_language("ru_RU").unwrap().nplurals, 3);
/// assert!(for_language("xx").is_none());
/// ```
pub fn for_language(code: &str) -> Option<&'static CommonRule> {
    let normalized = code.replace('-', "_");
    find_language(&normalized).or_else(|| {
        let (base, _) = normalized.split_once('_')?;
        find_language(base)
    })
}

fn find_language(code: &str) -> Option<&'static CommonRule> {
    COMMON_RULES
        .iter()
        .find(|rule| rule.languages.contains(&code))
}
