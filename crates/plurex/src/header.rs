//! The PO `Plural-Forms` header.
//!
//! A catalog declares its plural rule in the header entry:
//!
//! ```text
//! Plural-Forms: nplurals=2; plural=n != 1;
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use winnow::ascii::digit1;
use winnow::combinator::{delimited, opt, preceded};
use winnow::prelude::*;
use winnow::token::{rest, take_while};

use crate::commons;
use crate::interpreter::{Error, HeaderError, Plural};

/// A parsed `Plural-Forms` header: the number of forms and the rule that
/// picks one.
///
/// Serializes as its header text.
///
/// # Example
///
/// ```
/// use plurex::PluralForms;
///
/// let forms: PluralForms = "Plural-Forms: nplurals=2; plural=n>1;".parse().unwrap();
/// assert_eq!(forms.nplurals(), 2);
/// assert_eq!(forms.index(0).unwrap(), 0);
/// assert_eq!(forms.index(2).unwrap(), 1);
/// assert_eq!(forms.to_string(), "nplurals=2; plural=n > 1;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PluralForms {
    nplurals: usize,
    plural: Plural,
}

impl PluralForms {
    /// Pair a rule with its number of forms.
    pub fn new(nplurals: usize, plural: Plural) -> Result<Self, HeaderError> {
        if nplurals == 0 {
            return Err(HeaderError::InvalidPluralCount {
                value: nplurals.to_string(),
            });
        }
        Ok(PluralForms { nplurals, plural })
    }

    /// Parse a header value such as `nplurals=3; plural=n%10==1 ? 0 : 1;`.
    ///
    /// The `Plural-Forms:` prefix is optional.
    pub fn parse(header: &str) -> Result<Self, HeaderError> {
        let mut input = header.trim();
        let (count, expression) = header_fields(&mut input).map_err(|_| HeaderError::Malformed {
            header: header.to_string(),
        })?;
        let nplurals = count
            .parse::<usize>()
            .map_err(|_| HeaderError::InvalidPluralCount {
                value: count.to_string(),
            })?;
        PluralForms::new(nplurals, Plural::compile(expression)?)
    }

    /// Build the header for a language from the common rules.
    pub fn for_language(language: &str) -> Result<Self, HeaderError> {
        let rule = commons::for_language(language).ok_or_else(|| HeaderError::UnknownLanguage {
            language: language.to_string(),
        })?;
        PluralForms::new(rule.nplurals, Plural::compile(rule.source)?)
    }

    pub fn nplurals(&self) -> usize {
        self.nplurals
    }

    pub fn plural(&self) -> &Plural {
        &self.plural
    }

    /// Select the form index for `n`, checking it against `nplurals`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Eval`] if evaluation fails and
    /// [`Error::IndexOutOfRange`] if the rule picks an index outside
    /// `0..nplurals`.
    pub fn index(&self, n: i64) -> Result<usize, Error> {
        let index = self.plural.eval(n)?;
        usize::try_from(index)
            .ok()
            .filter(|i| *i < self.nplurals)
            .ok_or(Error::IndexOutOfRange {
                index,
                nplurals: self.nplurals,
            })
    }
}

impl FromStr for PluralForms {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralForms::parse(s)
    }
}

impl Display for PluralForms {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "nplurals={}; plural={};", self.nplurals, self.plural)
    }
}

impl From<PluralForms> for String {
    fn from(forms: PluralForms) -> Self {
        forms.to_string()
    }
}

impl TryFrom<String> for PluralForms {
    type Error = HeaderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PluralForms::parse(&value)
    }
}

/// Split a header into its `nplurals` digits and `plural` expression.
fn header_fields<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    preceded(
        opt(("Plural-Forms:", blanks)),
        (
            delimited(
                ("nplurals", blanks, '=', blanks),
                digit1,
                (blanks, ';', blanks),
            ),
            preceded(("plural", blanks, '=', blanks), rest),
        ),
    )
    .parse_next(input)
}

fn blanks(input: &mut &str) -> ModalResult<()> {
    take_while(0.., [' ', '\t']).void().parse_next(input)
}
