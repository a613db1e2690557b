//! Evaluator owning a compile cache and the common-rule shortcut.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bon::Builder;
use plurex_syntax::CompileError;
use tracing::{debug, trace};

use crate::commons;
use crate::interpreter::{Error, Plural};

/// Evaluates plural expressions given as source text.
///
/// Each call normalizes the source by removing spaces and tabs, then:
/// 1. if the normalized text is a known common rule, runs its precompiled
///    function;
/// 2. otherwise reuses the compiled tree cached under the normalized text,
///    compiling and caching it on a miss.
///
/// Only successful compiles are cached; a malformed expression is lexed and
/// parsed again, and fails the same way, on every call. Entries are never
/// evicted: the cache grows with the number of distinct expressions seen
/// for as long as the evaluator lives. Use [`PluralEvaluator::clear_cache`]
/// to drop them explicitly.
///
/// The cache sits behind a `RwLock`. Two threads missing on the same source
/// may both compile it; the first insert wins and both get equal trees.
///
/// # Example
///
/// ```
/// use plurex::PluralEvaluator;
///
/// let evaluator = PluralEvaluator::builder().use_commons(false).build();
/// assert_eq!(evaluator.eval("n != 1", 2), Ok(1));
/// assert_eq!(evaluator.cache_len(), 1);
/// ```
#[derive(Debug, Builder)]
pub struct PluralEvaluator {
    /// Whether to short-circuit known common rules to their precompiled
    /// functions.
    #[builder(default = true)]
    use_commons: bool,

    /// Compiled trees keyed by normalized source.
    #[builder(skip)]
    cache: RwLock<HashMap<String, Plural>>,
}

impl Default for PluralEvaluator {
    fn default() -> Self {
        PluralEvaluator::builder().build()
    }
}

impl PluralEvaluator {
    /// Create an evaluator with the common-rule shortcut enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the plural index for `n` using the expression in `source`.
    ///
    /// # Errors
    ///
    /// Returns a lex or parse error if `source` does not compile, or an
    /// evaluation error such as division by zero.
    pub fn eval(&self, source: &str, n: i64) -> Result<i64, Error> {
        let key = normalize(source);
        let common = self.use_commons.then(|| commons::lookup(&key)).flatten();
        if let Some(rule) = common {
            trace!(source = %key, "common rule hit");
            return Ok((rule.eval)(n)?);
        }
        let plural = self.compile_normalized(key)?;
        Ok(plural.eval(n)?)
    }

    /// Compile `source`, reusing or populating the cache.
    pub fn compile(&self, source: &str) -> Result<Plural, CompileError> {
        self.compile_normalized(normalize(source))
    }

    /// Whether common rules bypass the general pipeline.
    pub fn uses_commons(&self) -> bool {
        self.use_commons
    }

    /// Number of cached expressions.
    pub fn cache_len(&self) -> usize {
        self.read_cache().len()
    }

    /// Drop every cached expression.
    pub fn clear_cache(&self) {
        self.write_cache().clear();
    }

    fn compile_normalized(&self, key: String) -> Result<Plural, CompileError> {
        let cached = self.read_cache().get(&key).cloned();
        if let Some(plural) = cached {
            trace!(source = %key, "compile cache hit");
            return Ok(plural);
        }

        debug!(source = %key, "compiling plural expression");
        let plural = Plural::compile(&key).inspect_err(|error| {
            debug!(source = %key, %error, "plural expression failed to compile");
        })?;
        Ok(self.write_cache().entry(key).or_insert(plural).clone())
    }

    // Cached trees are immutable, so a poisoned lock still holds valid data.
    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, Plural>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, Plural>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Strip spaces and tabs, producing the cache and common-rule key.
pub fn normalize(source: &str) -> String {
    source.chars().filter(|c| !matches!(c, ' ' | '\t')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_removes_spaces_and_tabs_only() {
        assert_eq!(normalize(" n != 1 "), "n!=1");
        assert_eq!(normalize("n\t>\t1"), "n>1");
        assert_eq!(normalize("n\n"), "n\n");
    }

    #[test]
    fn first_insert_wins() {
        let evaluator = PluralEvaluator::new();
        let first = evaluator.compile("n % 7").unwrap();
        let second = evaluator.compile(" n%7 ").unwrap();
        assert_eq!(first, second);
        assert_eq!(evaluator.cache_len(), 1);
    }
}
