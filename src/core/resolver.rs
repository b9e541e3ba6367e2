//! Parameter lookup capabilities consumed by the template resolver.
//!
//! A [`Resolver`] answers one question: what is the value of this key? The
//! answer is a [`Lookup`], which keeps "the key does not exist" apart from
//! "the source could not answer". Plain maps never fail; sources backed by
//! something external (the process environment, a caller's closure) may.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::hash::BuildHasher;

use crate::error::Error;

/// Result of asking a [`Resolver`] for a key.
#[derive(Debug, Clone)]
pub enum Lookup<'a> {
    Found(Cow<'a, str>),
    NotFound,
    Failed(Error),
}

impl<'a> Lookup<'a> {
    pub fn found(value: impl Into<Cow<'a, str>>) -> Self {
        Lookup::Found(value.into())
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

impl<'a> From<Option<&'a str>> for Lookup<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(value) => Lookup::Found(Cow::Borrowed(value)),
            None => Lookup::NotFound,
        }
    }
}

/// Source of parameter values for template expansion.
///
/// `lookup` answers [`Lookup::Found`] with the raw value (which is expanded
/// again by the caller), [`Lookup::NotFound`] when the key has no value, or
/// [`Lookup::Failed`] when the backing store could not be queried. Only
/// `Failed` aborts a resolution; `NotFound` leaves `%key%` in the output.
///
/// The template engine holds no locks and calls `lookup` from whichever thread
/// runs the resolution. Implementations should be stateless or synchronize
/// any shared state themselves.
pub trait Resolver {
    fn lookup(&self, key: &str) -> Lookup<'_>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn lookup(&self, key: &str) -> Lookup<'_> {
        (**self).lookup(key)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn lookup(&self, key: &str) -> Lookup<'_> {
        (**self).lookup(key)
    }
}

impl<S: BuildHasher> Resolver for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Lookup<'_> {
        self.get(key).map(String::as_str).into()
    }
}

impl Resolver for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Lookup<'_> {
        self.get(key).map(String::as_str).into()
    }
}

/// Adapts a closure into a [`Resolver`].
///
/// ```
/// use paramline::resolver::{FnResolver, Lookup};
/// use paramline::template::resolve;
///
/// let upper = FnResolver::new(|key: &str| Lookup::found(key.to_uppercase()));
/// assert_eq!(resolve("%abc%", &upper).unwrap(), "ABC");
/// ```
pub struct FnResolver<F> {
    lookup: F,
}

impl<F> FnResolver<F>
where
    F: Fn(&str) -> Lookup<'static>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<F> Resolver for FnResolver<F>
where
    F: Fn(&str) -> Lookup<'static>,
{
    fn lookup(&self, key: &str) -> Lookup<'_> {
        (self.lookup)(key)
    }
}

/// Looks keys up in the process environment.
///
/// A variable that is set but not valid Unicode is reported as a failure
/// rather than treated as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvResolver;

impl Resolver for EnvResolver {
    fn lookup(&self, key: &str) -> Lookup<'_> {
        // Names the platform cannot represent can never be set.
        if key.is_empty() || key.contains(['=', '\0']) {
            return Lookup::NotFound;
        }

        match env::var(key) {
            Ok(value) => Lookup::Found(Cow::Owned(value)),
            Err(VarError::NotPresent) => Lookup::NotFound,
            Err(VarError::NotUnicode(_)) => Lookup::Failed(Error::template_resolution_failed(
                key,
                "environment variable is not valid unicode",
            )),
        }
    }
}

/// Consults `primary` first and `fallback` only for keys `primary` lacks.
///
/// A failure from either layer is returned as-is; it does not fall through.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A: Resolver, B: Resolver> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: Resolver, B: Resolver> Resolver for Layered<A, B> {
    fn lookup(&self, key: &str) -> Lookup<'_> {
        match self.primary.lookup(key) {
            Lookup::NotFound => self.fallback.lookup(key),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn hash_map_lookup_borrows_value() {
        let vars = map(&[("name", "demo")]);

        match vars.lookup("name") {
            Lookup::Found(Cow::Borrowed(value)) => assert_eq!(value, "demo"),
            other => panic!("expected borrowed value, got {:?}", other),
        }
        assert!(matches!(vars.lookup("other"), Lookup::NotFound));
    }

    #[test]
    fn btree_map_lookup() {
        let vars: BTreeMap<String, String> =
            [("a".to_string(), "1".to_string())].into_iter().collect();

        assert!(vars.lookup("a").is_found());
        assert!(!vars.lookup("b").is_found());
    }

    #[test]
    fn fn_resolver_can_fail() {
        let resolver = FnResolver::new(|key: &str| {
            if key == "broken" {
                Lookup::Failed(Error::template_resolution_failed(key, "backend offline"))
            } else {
                Lookup::NotFound
            }
        });

        match resolver.lookup("broken") {
            Lookup::Failed(err) => assert_eq!(err.code, ErrorCode::TemplateResolutionFailed),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(matches!(resolver.lookup("fine"), Lookup::NotFound));
    }

    #[test]
    fn env_resolver_reads_process_environment() {
        env::set_var("PARAMLINE_TEST_ENV_RESOLVER", "from-env");

        match EnvResolver.lookup("PARAMLINE_TEST_ENV_RESOLVER") {
            Lookup::Found(value) => assert_eq!(value, "from-env"),
            other => panic!("expected value, got {:?}", other),
        }
        assert!(matches!(
            EnvResolver.lookup("PARAMLINE_TEST_ENV_RESOLVER_UNSET"),
            Lookup::NotFound
        ));
    }

    #[test]
    fn env_resolver_treats_unrepresentable_names_as_missing() {
        assert!(matches!(EnvResolver.lookup("A=B"), Lookup::NotFound));
        assert!(matches!(EnvResolver.lookup(""), Lookup::NotFound));
    }

    #[test]
    fn layered_prefers_primary() {
        let layered = Layered::new(map(&[("a", "primary")]), map(&[("a", "fallback"), ("b", "b")]));

        match layered.lookup("a") {
            Lookup::Found(value) => assert_eq!(value, "primary"),
            other => panic!("unexpected {:?}", other),
        }
        match layered.lookup("b") {
            Lookup::Found(value) => assert_eq!(value, "b"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(layered.lookup("c"), Lookup::NotFound));
    }

    #[test]
    fn layered_does_not_mask_primary_failure() {
        let failing = FnResolver::new(|key: &str| {
            Lookup::Failed(Error::template_resolution_failed(key, "down"))
        });
        let layered = Layered::new(failing, map(&[("a", "fallback")]));

        assert!(matches!(layered.lookup("a"), Lookup::Failed(_)));
    }

    #[test]
    fn resolvers_can_be_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let layered = Layered::new(map(&[("a", "1")]), EnvResolver);
        assert_send_sync(&layered);
        assert_send_sync(&FnResolver::new(|_: &str| Lookup::NotFound));

        let found = std::thread::scope(|scope| {
            scope
                .spawn(|| layered.lookup("a").is_found())
                .join()
                .unwrap()
        });
        assert!(found);
    }
}
