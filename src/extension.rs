//! Additional behaviors for all lengths, registered by name.

use std::collections::BTreeMap;

use crate::error::Error;
use crate::length::Length;

/// A behavior that can be applied to any [`Length`].
///
/// Implemented for every `Fn(&Length) -> Result<Length, Error>`.
pub trait Extension: Send + Sync {
    fn apply(&self, length: &Length) -> Result<Length, Error>;
}

impl<F> Extension for F
where
    F: Fn(&Length) -> Result<Length, Error> + Send + Sync,
{
    fn apply(&self, length: &Length) -> Result<Length, Error> {
        self(length)
    }
}

/// Registry of named [`Extension`]s.
#[derive(Default)]
pub struct Extensions {
    extensions: BTreeMap<String, Box<dyn Extension>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `extension` as `name`, returning the extension previously registered under
    /// that name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        extension: impl Extension + 'static,
    ) -> Option<Box<dyn Extension>> {
        let name = name.into();
        tracing::debug!(%name, "register extension");
        self.extensions.insert(name, Box::new(extension))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    /// Names of all registered extensions, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    pub fn apply(&self, name: &str, length: &Length) -> Result<Length, Error> {
        let extension = self
            .extensions
            .get(name)
            .ok_or_else(|| Error::UnknownExtension(name.to_string()))?;
        extension.apply(length)
    }
}

impl Length {
    /// Applies the extension registered as `name` in `extensions`.
    pub fn apply(&self, extensions: &Extensions, name: &str) -> Result<Length, Error> {
        extensions.apply(name, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;

    struct Negate;

    impl Extension for Negate {
        fn apply(&self, length: &Length) -> Result<Length, Error> {
            Length::new(-length.value(), length.unit())
        }
    }

    fn double(length: &Length) -> Result<Length, Error> {
        length.add(length.value())
    }

    #[test]
    fn apply_registered_extensions() {
        let mut extensions = Extensions::new();
        extensions.register("double", double);
        extensions.register("negate", Negate);
        extensions.register("in_feet", |l: &Length| l.to(Unit::Foot));

        let l = Length::new(2.5, "m").unwrap();
        assert_eq!(l.apply(&extensions, "double").unwrap().value(), 5.0);
        assert_eq!(l.apply(&extensions, "negate").unwrap().value(), -2.5);
        assert_eq!(l.apply(&extensions, "in_feet").unwrap().unit(), Unit::Foot);
        assert_eq!(l.value(), 2.5);
    }

    #[test]
    fn unknown_extension() {
        let extensions = Extensions::new();
        let l = Length::new(1.0, "m").unwrap();
        assert_eq!(
            l.apply(&extensions, "double"),
            Err(Error::UnknownExtension("double".to_string()))
        );
    }

    #[test]
    fn register_replaces_and_lists_names() {
        let mut extensions = Extensions::new();
        assert!(extensions.register("b", double).is_none());
        assert!(extensions.register("a", Negate).is_none());
        assert!(extensions.register("b", Negate).is_some());
        assert!(extensions.contains("a"));
        assert!(!extensions.contains("c"));
        assert_eq!(extensions.names().collect::<Vec<_>>(), ["a", "b"]);

        let l = Length::new(1.0, "m").unwrap();
        assert_eq!(l.apply(&extensions, "b").unwrap().value(), -1.0);
    }
}
