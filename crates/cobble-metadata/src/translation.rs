//! Translation collaborator
//!
//! Display text handed to the metadata builder is expected to be
//! pre-resolved; the only strings the core produces itself are the
//! standard-operator descriptions and sentence templates, which are
//! routed through a [`Translator`] injected at the call site. Keeping
//! the collaborator explicit keeps the core a pure function of its
//! inputs and testable without locale setup.

/// Maps a source string to its display form for the current locale.
pub trait Translator {
    /// Translate `source`, returning it unchanged when no translation exists
    fn translate(&self, source: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, source: &str) -> String {
        self(source)
    }
}

/// Identity translator, for tests and for building metadata before
/// localization data is loaded.
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(&self, source: &str) -> String {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_translation_is_identity() {
        assert_eq!(NoTranslation.translate("Value"), "Value");
    }

    #[test]
    fn test_closures_are_translators() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(upper.translate("Value"), "VALUE");
    }
}
