//! Backend lookup by language tag.

use eyre::{Result, bail};
use indexmap::IndexMap;

use crate::{Backend, GeneratorOptions};

/// Builds a backend from its parsed options.
///
/// Factories reject options they don't understand.
pub type BackendFactory = fn(&GeneratorOptions) -> Result<Box<dyn Backend>>;

/// A registered backend.
#[derive(Clone)]
pub struct RegistryEntry {
    pub language: &'static str,
    pub description: &'static str,
    factory: BackendFactory,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("language", &self.language)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Known backends, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<&'static str, RegistryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend. A later registration for the same language
    /// replaces the earlier one.
    pub fn register(
        &mut self,
        language: &'static str,
        description: &'static str,
        factory: BackendFactory,
    ) -> &mut Self {
        self.entries.insert(
            language,
            RegistryEntry {
                language,
                description,
                factory,
            },
        );
        self
    }

    pub fn get(&self, language: &str) -> Option<&RegistryEntry> {
        self.entries.get(language)
    }

    /// Registered language tags.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Construct the backend selected by `options`.
    ///
    /// # Errors
    ///
    /// Fails if the language is not registered, or if the factory rejects
    /// the options.
    pub fn create(&self, options: &GeneratorOptions) -> Result<Box<dyn Backend>> {
        let Some(entry) = self.get(options.language()) else {
            let known: Vec<_> = self.languages().collect();
            bail!(
                "unknown generator '{}' (available: {})",
                options.language(),
                known.join(", ")
            );
        };
        tracing::debug!(language = entry.language, options = %options, "creating backend");
        (entry.factory)(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn recording(options: &GeneratorOptions) -> Result<Box<dyn Backend>> {
        if let Some(unknown) = options.first_unknown(&[]) {
            bail!("unknown option '{}'", unknown);
        }
        Ok(Box::new(RecordingBackend::new()))
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register("recording", "Records hook calls", recording)
            .register("other", "Another backend", recording);
        registry
    }

    #[test]
    fn test_create_known_language() {
        let backend = registry()
            .create(&GeneratorOptions::language_only("recording"))
            .unwrap();
        assert_eq!(backend.language(), "recording");
    }

    #[test]
    fn test_unknown_language_lists_available() {
        let Err(err) = registry().create(&GeneratorOptions::language_only("cobol")) else {
            panic!("unknown language should not create a backend");
        };
        assert_eq!(
            err.to_string(),
            "unknown generator 'cobol' (available: recording, other)"
        );
    }

    #[test]
    fn test_factory_sees_options() {
        let options = GeneratorOptions::parse("recording:bogus").unwrap();
        let Err(err) = registry().create(&options) else {
            panic!("factory should reject the unknown option");
        };
        assert_eq!(err.to_string(), "unknown option 'bogus'");
    }

    #[test]
    fn test_languages_keep_registration_order() {
        assert_eq!(
            registry().languages().collect::<Vec<_>>(),
            ["recording", "other"]
        );
        assert_eq!(
            registry().get("other").map(|e| e.description),
            Some("Another backend")
        );
    }
}
