//! Lazy, cached resolution of language names to adapters.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{Error, Result};
use crate::languages::{
    LanguageAdapter, c::CAdapter, cpp::CppAdapter, csharp::CSharpAdapter, css::CssAdapter,
    go::GoAdapter, html::HtmlAdapter, java::JavaAdapter, javascript::JavaScriptAdapter,
    kotlin::KotlinAdapter, markdown::MarkdownAdapter, php::PhpAdapter, python::PythonAdapter,
    ruby::RubyAdapter, rust_lang::RustAdapter, typescript::TypeScriptAdapter,
};

type AdapterFactory = fn() -> Arc<dyn LanguageAdapter>;

/// Resolves language names and aliases to adapters.
///
/// Adapters are created on first use, ABI-validated, and cached for the
/// registry's lifetime. The registry itself is immutable after construction,
/// so a scheduling run can share it read-only across worker threads.
pub struct AdapterRegistry {
    factories: HashMap<&'static str, AdapterFactory>,
    aliases: HashMap<&'static str, &'static str>,
    cache: RwLock<HashMap<&'static str, Arc<dyn LanguageAdapter>>>,
}

impl AdapterRegistry {
    /// Registry with every built-in language.
    #[must_use]
    pub fn with_builtin_languages() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
            aliases: HashMap::new(),
            cache: RwLock::new(HashMap::new()),
        };
        registry.register(|| Arc::new(PythonAdapter));
        registry.register(|| Arc::new(JavaScriptAdapter));
        registry.register(|| Arc::new(TypeScriptAdapter));
        registry.register(|| Arc::new(CAdapter));
        registry.register(|| Arc::new(CppAdapter));
        registry.register(|| Arc::new(GoAdapter));
        registry.register(|| Arc::new(RustAdapter));
        registry.register(|| Arc::new(JavaAdapter));
        registry.register(|| Arc::new(RubyAdapter));
        registry.register(|| Arc::new(KotlinAdapter));
        registry.register(|| Arc::new(PhpAdapter));
        registry.register(|| Arc::new(CSharpAdapter));
        registry.register(|| Arc::new(MarkdownAdapter));
        registry.register(|| Arc::new(HtmlAdapter));
        registry.register(|| Arc::new(CssAdapter));
        registry
    }

    /// Register an adapter factory under its canonical name and aliases.
    pub fn register(&mut self, factory: AdapterFactory) {
        // Adapters are unit structs; instantiating one here just reads its
        // static metadata.
        let probe = factory();
        let name = probe.language_name();
        self.factories.insert(name, factory);
        for alias in probe.aliases() {
            self.aliases.insert(alias, name);
        }
    }

    /// Canonical name for a language name or alias, if registered.
    #[must_use]
    pub fn canonical_name(&self, language: &str) -> Option<&'static str> {
        let lower = language.to_ascii_lowercase();
        if let Some((&name, _)) = self.factories.get_key_value(lower.as_str()) {
            return Some(name);
        }
        self.aliases.get(lower.as_str()).copied()
    }

    /// Resolve a language name or alias to its adapter.
    ///
    /// The first resolution of each language creates the adapter and
    /// validates its grammar's ABI version against the linked runtime.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedLanguage`] for unregistered names,
    /// [`Error::GrammarAbiMismatch`] when the grammar's ABI version is
    /// outside the runtime's supported range.
    pub fn resolve(&self, language: &str) -> Result<Arc<dyn LanguageAdapter>> {
        let name = self
            .canonical_name(language)
            .ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))?;

        if let Ok(cache) = self.cache.read() {
            if let Some(adapter) = cache.get(name) {
                return Ok(Arc::clone(adapter));
            }
        }

        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))?;
        let adapter = factory();
        validate_abi(adapter.as_ref())?;
        debug!(language = name, "created language adapter");

        let mut cache = self
            .cache
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        // Another thread may have raced us here; keep whichever landed first.
        Ok(Arc::clone(
            cache.entry(name).or_insert(adapter),
        ))
    }

    /// Canonical names of every registered language, sorted.
    #[must_use]
    pub fn supported_languages(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_builtin_languages()
    }
}

/// A grammar compiled against an incompatible runtime ABI would misbehave at
/// parse time, so reject it at adapter creation instead.
fn validate_abi(adapter: &dyn LanguageAdapter) -> Result<()> {
    let version = adapter.grammar().abi_version();
    let minimum = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION;
    let maximum = tree_sitter::LANGUAGE_VERSION;
    if (minimum..=maximum).contains(&version) {
        Ok(())
    } else {
        Err(Error::GrammarAbiMismatch {
            language: adapter.language_name().to_string(),
            version,
            minimum,
            maximum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_languages_resolve() {
        let registry = AdapterRegistry::with_builtin_languages();
        for name in registry.supported_languages() {
            let adapter = registry.resolve(name).unwrap();
            assert_eq!(adapter.language_name(), name);
        }
    }

    #[test]
    fn aliases_resolve_to_the_canonical_adapter() {
        let registry = AdapterRegistry::with_builtin_languages();
        assert_eq!(registry.resolve("golang").unwrap().language_name(), "go");
        assert_eq!(registry.resolve("py").unwrap().language_name(), "python");
        assert_eq!(registry.resolve("c++").unwrap().language_name(), "cpp");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = AdapterRegistry::with_builtin_languages();
        assert!(registry.resolve("Python").is_ok());
        assert!(registry.resolve("GO").is_ok());
    }

    #[test]
    fn unknown_language_is_an_error() {
        let registry = AdapterRegistry::with_builtin_languages();
        assert!(matches!(
            registry.resolve("cobol"),
            Err(Error::UnsupportedLanguage(name)) if name == "cobol"
        ));
    }

    #[test]
    fn grammar_abi_versions_fall_in_the_runtime_window() {
        let registry = AdapterRegistry::with_builtin_languages();
        let window =
            tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION..=tree_sitter::LANGUAGE_VERSION;
        for name in registry.supported_languages() {
            let adapter = registry.resolve(name).unwrap();
            let version = adapter.grammar().abi_version();
            assert!(window.contains(&version), "{name}: abi {version}");
        }
    }

    #[test]
    fn resolution_caches_the_adapter() {
        let registry = AdapterRegistry::with_builtin_languages();
        let a = registry.resolve("rust").unwrap();
        let b = registry.resolve("rs").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
