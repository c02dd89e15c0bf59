//! Named themes and the default theme.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Deserialize;
use tracing::debug;

use super::definition::{ThemeDefinition, ThemeParams};
use super::enricher::ValidationRulesEnricher;
use crate::error::Result;

/// Theme registry configuration as loaded from JSON.
///
/// ```json
/// { "default": "bootstrap5", "themes": { "bootstrap5": { "inputClass": "form-control" } } }
/// ```
///
/// A theme mapped to `null` is known but disabled.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RegistryConfig {
    default: Option<String>,
    themes: BTreeMap<String, Option<ThemeParams>>,
}

/// Registry of theme definitions.
///
/// Definitions are instantiated on first lookup and cached until the
/// registry is re-initialized. Lookups take `&self` and may run from several
/// threads; re-initialization needs `&mut self`.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Option<ThemeParams>>,
    default_theme: Option<String>,
    enricher: Option<Arc<dyn ValidationRulesEnricher>>,
    instances: RwLock<HashMap<String, Option<Arc<ThemeDefinition>>>>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        let mut registry = Self::new();
        registry.install(
            config.themes.into_iter().collect(),
            config.default,
            None,
        );
        Ok(registry)
    }

    /// Replaces every registered theme, the default theme name and the
    /// validation rules enricher, and clears cached definitions.
    pub fn initialize<I, K>(
        &mut self,
        themes: I,
        default_theme: Option<&str>,
        enricher: Option<Arc<dyn ValidationRulesEnricher>>,
    ) where
        I: IntoIterator<Item = (K, ThemeParams)>,
        K: Into<String>,
    {
        let themes = themes
            .into_iter()
            .map(|(name, params)| (name.into(), Some(params)))
            .collect();
        self.install(themes, default_theme.map(str::to_string), enricher);
    }

    /// Removes every theme, the default theme name and the enricher.
    pub fn reset(&mut self) {
        self.install(HashMap::new(), None, None);
    }

    /// Sets the enricher without touching themes.
    pub fn set_enricher(&mut self, enricher: Arc<dyn ValidationRulesEnricher>) {
        self.enricher = Some(enricher);
    }

    fn install(
        &mut self,
        themes: HashMap<String, Option<ThemeParams>>,
        default_theme: Option<String>,
        enricher: Option<Arc<dyn ValidationRulesEnricher>>,
    ) {
        debug!(
            themes = themes.len(),
            default = default_theme.as_deref().unwrap_or(""),
            "Initializing theme registry"
        );
        self.themes = themes;
        self.default_theme = default_theme;
        self.enricher = enricher;
        self.instances
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the default theme name.
    pub fn default_theme(&self) -> Option<&str> {
        self.default_theme.as_deref()
    }

    /// Returns the validation rules enricher.
    pub fn enricher(&self) -> Option<Arc<dyn ValidationRulesEnricher>> {
        self.enricher.clone()
    }

    /// Returns whether a theme is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Returns the theme registered under `name`, or the default theme when
    /// `name` is `None`.
    ///
    /// Returns `None` for unknown or disabled themes and when no name
    /// resolves.
    pub fn lookup(&self, name: Option<&str>) -> Option<Arc<ThemeDefinition>> {
        let name = name.or(self.default_theme.as_deref())?;

        if let Some(cached) = self
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return cached.clone();
        }

        let Some(params) = self.themes.get(name) else {
            debug!(theme = name, "Unknown theme");
            return None;
        };

        debug!(theme = name, "Instantiating theme definition");
        let definition = params.clone().map(|p| Arc::new(ThemeDefinition::new(p)));

        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert(definition)
            .clone()
    }
}
