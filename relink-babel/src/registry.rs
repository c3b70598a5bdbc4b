//! Converter registry for discovery and selection
//!
//! This module provides a centralized registry for all available converters.
//! Converters can be registered and retrieved by name.

use crate::converter::{ConvertOptions, Converter, Direction};
use crate::error::ConvertError;
use crate::links::Conversion;
use std::collections::HashMap;

/// Registry of link converters
///
/// # Examples
///
/// ```ignore
/// let registry = ConverterRegistry::default();
/// let result = registry.convert("[a](b)", "html", &ConvertOptions::default())?;
/// assert_eq!(result.text, "<a href=\"b\">a</a>");
/// ```
pub struct ConverterRegistry {
    converters: HashMap<String, Box<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter with the same name already exists, it will be replaced.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        self.converters
            .insert(converter.name().to_string(), Box::new(converter));
    }

    /// Get a converter by name
    pub fn get(&self, name: &str) -> Result<&dyn Converter, ConvertError> {
        self.converters
            .get(name)
            .map(|c| c.as_ref())
            .ok_or_else(|| ConvertError::ConverterNotFound(name.to_string()))
    }

    /// Get the converter implementing `direction`
    pub fn for_direction(&self, direction: Direction) -> Result<&dyn Converter, ConvertError> {
        self.get(direction.converter_name())
    }

    /// Check if a converter exists
    pub fn has(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    /// List all available converter names (sorted)
    pub fn list_converters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.converters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Convert source text using the named converter
    pub fn convert(
        &self,
        source: &str,
        name: &str,
        options: &ConvertOptions,
    ) -> Result<Conversion, ConvertError> {
        Ok(self.get(name)?.convert(source, options))
    }

    /// Create a registry with both built-in directions
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::converters::HtmlConverter);
        registry.register(crate::converters::MarkdownConverter);

        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
