//! Construction options.
//!
//! [`BuilderOptions`] mirrors the widget's option object: numeric seeds for
//! the initial configuration, panel toggles and a theme token. It loads from
//! JSON with camelCase keys; every key is optional.
//!
//! # Example
//!
//! ```rust
//! use gridview_builder::options::BuilderOptions;
//!
//! let options = BuilderOptions::from_json_str(r#"{"defaultColumns": 4, "theme": "dark"}"#).unwrap();
//! assert_eq!(options.initial_configuration().columns, 4);
//! assert_eq!(options.theme, "dark");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{CodeStyle, Configuration, ContentTemplate};

/// Options accepted at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderOptions {
    pub default_columns: Option<u32>,
    pub default_main_spacing: Option<f64>,
    pub default_cross_spacing: Option<f64>,
    pub default_aspect_ratio: Option<f64>,
    pub default_padding: Option<f64>,
    pub default_item_count: Option<u32>,
    pub default_code_style: Option<CodeStyle>,
    pub default_content_template: Option<ContentTemplate>,
    pub show_controls: bool,
    pub show_code_output: bool,
    pub show_preview: bool,
    /// Palette preset token (`light`, `dark`, `dracula`, `nord`, `terminal`).
    pub theme: String,
    /// Controls span the full width above the output.
    pub compact: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            default_columns: None,
            default_main_spacing: None,
            default_cross_spacing: None,
            default_aspect_ratio: None,
            default_padding: None,
            default_item_count: None,
            default_code_style: None,
            default_content_template: None,
            show_controls: true,
            show_code_output: true,
            show_preview: true,
            theme: "light".to_string(),
            compact: false,
        }
    }
}

impl BuilderOptions {
    /// Parse options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse an options file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::OptionsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded builder options");
        Ok(options)
    }

    /// Defaults with the seeds from these options merged over them.
    ///
    /// Only an absent seed falls back to its default. A present zero is a
    /// real value, not "unset": `defaultPadding: 0` seeds an unpadded grid
    /// and `defaultMainSpacing: 0` a flush one.
    pub fn initial_configuration(&self) -> Configuration {
        let d = Configuration::default();
        Configuration {
            columns: self.default_columns.unwrap_or(d.columns),
            main_spacing: self.default_main_spacing.unwrap_or(d.main_spacing),
            cross_spacing: self.default_cross_spacing.unwrap_or(d.cross_spacing),
            aspect_ratio: self.default_aspect_ratio.unwrap_or(d.aspect_ratio),
            padding: self.default_padding.unwrap_or(d.padding),
            item_count: self.default_item_count.unwrap_or(d.item_count),
            code_style: self.default_code_style.unwrap_or(d.code_style),
            content_template: self.default_content_template.unwrap_or(d.content_template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = BuilderOptions::default();
        assert!(options.show_controls && options.show_code_output && options.show_preview);
        assert_eq!(options.theme, "light");
        assert!(!options.compact);
        assert_eq!(options.initial_configuration(), Configuration::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(BuilderOptions::from_json_str("{}").unwrap(), BuilderOptions::default());
    }

    #[test]
    fn test_seeds_merge_over_defaults() {
        let options = BuilderOptions::from_json_str(
            r#"{
                "defaultColumns": 2,
                "defaultAspectRatio": 0.8,
                "defaultCodeStyle": "builder",
                "defaultContentTemplate": "stack",
                "showCodeOutput": false
            }"#,
        )
        .unwrap();
        let config = options.initial_configuration();
        assert_eq!(config.columns, 2);
        assert_eq!(config.aspect_ratio, 0.8);
        assert_eq!(config.code_style, CodeStyle::IndexBuilder);
        assert_eq!(config.content_template, ContentTemplate::OverlayStack);
        assert_eq!(config.item_count, 12);
        assert!(!options.show_code_output);
        assert!(options.show_preview);
    }

    #[test]
    fn test_zero_seed_is_kept() {
        let options = BuilderOptions::from_json_str(r#"{"defaultPadding": 0}"#).unwrap();
        assert_eq!(options.initial_configuration().padding, 0.0);
    }

    #[test]
    fn test_unknown_template_seed_falls_back() {
        let options = BuilderOptions::from_json_str(r#"{"defaultContentTemplate": "carousel"}"#).unwrap();
        assert_eq!(options.initial_configuration().content_template, ContentTemplate::PlainBox);
    }

    #[test]
    fn test_invalid_json() {
        let err = BuilderOptions::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::OptionsParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = BuilderOptions::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::OptionsRead { .. }));
    }
}
