#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The widest token window the block search starts from by default.
pub const DEFAULT_MAX_GRANULARITY: usize = 4;

/// Tunables of a diff: how coarse the block search starts and which CSS
/// classes the rendered markers carry.
///
/// ```
/// use htmldiff_text::{DiffConfig, html_diff_with_config};
///
/// let config = DiffConfig::default().with_insert_class("added").unwrap();
/// assert_eq!(
///     html_diff_with_config("<p>a</p>", "<p>a b</p>", &config),
///     "<p>a<ins class='added'>&nbsp;b</ins></p>"
/// );
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawDiffConfig")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    max_granularity: usize,
    insert_class: String,
    delete_class: String,
    modified_class: String,
    formatting_class: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_granularity: DEFAULT_MAX_GRANULARITY,
            insert_class: "diffins".to_owned(),
            delete_class: "diffdel".to_owned(),
            modified_class: "diffmod".to_owned(),
            formatting_class: "mod".to_owned(),
        }
    }
}

impl DiffConfig {
    /// Set the widest window (in tokens) the block search starts with before
    /// falling back to narrower ones.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroGranularity` for 0.
    pub fn with_max_granularity(mut self, max_granularity: usize) -> Result<Self, ConfigError> {
        if max_granularity == 0 {
            return Err(ConfigError::ZeroGranularity);
        }

        self.max_granularity = max_granularity;
        Ok(self)
    }

    /// Set the class of `<ins>` markers around inserted content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidClassName` if the class cannot be
    /// embedded in a single-quoted attribute.
    pub fn with_insert_class(mut self, class: impl Into<String>) -> Result<Self, ConfigError> {
        self.insert_class = checked_class(class.into())?;
        Ok(self)
    }

    /// Set the class of `<del>` markers around deleted content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidClassName` if the class cannot be
    /// embedded in a single-quoted attribute.
    pub fn with_delete_class(mut self, class: impl Into<String>) -> Result<Self, ConfigError> {
        self.delete_class = checked_class(class.into())?;
        Ok(self)
    }

    /// Set the class of both markers of a replacement.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidClassName` if the class cannot be
    /// embedded in a single-quoted attribute.
    pub fn with_modified_class(mut self, class: impl Into<String>) -> Result<Self, ConfigError> {
        self.modified_class = checked_class(class.into())?;
        Ok(self)
    }

    /// Set the class of the `<ins>` markers spliced around the content of
    /// inline formatting tags.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidClassName` if the class cannot be
    /// embedded in a single-quoted attribute.
    pub fn with_formatting_class(mut self, class: impl Into<String>) -> Result<Self, ConfigError> {
        self.formatting_class = checked_class(class.into())?;
        Ok(self)
    }

    /// Check a config built by other means than the `with_*` methods, e.g.
    /// deserialized from a file.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_granularity == 0 {
            return Err(ConfigError::ZeroGranularity);
        }

        for class in [
            &self.insert_class,
            &self.delete_class,
            &self.modified_class,
            &self.formatting_class,
        ] {
            if !is_valid_class(class) {
                return Err(ConfigError::InvalidClassName {
                    class: class.clone(),
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn max_granularity(&self) -> usize { self.max_granularity }

    #[must_use]
    pub fn insert_class(&self) -> &str { &self.insert_class }

    #[must_use]
    pub fn delete_class(&self) -> &str { &self.delete_class }

    #[must_use]
    pub fn modified_class(&self) -> &str { &self.modified_class }

    #[must_use]
    pub fn formatting_class(&self) -> &str { &self.formatting_class }

    /// The granularity a diff of sequences of the given lengths starts with.
    #[must_use]
    pub fn effective_granularity(&self, old_len: usize, new_len: usize) -> usize {
        self.max_granularity.min(old_len.min(new_len))
    }
}

/// Unchecked shape of a deserialized `DiffConfig`, missing fields take their
/// default values.
#[cfg(feature = "serde")]
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawDiffConfig {
    max_granularity: usize,
    insert_class: String,
    delete_class: String,
    modified_class: String,
    formatting_class: String,
}

#[cfg(feature = "serde")]
impl Default for RawDiffConfig {
    fn default() -> Self {
        let DiffConfig {
            max_granularity,
            insert_class,
            delete_class,
            modified_class,
            formatting_class,
        } = DiffConfig::default();

        Self {
            max_granularity,
            insert_class,
            delete_class,
            modified_class,
            formatting_class,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawDiffConfig> for DiffConfig {
    type Error = ConfigError;

    fn try_from(raw: RawDiffConfig) -> Result<Self, Self::Error> {
        let config = DiffConfig {
            max_granularity: raw.max_granularity,
            insert_class: raw.insert_class,
            delete_class: raw.delete_class,
            modified_class: raw.modified_class,
            formatting_class: raw.formatting_class,
        };
        config.validate()?;

        Ok(config)
    }
}

fn checked_class(class: String) -> Result<String, ConfigError> {
    if is_valid_class(&class) {
        Ok(class)
    } else {
        Err(ConfigError::InvalidClassName { class })
    }
}

fn is_valid_class(class: &str) -> bool {
    !class.is_empty()
        && !class
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '<' | '>' | '&'))
}
