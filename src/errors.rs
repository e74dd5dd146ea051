use thiserror::Error;

/// Error type for rejected `DiffConfig` values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The block search needs windows of at least one token
    #[error("Invalid config: the maximum granularity must be at least 1")]
    ZeroGranularity,

    /// The class name would break out of the `class='…'` attribute it is
    /// rendered into
    #[error(
        "Invalid config: `{class}` is not a usable CSS class name, it must be non-empty and must \
         not contain whitespace, quotes, `<`, `>` or `&`"
    )]
    InvalidClassName {
        /// The rejected class name
        class: String,
    },
}
