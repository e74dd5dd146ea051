mod config;
mod diffs;
mod errors;
mod html_diff;
mod operations;
mod renderer;
mod tokenizer;
mod utils;

pub use config::{DEFAULT_MAX_GRANULARITY, DiffConfig};
pub use diffs::{
    block_matcher::{find_match, find_match_with_fallback},
    matching_blocks::matching_blocks,
    token_match::Match,
};
pub use errors::ConfigError;
pub use html_diff::{HtmlDiff, html_diff, html_diff_with_config};
pub use operations::{action::Action, operation::Operation};
pub use renderer::{Marker, Renderer, render, wrap_text};
pub use tokenizer::{
    html_tokenizer::{html_tokenizer, tokenize},
    token::{Token, TokenKind},
};

#[cfg(feature = "wasm")]
pub mod wasm;
