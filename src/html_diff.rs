use tracing::debug;

use crate::{
    DiffConfig, Match, Operation, Token,
    diffs::matching_blocks::matching_blocks,
    renderer::render,
    tokenizer::html_tokenizer::html_tokenizer,
};

/// Compute the difference of two HTML documents as an HTML fragment, with
/// removed content wrapped in `<del>` and added content in `<ins>` elements.
///
/// The documents are compared at the granularity of words, whitespace runs
/// and whole tags. Unchanged markup is copied verbatim.
///
/// ```
/// use htmldiff_text::html_diff;
///
/// assert_eq!(
///     html_diff("<p>The quick brown fox</p>", "<p>The quick red fox</p>"),
///     "<p>The quick <del class='diffmod'>brown</del><ins class='diffmod'>red</ins> fox</p>"
/// );
/// ```
#[must_use]
pub fn html_diff(old: &str, new: &str) -> String { HtmlDiff::from_strings(old, new).to_html() }

/// Same as `html_diff` but with the given `DiffConfig`.
#[must_use]
pub fn html_diff_with_config(old: &str, new: &str, config: &DiffConfig) -> String {
    HtmlDiff::from_strings_with_config(old, new, config).to_html()
}

/// Two tokenized HTML documents together with the operations transforming
/// the old one into the new one.
///
/// It's created with `from_strings` and rendered into an HTML fragment with
/// `to_html`. The tokens own their text, so the source strings don't need to
/// outlive it.
///
/// ```
/// use htmldiff_text::HtmlDiff;
///
/// let diff = HtmlDiff::from_strings("<p>Hello world</p>", "<p>Hello there</p>");
/// assert_eq!(
///     diff.to_html(),
///     "<p>Hello <del class='diffmod'>world</del><ins class='diffmod'>there</ins></p>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlDiff {
    old_tokens: Vec<Token>,
    new_tokens: Vec<Token>,
    matching_blocks: Vec<Match>,
    operations: Vec<Operation>,
    config: DiffConfig,
}

impl HtmlDiff {
    /// Diff `old` against `new` with the default `DiffConfig`.
    #[must_use]
    pub fn from_strings(old: &str, new: &str) -> Self {
        Self::from_strings_with_config(old, new, &DiffConfig::default())
    }

    /// Diff `old` against `new`. The documents are tokenized into tags, words
    /// and whitespace, aligned by their longest shared blocks of tokens and
    /// the remaining gaps classified into insertions, deletions and
    /// replacements.
    #[must_use]
    pub fn from_strings_with_config(old: &str, new: &str, config: &DiffConfig) -> Self {
        let old_tokens = html_tokenizer(old);
        let new_tokens = html_tokenizer(new);

        let granularity = config.effective_granularity(old_tokens.len(), new_tokens.len());
        debug!(
            old_token_count = old_tokens.len(),
            new_token_count = new_tokens.len(),
            granularity,
            "tokenized documents"
        );

        let matching_blocks = matching_blocks(&old_tokens, &new_tokens, granularity);
        debug!(
            matching_block_count = matching_blocks.len(),
            "aligned documents"
        );

        let operations = Operation::vec_from(&matching_blocks, old_tokens.len(), new_tokens.len());

        Self {
            old_tokens,
            new_tokens,
            matching_blocks,
            operations,
            config: config.clone(),
        }
    }

    #[must_use]
    pub fn old_tokens(&self) -> &[Token] { &self.old_tokens }

    #[must_use]
    pub fn new_tokens(&self) -> &[Token] { &self.new_tokens }

    /// The ordered, non-overlapping blocks of tokens shared by both documents.
    #[must_use]
    pub fn matching_blocks(&self) -> &[Match] { &self.matching_blocks }

    /// The ordered operations covering both token sequences exactly once.
    #[must_use]
    pub fn operations(&self) -> &[Operation] { &self.operations }

    /// Render the diff as an HTML fragment marking deletions with `<del>` and
    /// insertions with `<ins>`.
    #[must_use]
    pub fn to_html(&self) -> String {
        render(
            &self.operations,
            &self.old_tokens,
            &self.new_tokens,
            &self.config,
        )
    }
}
