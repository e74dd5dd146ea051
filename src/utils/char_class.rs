//! Single-character predicates used by the tokenizer.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

#[must_use]
pub fn is_tag_start(c: char) -> bool { c == '<' }

#[must_use]
pub fn is_tag_end(c: char) -> bool { c == '>' }

#[must_use]
pub fn is_whitespace(c: char) -> bool { c.is_whitespace() }

/// Letters, digits, connector punctuation such as `_` and combining marks
/// make up words, so a decomposed `é` stays in one token.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
        || c.general_category() == GeneralCategory::ConnectorPunctuation
        || c.general_category_group() == GeneralCategoryGroup::Mark
}
