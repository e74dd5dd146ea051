#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::char_class::{is_tag_end, is_tag_start, is_whitespace};

/// The structural class of a [`Token`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A whole HTML tag, from `<` to `>` inclusive.
    Tag,

    /// A run of whitespace characters.
    Whitespace,

    /// A word or a single punctuation character.
    Text,
}

impl TokenKind {
    /// Derive the kind of a token from its text: starting with `<` and ending
    /// with `>` makes a tag, all-whitespace makes whitespace, anything else is
    /// text.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let mut chars = text.chars();
        let starts_as_tag = chars.next().is_some_and(is_tag_start);
        let ends_as_tag = chars.next_back().is_some_and(is_tag_end);

        if starts_as_tag && ends_as_tag {
            TokenKind::Tag
        } else if !text.is_empty() && text.chars().all(is_whitespace) {
            TokenKind::Whitespace
        } else {
            TokenKind::Text
        }
    }
}

/// A token is the atomic unit the diff compares: a run of text, a run of
/// whitespace, or a whole HTML tag.
///
/// Tokens own their text so that the source documents can be dropped once
/// they are tokenized. Two tokens are equal when their texts are equal.
///
/// It's UTF-8 compatible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    original: String,
    kind: TokenKind,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self { Token::new(text.to_owned()) }
}

impl From<String> for Token {
    fn from(text: String) -> Self { Token::new(text) }
}

impl Token {
    #[must_use]
    pub fn new(original: String) -> Self {
        let kind = TokenKind::classify(&original);
        Token { original, kind }
    }

    #[must_use]
    pub fn original(&self) -> &str { &self.original }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }

    #[must_use]
    pub fn is_tag(&self) -> bool { self.kind == TokenKind::Tag }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("<p>", TokenKind::Tag)]
    #[test_case("</strong>", TokenKind::Tag)]
    #[test_case("<img src=\"a.png\" />", TokenKind::Tag)]
    #[test_case(" ", TokenKind::Whitespace; "single space")]
    #[test_case("\n\t  ", TokenKind::Whitespace; "mixed whitespace")]
    #[test_case("hello", TokenKind::Text)]
    #[test_case(",", TokenKind::Text; "punctuation")]
    #[test_case("<p", TokenKind::Text; "unterminated tag")]
    #[test_case("<", TokenKind::Text; "lone angle bracket")]
    #[test_case("", TokenKind::Text; "empty")]
    fn test_classify(text: &str, expected: TokenKind) {
        assert_eq!(TokenKind::classify(text), expected);
        assert_eq!(Token::from(text).kind(), expected);
    }

    #[test]
    fn test_equality_is_by_text() {
        assert_eq!(Token::from("a"), Token::from("a".to_owned()));
        assert!(Token::from("a") != Token::from("b"));
    }
}
