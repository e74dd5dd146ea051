use super::token::Token;
use crate::utils::char_class::{is_tag_end, is_tag_start, is_whitespace, is_word_char};

/// The mode the tokenizer is in while consuming characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Character,
    Tag,
    Whitespace,
}

/// What consuming a character does to the pending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Extend the pending token with the character.
    Append,

    /// Flush the pending token and start a new one with the given character.
    Start(char),

    /// Flush the pending token and emit the character as a token of its own.
    Emit,

    /// Terminate the pending tag with `>` and flush it.
    CloseTag,
}

/// The transition function of the tokenizer.
#[must_use]
pub fn transition(state: State, c: char) -> (State, Effect) {
    match state {
        State::Character | State::Whitespace if is_tag_start(c) => (State::Tag, Effect::Start('<')),
        State::Character if is_whitespace(c) => (State::Whitespace, Effect::Start(c)),
        State::Character if is_word_char(c) => (State::Character, Effect::Append),
        State::Character => (State::Character, Effect::Emit),
        State::Tag if is_tag_end(c) => {
            let next = if is_whitespace(c) {
                State::Whitespace
            } else {
                State::Character
            };
            (next, Effect::CloseTag)
        }
        State::Tag => (State::Tag, Effect::Append),
        State::Whitespace if is_whitespace(c) => (State::Whitespace, Effect::Append),
        State::Whitespace => (State::Character, Effect::Start(c)),
    }
}

/// Splits HTML into tags, whitespace runs, words and single punctuation
/// characters. Whole tags are kept as one token, no character is dropped.
///
/// ## Example
///
/// ```not_rust
/// "<p>Hi there!</p>" -> ["<p>", "Hi", " ", "there", "!", "</p>"]
/// ```
#[must_use]
pub fn html_tokenizer(text: &str) -> Vec<Token> { tokenize(text.chars()) }

/// Tokenize an already exploded sequence of characters.
#[must_use]
pub fn tokenize<I>(characters: I) -> Vec<Token>
where
    I: IntoIterator<Item = char>,
{
    let mut result = Vec::new();
    let mut pending = String::new();
    let mut state = State::Character;

    for c in characters {
        let (next, effect) = transition(state, c);
        match effect {
            Effect::Append => pending.push(c),
            Effect::Start(first) => {
                flush(&mut pending, &mut result);
                pending.push(first);
            }
            Effect::Emit => {
                flush(&mut pending, &mut result);
                result.push(Token::new(c.to_string()));
            }
            Effect::CloseTag => {
                pending.push('>');
                flush(&mut pending, &mut result);
            }
        }
        state = next;
    }

    flush(&mut pending, &mut result);

    result
}

fn flush(pending: &mut String, result: &mut Vec<Token>) {
    if !pending.is_empty() {
        result.push(Token::new(std::mem::take(pending)));
    }
}
