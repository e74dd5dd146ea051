pub mod formatting_tags;

use formatting_tags::{is_closing_formatting_tag, is_opening_formatting_tag};

use crate::{Action, DiffConfig, Operation, Token};

/// The element a changed region is wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Insert,
    Delete,
}

impl Marker {
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Marker::Insert => "ins",
            Marker::Delete => "del",
        }
    }
}

/// Where a synthetic marker goes relative to the run of tags it accompanies.
#[derive(Debug)]
enum Splice {
    Before(&'static str),
    After(String),
}

/// Render operations into an HTML fragment. Unchanged tokens are copied
/// verbatim, deleted ones are wrapped in `<del>` and inserted ones in `<ins>`.
/// A replacement renders as a deletion followed by an insertion.
#[must_use]
pub fn render(
    operations: &[Operation],
    old: &[Token],
    new: &[Token],
    config: &DiffConfig,
) -> String {
    let mut renderer = Renderer::new(config);

    for operation in operations {
        let old_tokens = &old[operation.old_range()];
        let new_tokens = &new[operation.new_range()];

        match operation.action {
            Action::Equal => renderer.push_tokens(new_tokens),
            Action::Delete => renderer.wrap(Marker::Delete, config.delete_class(), old_tokens),
            Action::Insert => renderer.wrap(Marker::Insert, config.insert_class(), new_tokens),
            Action::Replace => {
                renderer.wrap(Marker::Delete, config.modified_class(), old_tokens);
                renderer.wrap(Marker::Insert, config.modified_class(), new_tokens);
            }
            Action::None => {}
        }
    }

    renderer.take()
}

/// Append-only output buffer of the rendered fragment.
#[derive(Debug)]
pub struct Renderer<'a> {
    config: &'a DiffConfig,
    buffer: String,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(config: &'a DiffConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
        }
    }

    pub fn push_tokens(&mut self, tokens: &[Token]) {
        self.buffer.extend(tokens.iter().map(Token::original));
    }

    /// Wrap the text between tags in `marker` elements of class `css_class`
    /// and copy the tags themselves unwrapped.
    ///
    /// A run of tags starting with an inline formatting tag gets a synthetic
    /// `<ins>` opened after it (opening tag) or closed before it (closing
    /// tag), so the formatting tag is never enclosed by a marker. Deleted
    /// formatting tags are dropped. Nesting stays best-effort: a region opening
    /// a formatting tag without closing it may leave a marker open.
    pub fn wrap(&mut self, marker: Marker, css_class: &str, mut tokens: &[Token]) {
        while !tokens.is_empty() {
            let (text, rest) = split_leading(tokens, |token| !token.is_tag());
            tokens = rest;

            let mut splice = None;
            if !text.is_empty() {
                self.buffer
                    .push_str(&wrap_text(&join_text(text), marker.tag_name(), css_class));
            } else if is_opening_formatting_tag(tokens[0].original()) {
                splice = Some(Splice::After(format!(
                    "<ins class='{}'>",
                    self.config.formatting_class()
                )));
                if marker == Marker::Delete {
                    tokens = &tokens[1..];
                }
            } else if is_closing_formatting_tag(tokens[0].original()) {
                splice = Some(Splice::Before("</ins>"));
                if marker == Marker::Delete {
                    tokens = &tokens[1..];
                }
            }

            if tokens.is_empty() && splice.is_none() {
                break;
            }

            let (tags, rest) = split_leading(tokens, Token::is_tag);
            tokens = rest;

            match splice {
                Some(Splice::Before(closing)) => {
                    self.buffer.push_str(closing);
                    self.push_tokens(tags);
                }
                Some(Splice::After(opening)) => {
                    self.push_tokens(tags);
                    self.buffer.push_str(&opening);
                }
                None => self.push_tokens(tags),
            }
        }
    }

    /// Returns the rendered fragment and clears the buffer.
    pub fn take(&mut self) -> String { std::mem::take(&mut self.buffer) }
}

/// `<tag class='css_class'>text</tag>`, `text` is not escaped.
#[must_use]
pub fn wrap_text(text: &str, tag: &str, css_class: &str) -> String {
    format!("<{tag} class='{css_class}'>{text}</{tag}>")
}

/// Join tokens, replacing a leading single space with `&nbsp;` so that a
/// marker around it does not collapse.
fn join_text(tokens: &[Token]) -> String {
    let mut text = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i == 0 && token.original() == " " {
            text.push_str("&nbsp;");
        } else {
            text.push_str(token.original());
        }
    }
    text
}

fn split_leading<P>(tokens: &[Token], predicate: P) -> (&[Token], &[Token])
where
    P: Fn(&Token) -> bool,
{
    let end = tokens
        .iter()
        .position(|token| !predicate(token))
        .unwrap_or(tokens.len());
    tokens.split_at(end)
}
