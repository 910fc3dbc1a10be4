//! Markup stripping for free-text input.
//!
//! Titles and descriptions arrive from untrusted callers and may contain
//! HTML. Sanitization keeps the text content of ordinary elements and
//! discards the tags themselves, every attribute, comments, and the entire
//! content of elements that never carry human-readable text. The stripper
//! is a single forward scan: removal can never splice surrounding
//! characters into a new tag, so inputs like `<scr<script>ipt>` stay inert.

use std::iter::Peekable;
use std::str::Chars;

/// Elements whose content is dropped together with their tags.
const NON_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "option"];

/// Strips all markup from `input`, then trims surrounding whitespace.
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    strip_markup(input).trim().to_owned()
}

/// Removes tags, attributes, comments, and non-text element content.
///
/// A `<` only opens markup when followed by an ASCII letter, `/`, `!`, or
/// `?`; any other `<` is kept as literal text, matching how HTML parsers
/// treat it.
fn strip_markup(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(current) = chars.next() {
        if current != '<' {
            output.push(current);
            continue;
        }
        match chars.peek().copied() {
            Some(next) if next.is_ascii_alphabetic() => {
                let name = read_tag_name(&mut chars);
                let self_closing = skip_tag_remainder(&mut chars);
                if !self_closing && is_non_text_element(&name) {
                    skip_element_content(&mut chars, &name);
                }
            }
            Some('/' | '?') => {
                skip_tag_remainder(&mut chars);
            }
            Some('!') => {
                chars.next();
                skip_declaration(&mut chars);
            }
            _ => output.push(current),
        }
    }

    output
}

/// Consumes and lowercases the tag name following `<`.
fn read_tag_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(next) = chars.peek().copied() {
        if !next.is_ascii_alphanumeric() {
            break;
        }
        name.push(next.to_ascii_lowercase());
        chars.next();
    }
    name
}

/// Consumes the rest of a tag through its closing `>`, honouring quoted
/// attribute values so a `>` inside quotes does not end the tag.
///
/// Returns `true` when the tag used self-closing `/>` syntax. An
/// unterminated tag swallows the rest of the input, the same treatment a
/// lenient HTML parser gives it.
fn skip_tag_remainder(chars: &mut Peekable<Chars<'_>>) -> bool {
    let mut quote: Option<char> = None;
    let mut last_meaningful = ' ';
    for current in chars.by_ref() {
        match quote {
            Some(open) if current == open => quote = None,
            Some(_) => {}
            None => match current {
                '"' | '\'' => quote = Some(current),
                '>' => return last_meaningful == '/',
                _ => {
                    if !current.is_whitespace() {
                        last_meaningful = current;
                    }
                }
            },
        }
    }
    false
}

/// Consumes a `<!...>` declaration, treating `<!--` as a comment.
fn skip_declaration(chars: &mut Peekable<Chars<'_>>) {
    if chars.peek().copied() == Some('-') {
        chars.next();
        if chars.peek().copied() == Some('-') {
            chars.next();
            skip_comment(chars);
            return;
        }
    }
    skip_tag_remainder(chars);
}

/// Consumes characters through the terminating `-->` of a comment.
fn skip_comment(chars: &mut Peekable<Chars<'_>>) {
    let mut dashes = 0_usize;
    for current in chars.by_ref() {
        match current {
            '-' => dashes += 1,
            '>' if dashes >= 2 => return,
            _ => dashes = 0,
        }
    }
}

fn is_non_text_element(name: &str) -> bool {
    NON_TEXT_ELEMENTS.contains(&name)
}

/// Discards everything through the matching closing tag of a non-text
/// element, or to the end of input when the element is never closed.
fn skip_element_content(chars: &mut Peekable<Chars<'_>>, name: &str) {
    while let Some(current) = chars.next() {
        if current == '<' && chars.peek().copied() == Some('/') {
            chars.next();
            if closing_name_matches(chars, name) {
                skip_tag_remainder(chars);
                return;
            }
        }
    }
}

/// Consumes the candidate closing-tag name, reporting whether it matches.
///
/// `</scripting>` must not close `<script>`, so the name has to end at a
/// non-alphanumeric boundary.
fn closing_name_matches(chars: &mut Peekable<Chars<'_>>, name: &str) -> bool {
    for expected in name.chars() {
        match chars.peek().copied() {
            Some(actual) if actual.eq_ignore_ascii_case(&expected) => {
                chars.next();
            }
            _ => return false,
        }
    }
    !matches!(chars.peek().copied(), Some(trailing) if trailing.is_ascii_alphanumeric())
}
