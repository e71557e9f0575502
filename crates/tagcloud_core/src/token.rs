use crate::SeparatorSet;

/// Returns the maximal run of same-class characters starting at byte offset `position`.
///
/// The run is all separators when `text[position]` is a separator, otherwise all word
/// characters. `position` must lie on a character boundary strictly inside `text`.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> &'a str {
    debug_assert!(position < text.len(), "position {position} outside text");
    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let Some((_, first)) = chars.next() else {
        return rest;
    };
    let is_sep = separators.is_separator(first);
    let end = chars
        .find(|&(_, c)| separators.is_separator(c) != is_sep)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Iterator over the successive tokens of a line.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Tokens<'a, 's> {
    pub fn new(text: &'a str, separators: &'s SeparatorSet) -> Self {
        Self {
            text,
            position: 0,
            separators,
        }
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let token = next_token(self.text, self.position, self.separators);
        self.position += token.len();
        Some(token)
    }
}
