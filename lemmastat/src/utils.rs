/// Whether the char belongs to one of the Cyrillic blocks.
#[inline]
pub fn is_cyrillic(c: char) -> bool {
    matches!(
        c,
        '\u{0400}'..='\u{052F}' | '\u{1C80}'..='\u{1C8F}' | '\u{2DE0}'..='\u{2DFF}' | '\u{A640}'..='\u{A69F}'
    )
}

/// Replaces every char which appears on the left of a fold with the char on its right.
pub fn fold_chars(string: &str, folds: &[(char, char)]) -> String {
    string
        .chars()
        .map(|c| {
            folds
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}
