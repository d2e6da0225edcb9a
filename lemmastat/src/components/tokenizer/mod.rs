//! A tokenizer to split raw text into alphabetic tokens.
//!
//! Text is segmented into extended grapheme clusters. A cluster is *lexical* if its first char is alphabetic, so
//! combining marks stay attached to their letter. A token is a maximal run of lexical clusters; everything else
//! (whitespace, digits, punctuation, symbols, hyphens and apostrophes) only separates tokens. Consequently `don't`
//! yields the tokens `don` and `t`, and `кто-то` yields `кто` and `то`.
//!
//! Only the first char of a cluster is checked. Non-alphabetic extenders inside a cluster (combining marks, but
//! also e. g. U+200D ZERO WIDTH JOINER or variation selectors) therefore stay inside the token and its lemma:
//! `a\u{200D}b` is a single token.

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

use crate::types::*;

#[inline]
fn is_lexical(grapheme: &str) -> bool {
    grapheme.chars().next().map_or(false, char::is_alphabetic)
}

/// Splits text into [Token]s. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn tokenize<'t>(&self, text: &'t str) -> TokenIter<'t> {
        TokenIter {
            text,
            graphemes: text.grapheme_indices(true),
        }
    }
}

/// An iterator over the tokens of a text, in text order.
pub struct TokenIter<'t> {
    text: &'t str,
    graphemes: GraphemeIndices<'t>,
}

impl<'t> Iterator for TokenIter<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = loop {
            let (index, grapheme) = self.graphemes.next()?;
            if is_lexical(grapheme) {
                break index;
            }
        };

        let mut end = self.text.len();
        for (index, grapheme) in self.graphemes.by_ref() {
            if !is_lexical(grapheme) {
                end = index;
                break;
            }
        }

        Some(Token::new(&self.text[start..end], start..end))
    }
}
