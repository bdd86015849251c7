//! Word tokenization
//!
//! Two tokenizers share one notion of a "word character": anything
//! alphanumeric (Unicode-aware) plus the underscore. Alphabetic here is the
//! Unicode `Alphabetic` property, so vowel signs such as Devanagari
//! matras stay inside their word, while plain combining accents (U+0300..)
//! split it.
//!
//! - [`Tokenizer::line_tokens`] is used to build the graph. Every char that is
//!   neither a word char nor whitespace is turned into a space, then the line
//!   is split on whitespace.
//! - [`Tokenizer::word_tokens`] is used on free text for augmentation. It
//!   yields maximal runs of word chars.
//!
//! Both yield the same tokens for any input.

/// A word tokenizer
///
/// Every word-char run is a token. Nothing is filtered out, so adjacency in
/// the token stream is adjacency in the text.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Check whether a char can be part of a word
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    /// Tokenize a single input line for graph construction
    pub fn line_tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        // Separators are exactly the non-word chars, so splitting on them is
        // the same as replacing punctuation by spaces and splitting on
        // whitespace, without allocating the rewritten line.
        line.split(|c: char| !Self::is_word_char(c))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Tokenize free text into maximal runs of word chars
    pub fn word_tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (idx, c) in text.char_indices() {
            match (Self::is_word_char(c), start) {
                (true, None) => start = Some(idx),
                (false, Some(s)) => {
                    tokens.push(&text[s..idx]);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            tokens.push(&text[s..]);
        }

        tokens
    }
}
