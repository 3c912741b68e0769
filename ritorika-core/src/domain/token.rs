//! Tokenization of Russian text into words, punctuation and whitespace

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        // Words may contain inner hyphens and apostrophes: "кто-то", "из-за", "O'Neil"
        Regex::new(r"(?s)[\p{L}\p{N}]+(?:[-'’][\p{L}\p{N}]+)*|\s+|.")
            .expect("token pattern is a valid regex")
    })
}

/// Sentence-terminating punctuation
const TERMINATORS: [char; 5] = ['.', '!', '?', '…', ';'];

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters and digits
    Word,
    /// A single punctuation or symbol character
    Punctuation,
    /// A run of whitespace
    Whitespace,
}

/// A contiguous piece of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Surface text as written
    pub text: &'a str,
    pub kind: TokenKind,
    /// Byte range in the source text
    pub byte_range: Range<usize>,
    /// Character offset of the first character
    pub char_start: usize,
    /// Character offset one past the last character
    pub char_end: usize,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Lower-cased form with `ё` folded to `е`
    pub fn normalized(&self) -> String {
        normalize(self.text)
    }

    /// Number of characters in the token
    pub fn char_len(&self) -> usize {
        self.char_end - self.char_start
    }

    /// Whether the token ends a sentence
    pub fn is_terminator(&self) -> bool {
        self.kind == TokenKind::Punctuation && self.text.chars().all(|c| TERMINATORS.contains(&c))
    }

    /// Whether the word contains at least one letter or digit
    pub fn has_alphanumeric(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }
}

/// Normalize a word for dictionary lookup and comparison
pub fn normalize(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}

/// Split text into tokens; concatenating every token's text restores the input
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut char_offset = 0;

    for m in token_pattern().find_iter(text) {
        let piece = m.as_str();
        let first = match piece.chars().next() {
            Some(c) => c,
            None => continue,
        };
        let kind = if first.is_alphanumeric() {
            TokenKind::Word
        } else if first.is_whitespace() {
            TokenKind::Whitespace
        } else {
            TokenKind::Punctuation
        };
        let char_len = piece.chars().count();

        tokens.push(Token {
            text: piece,
            kind,
            byte_range: m.range(),
            char_start: char_offset,
            char_end: char_offset + char_len,
        });
        char_offset += char_len;
    }

    tokens
}

/// Word tokens only
pub fn words(text: &str) -> impl Iterator<Item = Token<'_>> {
    tokenize(text).into_iter().filter(Token::is_word)
}

/// Count word tokens
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Re-apply the capitalization style of `original` to `form`
///
/// All-caps words stay all-caps, capitalized words get a capital first letter,
/// everything else is returned as is.
pub fn match_capitalization(original: &str, form: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return form.to_uppercase();
    }

    match original.chars().next() {
        Some(first) if first.is_uppercase() => {
            let mut chars = form.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => form.to_string(),
    }
}
