use regex::Regex;
use std::fmt;
use std::ops::Range;

/// One element of a removal template.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Exact text, matched verbatim.
    Literal(String),
    /// One or more whitespace characters, newlines included.
    Whitespace,
    /// A single identifier-shaped word.
    Identifier,
}

impl Token {
    /// Splits a literal code block into word tokens joined by whitespace
    /// wildcards, so the block matches regardless of indentation, line
    /// breaks, or spacing between words.
    pub fn block(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            if !tokens.is_empty() {
                tokens.push(Token::Whitespace);
            }
            tokens.push(Token::Literal(word.to_string()));
        }
        tokens
    }
}

/// A compiled removal template: an ordered token sequence turned into a
/// regular expression once, at construction.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(tokens: Vec<Token>) -> Result<Self, PatternError> {
        if tokens.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut source = String::new();
        for token in &tokens {
            match token {
                Token::Literal(text) => source.push_str(&regex::escape(text)),
                Token::Whitespace => source.push_str(r"\s+"),
                Token::Identifier => source.push_str("[A-Za-z_][A-Za-z0-9_]*"),
            }
        }

        match Regex::new(&source) {
            Ok(regex) => Ok(Self { regex }),
            Err(e) => Err(PatternError::InvalidPattern(format!("Invalid regex: {e}"))),
        }
    }

    /// Byte range of the first match in `text`, if any.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.regex.find(text).map(|m| m.range())
    }
}

#[derive(Debug, Clone)]
pub enum PatternError {
    Empty,
    InvalidPattern(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Empty => write!(f, "Pattern error: empty token sequence"),
            PatternError::InvalidPattern(msg) => write!(f, "Pattern error: {msg}"),
        }
    }
}

impl std::error::Error for PatternError {}
