use std::fmt;

/// Language keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Print,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Print => "print",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "print" => Some(Keyword::Print),
            _ => None,
        }
    }
}

/// Token kinds
///
/// The kind is derived from the lexeme alone; the scanner never attaches
/// anything a consumer could not recompute from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Punctuation
    OpenParen,          // (
    CloseParen,         // )
    Semicolon,          // ;

    // Operators
    Plus,               // +
    Asterisk,           // *
    Slash,              // /
    Assign,             // =

    // Literals and identifiers
    StringLiteral(String),
    Identifier(String),
    Keyword(Keyword),
}

impl TokenKind {
    /// Classify a lexeme produced by the scanner.
    ///
    /// Returns `None` for text that no pattern of the language accepts.
    pub fn classify(lexeme: &str) -> Option<Self> {
        let kind = match lexeme {
            "(" => TokenKind::OpenParen,
            ")" => TokenKind::CloseParen,
            ";" => TokenKind::Semicolon,
            "+" => TokenKind::Plus,
            "*" => TokenKind::Asterisk,
            "/" => TokenKind::Slash,
            "=" => TokenKind::Assign,
            _ => {
                if let Some(keyword) = Keyword::from_str(lexeme) {
                    return Some(TokenKind::Keyword(keyword));
                }
                if lexeme.len() >= 2 && lexeme.starts_with('"') && lexeme.ends_with('"') {
                    let inner = &lexeme[1..lexeme.len() - 1];
                    if inner.contains('"') {
                        return None;
                    }
                    return Some(TokenKind::StringLiteral(inner.to_string()));
                }
                if is_identifier(lexeme) {
                    return Some(TokenKind::Identifier(lexeme.to_string()));
                }
                return None;
            }
        };
        Some(kind)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

/// A token as it appeared in the source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String) -> Self {
        Self { kind, lexeme }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_punctuation_and_operators() {
        assert_eq!(TokenKind::classify("("), Some(TokenKind::OpenParen));
        assert_eq!(TokenKind::classify("="), Some(TokenKind::Assign));
        assert_eq!(TokenKind::classify(";"), Some(TokenKind::Semicolon));
        assert_eq!(TokenKind::classify("x"), Some(TokenKind::Identifier("x".to_string())));
    }

    #[test]
    fn keyword_wins_over_identifier() {
        assert_eq!(TokenKind::classify("print"), Some(TokenKind::Keyword(Keyword::Print)));
        assert_eq!(
            TokenKind::classify("printer"),
            Some(TokenKind::Identifier("printer".to_string()))
        );
    }

    #[test]
    fn string_literal_keeps_inner_text() {
        assert_eq!(
            TokenKind::classify("\"a b\""),
            Some(TokenKind::StringLiteral("a b".to_string()))
        );
        assert_eq!(TokenKind::classify("\"\""), Some(TokenKind::StringLiteral(String::new())));
    }

    #[test]
    fn rejects_unknown_text() {
        assert_eq!(TokenKind::classify("10"), None);
        assert_eq!(TokenKind::classify("-"), None);
        assert_eq!(TokenKind::classify("\""), None);
    }
}
