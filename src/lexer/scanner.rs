use crate::lexer::{Keyword, Token, TokenKind};
use tracing::trace;

/// Lazy left-to-right scanner over a single source line.
///
/// At every position the patterns are tried in a fixed order: the `print`
/// keyword, parentheses, string literals, identifiers, then single-character
/// operators. Anything that matches none of them is skipped without error.
pub struct Scanner<'a> {
    input: &'a str,
    current: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, current: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.current..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    fn take(&mut self, len: usize) -> Option<Token> {
        let lexeme = &self.rest()[..len];
        let kind = TokenKind::classify(lexeme)?;
        self.current += len;
        Some(Token::new(kind, lexeme.to_string()))
    }

    /// Length of the token starting at the current position, if any.
    fn match_len(&self) -> Option<usize> {
        let rest = self.rest();
        let keyword = Keyword::Print.as_str();
        if rest.starts_with(keyword) {
            return Some(keyword.len());
        }

        match self.peek()? {
            '(' | ')' => Some(1),
            '"' => self.string_literal_len(),
            ch if ch.is_ascii_alphabetic() || ch == '_' => Some(
                rest.find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
                    .unwrap_or(rest.len()),
            ),
            '+' | '*' | '/' | '=' | ';' => Some(1),
            _ => None,
        }
    }

    /// Shortest span up to the next quote on the same line. An unterminated
    /// quote is not a token.
    fn string_literal_len(&self) -> Option<usize> {
        let body = &self.rest()[1..];
        let close = body.find(|ch: char| ch == '"' || ch == '\n')?;
        body[close..].starts_with('"').then_some(close + 2)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.is_at_end() {
            if let Some(token) = self.match_len().and_then(|len| self.take(len)) {
                trace!(lexeme = %token.lexeme, kind = ?token.kind, "scanned token");
                return Some(token);
            }
            self.advance();
        }
        None
    }
}

// Convenience function for tokenizing a line
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn declaration_drops_integer_literal() {
        assert_eq!(lexemes("int x = 10;"), ["int", "x", "=", ";"]);
    }

    #[test]
    fn print_with_string_literal() {
        let tokens = tokenize("print(\"Hello\");");
        assert_eq!(
            tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
            vec![
                TokenKind::Keyword(Keyword::Print),
                TokenKind::OpenParen,
                TokenKind::StringLiteral("Hello".to_string()),
                TokenKind::CloseParen,
                TokenKind::Semicolon,
            ]
        );
        assert_eq!(tokens[2].lexeme, "\"Hello\"");
    }

    #[test]
    fn print_prefix_splits_identifier() {
        assert_eq!(lexemes("printer;"), ["print", "er", ";"]);
        assert_eq!(lexemes("x_print"), ["x_print"]);
    }

    #[test]
    fn string_literal_is_non_greedy() {
        assert_eq!(lexemes("\"a\" + \"b\""), ["\"a\"", "+", "\"b\""]);
    }

    #[test]
    fn unterminated_quote_is_skipped() {
        assert_eq!(lexemes("print(\"abc);"), ["print", "(", "abc", ")", ";"]);
    }

    #[test]
    fn unsupported_characters_are_skipped() {
        assert_eq!(lexemes("a - b % 3 * c"), ["a", "b", "*", "c"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn identifiers_may_contain_digits_after_first_char() {
        assert_eq!(lexemes("x1 = 2y;"), ["x1", "=", "y", ";"]);
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert_eq!(lexemes("é = ü;"), ["=", ";"]);
        assert_eq!(lexemes("print(\"héllo\");")[2], "\"héllo\"");
    }

    #[test]
    fn tokenizing_is_repeatable() {
        let line = "float y = 3; print(y);";
        assert_eq!(tokenize(line), tokenize(line));
    }

    #[test]
    fn scanner_is_lazy() {
        let mut scanner = Scanner::new("a b c");
        assert_eq!(scanner.next().map(|t| t.lexeme), Some("a".to_string()));
        assert_eq!(scanner.count(), 2);
    }
}
