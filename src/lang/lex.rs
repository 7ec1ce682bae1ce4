use super::token::Token;

/// Split source text into classified tokens.
///
/// Words are separated by runs of whitespace, processed line by line in
/// input order and left to right within a line. A double quote opens a
/// region in which whitespace does not split; the region closes at the
/// next quote or at the end of the line. String literals never span
/// lines.
///
/// Pure and deterministic: the same source always yields the same token
/// sequence. Empty input yields an empty sequence; whether that is a
/// valid program is the engine's call.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = vec![];
    for line in source.lines() {
        tokens.extend(GoofyLexer::new(line));
    }
    tokens
}

fn is_goofy_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

struct GoofyLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> GoofyLexer<'a> {
    fn new(line: &'a str) -> GoofyLexer<'a> {
        GoofyLexer {
            chars: line.chars().peekable(),
        }
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_goofy_whitespace(*pk) {
                return;
            }
            self.chars.next();
        }
    }

    fn word(&mut self) -> String {
        let mut s = String::new();
        let mut quoted = false;
        while let Some(pk) = self.chars.peek() {
            let ch = *pk;
            if is_goofy_whitespace(ch) && !quoted {
                break;
            }
            if ch == '"' {
                quoted = !quoted;
            }
            s.push(ch);
            self.chars.next();
        }
        s
    }
}

impl<'a> Iterator for GoofyLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.whitespace();
        self.chars.peek()?;
        Some(Token::new(&self.word()))
    }
}
