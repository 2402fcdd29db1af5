//! Strict parser for textual set encodings.
//!
//! Rule miners serialize itemsets as `frozenset({'a', 'b'})`. The accepted
//! grammar:
//!
//! ```text
//! literal   := frozenset | set | list | tuple
//! frozenset := "frozenset" "(" [ set | list | tuple ] ")"
//! set       := "set" "(" [ list | tuple ] ")" | "{" items "}"
//! list      := "[" items "]"
//! tuple     := "(" items ")"
//! items     := [ string { "," string } [ "," ] ]
//! string    := '...' | "..."   with escapes \\ \' \" \n \t \r
//! ```
//!
//! `{}` is rejected: it is an empty dict, not an empty set.

use rulecast_core::errors::SetLiteralError;
use rulecast_core::models::{ItemId, ItemSet};

const EXPECT_STRING: &str = "a quoted string";
const EXPECT_SEPARATOR: &str = "`,` or a closing bracket";
const EXPECT_COLLECTION: &str = "`{`, `[`, `(`, `set(` or `frozenset(`";

/// Parse a complete set literal. Surrounding whitespace is allowed;
/// anything after the literal is an error.
pub fn parse_item_set(input: &str) -> Result<ItemSet, SetLiteralError> {
    let mut parser = Parser::new(input);
    let set = parser.literal()?;
    parser.skip_ws();
    if parser.pos < input.len() {
        return Err(SetLiteralError::TrailingInput { offset: parser.pos });
    }
    Ok(set)
}

/// Whether `input` starts like a literal rather than a bare list of names.
pub(crate) fn looks_like_literal(input: &str) -> bool {
    let trimmed = input.trim_start();
    if trimmed.starts_with(['{', '[', '(']) {
        return true;
    }
    ["frozenset", "set"].iter().any(|kw| {
        trimmed
            .strip_prefix(kw)
            .is_some_and(|rest| rest.trim_start().starts_with('('))
    })
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, want: char, expected: &'static str) -> Result<(), SetLiteralError> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(found) => Err(SetLiteralError::UnexpectedChar {
                offset: self.pos,
                found,
                expected,
            }),
            None => Err(SetLiteralError::UnexpectedEnd {
                offset: self.pos,
                expected,
            }),
        }
    }

    /// Consume `kw` if it appears as a whole word at the cursor.
    fn keyword(&mut self, kw: &str) -> bool {
        let rest = &self.src[self.pos..];
        let Some(after) = rest.strip_prefix(kw) else {
            return false;
        };
        if after
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            return false;
        }
        self.pos += kw.len();
        true
    }

    fn literal(&mut self) -> Result<ItemSet, SetLiteralError> {
        self.skip_ws();
        if self.keyword("frozenset") {
            return self.call(true);
        }
        if self.keyword("set") {
            return self.call(false);
        }
        self.collection(true)
    }

    /// `frozenset(...)` or `set(...)` after the keyword. `set` cannot wrap a
    /// brace literal; `frozenset` can.
    fn call(&mut self, allow_braces: bool) -> Result<ItemSet, SetLiteralError> {
        self.expect('(', "`(`")?;
        self.skip_ws();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(ItemSet::new());
        }
        let set = if allow_braces && self.keyword("set") {
            self.call(false)?
        } else {
            self.collection(allow_braces)?
        };
        self.expect(')', "`)`")?;
        Ok(set)
    }

    fn collection(&mut self, allow_braces: bool) -> Result<ItemSet, SetLiteralError> {
        self.skip_ws();
        let start = self.pos;
        let close = match self.peek() {
            Some('{') if allow_braces => '}',
            Some('[') => ']',
            Some('(') => ')',
            Some(found) => {
                return Err(SetLiteralError::UnexpectedChar {
                    offset: start,
                    found,
                    expected: EXPECT_COLLECTION,
                })
            }
            None => {
                return Err(SetLiteralError::UnexpectedEnd {
                    offset: start,
                    expected: EXPECT_COLLECTION,
                })
            }
        };
        self.bump();

        if close == '}' {
            self.skip_ws();
            if self.peek() == Some('}') {
                return Err(SetLiteralError::DictLiteral { offset: start });
            }
        }
        self.items(close)
    }

    fn items(&mut self, close: char) -> Result<ItemSet, SetLiteralError> {
        let mut set = ItemSet::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(close) {
                self.bump();
                return Ok(set);
            }
            set.insert(self.string()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(c) if c == close => return Ok(set),
                Some(found) => {
                    return Err(SetLiteralError::UnexpectedChar {
                        offset: self.pos - found.len_utf8(),
                        found,
                        expected: EXPECT_SEPARATOR,
                    })
                }
                None => {
                    return Err(SetLiteralError::UnexpectedEnd {
                        offset: self.pos,
                        expected: EXPECT_SEPARATOR,
                    })
                }
            }
        }
    }

    fn string(&mut self) -> Result<ItemId, SetLiteralError> {
        let start = self.pos;
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            Some(found) => {
                return Err(SetLiteralError::UnexpectedChar {
                    offset: start,
                    found,
                    expected: EXPECT_STRING,
                })
            }
            None => {
                return Err(SetLiteralError::UnexpectedEnd {
                    offset: start,
                    expected: EXPECT_STRING,
                })
            }
        };
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(SetLiteralError::UnterminatedString { offset: start }),
                Some(c) if c == quote => break,
                Some('\\') => {
                    let escape_at = self.pos - 1;
                    match self.bump() {
                        Some('\\') => value.push('\\'),
                        Some('\'') => value.push('\''),
                        Some('"') => value.push('"'),
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        Some(found) => {
                            return Err(SetLiteralError::InvalidEscape {
                                offset: escape_at,
                                found,
                            })
                        }
                        None => return Err(SetLiteralError::UnterminatedString { offset: start }),
                    }
                }
                Some(c) => value.push(c),
            }
        }

        ItemId::parse(value).map_err(|_| SetLiteralError::BlankItem { offset: start })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &ItemSet) -> Vec<&str> {
        set.iter().map(|i| i.as_str()).collect()
    }

    #[test]
    fn keyword_requires_word_boundary() {
        let mut p = Parser::new("settings");
        assert!(!p.keyword("set"));
        assert_eq!(p.pos, 0);
        let mut p = Parser::new("set(");
        assert!(p.keyword("set"));
        assert_eq!(p.pos, 3);
    }

    #[test]
    fn nested_set_call_inside_frozenset() {
        let set = parse_item_set("frozenset(set(['b', 'a']))").unwrap();
        assert_eq!(names(&set), vec!["a", "b"]);
    }

    #[test]
    fn detects_literal_prefixes() {
        assert!(looks_like_literal("  {'a'}"));
        assert!(looks_like_literal("frozenset ({'a'})"));
        assert!(looks_like_literal("set()"));
        assert!(!looks_like_literal("settings.com, mail.com"));
        assert!(!looks_like_literal("set.com"));
    }
}
