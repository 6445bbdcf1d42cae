// Mailbox parsing for registration emails.
//
// Accepts the forms a mail client would: `local@domain`, `<local@domain>` and
// `Display Name <local@domain>`, with surrounding whitespace. Comments, groups
// and address lists are not supported; a second mailbox is reported as
// trailing input.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailAddressError {
    #[error("email address is empty")]
    Empty,

    #[error("missing '@' separator")]
    MissingAt,

    #[error("invalid local part")]
    InvalidLocalPart,

    #[error("invalid domain")]
    InvalidDomain,

    #[error("invalid quoted string")]
    InvalidQuotedString,

    #[error("expected '<' before the address")]
    ExpectedAngleBracket,

    #[error("missing closing '>'")]
    UnclosedAngleBracket,

    #[error("unexpected trailing input: {0:?}")]
    TrailingInput(String),

    #[error("address {parsed:?} does not match the input exactly")]
    NotExact { parsed: String },
}

/// A single `local@domain` address. Both parts keep their source spelling,
/// including quotes and domain-literal brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local_part: String,
    domain: String,
}

impl EmailAddress {
    /// Parse `input` as one mailbox and require the rendered address to equal
    /// `input` byte for byte.
    pub fn parse_exact(input: &str) -> Result<Self, EmailAddressError> {
        let address = parse_mailbox(input)?;
        let rendered = address.to_string();
        if rendered != input {
            return Err(EmailAddressError::NotExact { parsed: rendered });
        }
        Ok(address)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

/// Parse one mailbox and return its address, dropping any display name.
fn parse_mailbox(input: &str) -> Result<EmailAddress, EmailAddressError> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    if cursor.is_at_end() {
        return Err(EmailAddressError::Empty);
    }

    let start = cursor.pos;
    let bare_error = match cursor.addr_spec() {
        Ok(address) => {
            cursor.skip_whitespace();
            if cursor.is_at_end() {
                return Ok(address);
            }
            EmailAddressError::TrailingInput(cursor.rest().to_string())
        }
        Err(error) => error,
    };

    cursor.pos = start;
    let address = match cursor.name_addr() {
        Ok(address) => address,
        Err(EmailAddressError::ExpectedAngleBracket) => return Err(bare_error),
        Err(error) => return Err(error),
    };
    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        return Err(EmailAddressError::TrailingInput(cursor.rest().to_string()));
    }
    Ok(address)
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.slice_from(start)
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    fn addr_spec(&mut self) -> Result<EmailAddress, EmailAddressError> {
        let local_part = if self.peek() == Some('"') {
            self.quoted_string()?
        } else {
            self.dot_atom().ok_or(EmailAddressError::InvalidLocalPart)?
        };
        if !self.eat('@') {
            return Err(EmailAddressError::MissingAt);
        }
        let domain = if self.peek() == Some('[') {
            self.domain_literal()?
        } else {
            self.dot_atom().ok_or(EmailAddressError::InvalidDomain)?
        };
        Ok(EmailAddress {
            local_part: local_part.to_string(),
            domain: domain.to_string(),
        })
    }

    fn name_addr(&mut self) -> Result<EmailAddress, EmailAddressError> {
        self.skip_phrase()?;
        self.skip_whitespace();
        if !self.eat('<') {
            return Err(EmailAddressError::ExpectedAngleBracket);
        }
        let address = self.addr_spec()?;
        if !self.eat('>') {
            return Err(EmailAddressError::UnclosedAngleBracket);
        }
        Ok(address)
    }

    // Atoms may contain '.' here, as older mailers emit unquoted initials.
    fn skip_phrase(&mut self) -> Result<(), EmailAddressError> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('"') => {
                    self.quoted_string()?;
                }
                Some(c) if is_atext(c) || c == '.' => {
                    self.eat_while(|c| is_atext(c) || c == '.');
                }
                _ => return Ok(()),
            }
        }
    }

    fn dot_atom(&mut self) -> Option<&'a str> {
        let start = self.pos;
        loop {
            if self.eat_while(is_atext).is_empty() {
                return None;
            }
            if !self.eat('.') {
                break;
            }
        }
        Some(self.slice_from(start))
    }

    fn quoted_string(&mut self) -> Result<&'a str, EmailAddressError> {
        let start = self.pos;
        if !self.eat('"') {
            return Err(EmailAddressError::InvalidQuotedString);
        }
        loop {
            match self.bump() {
                Some('"') => break,
                Some('\\') => {
                    if self.bump().is_none() {
                        return Err(EmailAddressError::InvalidQuotedString);
                    }
                }
                Some('\r' | '\n') | None => return Err(EmailAddressError::InvalidQuotedString),
                Some(_) => {}
            }
        }
        Ok(self.slice_from(start))
    }

    fn domain_literal(&mut self) -> Result<&'a str, EmailAddressError> {
        let start = self.pos;
        if !self.eat('[') {
            return Err(EmailAddressError::InvalidDomain);
        }
        self.eat_while(is_dtext);
        if !self.eat(']') {
            return Err(EmailAddressError::InvalidDomain);
        }
        Ok(self.slice_from(start))
    }
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || "!#$%&'*+-/=?^_`{|}~".contains(c)
        || (!c.is_ascii() && !c.is_whitespace())
}

fn is_dtext(c: char) -> bool {
    c.is_ascii_graphic() && !matches!(c, '[' | ']' | '\\')
}
