//! Recursive-descent parser for MobilityDB textual temporal literals.
//!
//! The grammar is LL(1) at every level; whitespace is insignificant before
//! and after every token and delimiter:
//!
//! ```text
//! instant      = value '@' timestamp
//! instant-set  = '{' instant (',' instant)* '}'
//! sequence     = ['Interp=Stepwise;'] ('[' | '(') instant (',' instant)* (']' | ')')
//! sequence-set = ['Interp=Stepwise;'] '{' sequence (',' sequence)* '}'
//! ```
//!
//! `value` is any non-empty run of characters excluding `@`; `timestamp` is
//! any non-empty run excluding `,`, `}`, `]`, `)`. Both come back as trimmed
//! slices of the input. The parser checks grammar only; it does not order
//! timestamps or validate the value's own syntax, which is the consuming
//! native constructor's job.

use std::fmt::{Display, Formatter};

use crate::error::ParseError;

const STEPWISE_PREFIX: &str = "Interp=Stepwise;";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Interp {
    Linear,
    Stepwise,
}

impl Display for Interp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Interp::Linear => "Linear",
            Interp::Stepwise => "Stepwise",
        };
        f.write_str(s)
    }
}

/// A `value@timestamp` pair, both kept as raw slices of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInstant<'a> {
    pub value: &'a str,
    pub timestamp: &'a str,
}

/// An ordered run of instants with bound inclusivity. `interp` is
/// `Some(Stepwise)` when the literal carried the prefix and `None` otherwise;
/// the caller picks the default by base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSequence<'a> {
    pub instants: Vec<ParsedInstant<'a>>,
    pub lower_inc: bool,
    pub upper_inc: bool,
    pub interp: Option<Interp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSequenceSet<'a> {
    pub sequences: Vec<ParsedSequence<'a>>,
    pub interp: Option<Interp>,
}

/// One of the four literal forms, as returned by [`parse_temporal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporalLiteral<'a> {
    Instant(ParsedInstant<'a>),
    InstantSet(Vec<ParsedInstant<'a>>),
    Sequence(ParsedSequence<'a>),
    SequenceSet(ParsedSequenceSet<'a>),
}

pub fn parse_instant(input: &str) -> Result<ParsedInstant<'_>, ParseError> {
    let mut cur = Cursor::new(input);
    let inst = cur.instant()?;
    cur.finish()?;
    Ok(inst)
}

pub fn parse_instant_set(input: &str) -> Result<Vec<ParsedInstant<'_>>, ParseError> {
    let mut cur = Cursor::new(input);
    let instants = cur.instant_set()?;
    cur.finish()?;
    Ok(instants)
}

pub fn parse_sequence(input: &str) -> Result<ParsedSequence<'_>, ParseError> {
    let mut cur = Cursor::new(input);
    let seq = cur.sequence()?;
    cur.finish()?;
    Ok(seq)
}

pub fn parse_sequence_set(input: &str) -> Result<ParsedSequenceSet<'_>, ParseError> {
    let mut cur = Cursor::new(input);
    let set = cur.sequence_set()?;
    cur.finish()?;
    Ok(set)
}

/// Parses any of the four forms, dispatching on the first significant
/// characters: a bound or stepwise prefix opens a sequence, a brace opens one
/// of the set forms (telling them apart needs one more character of
/// lookahead), anything else is a bare instant.
pub fn parse_temporal(input: &str) -> Result<TemporalLiteral<'_>, ParseError> {
    let mut cur = Cursor::new(input);
    cur.skip_ws();
    let lit = if cur.rest().starts_with(STEPWISE_PREFIX) {
        if after_prefix_opens_brace(cur.rest()) {
            TemporalLiteral::SequenceSet(cur.sequence_set()?)
        } else {
            TemporalLiteral::Sequence(cur.sequence()?)
        }
    } else {
        match cur.peek() {
            Some('[') | Some('(') => TemporalLiteral::Sequence(cur.sequence()?),
            Some('{') => {
                if brace_opens_sequence_set(cur.rest()) {
                    TemporalLiteral::SequenceSet(cur.sequence_set()?)
                } else {
                    TemporalLiteral::InstantSet(cur.instant_set()?)
                }
            }
            _ => TemporalLiteral::Instant(cur.instant()?),
        }
    };
    cur.finish()?;
    Ok(lit)
}

fn after_prefix_opens_brace(rest: &str) -> bool {
    rest[STEPWISE_PREFIX.len()..].trim_start().starts_with('{')
}

fn brace_opens_sequence_set(rest: &str) -> bool {
    let body = rest[1..].trim_start();
    body.starts_with('[') || body.starts_with('(') || body.starts_with(STEPWISE_PREFIX)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected,
                offset: self.pos,
            })
        }
    }

    /// Consumes the longest run for which `keep` holds; the returned slice is
    /// right-trimmed so trailing whitespace before a delimiter is dropped.
    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let end = rest.find(|c| !keep(c)).unwrap_or(rest.len());
        self.pos += end;
        rest[..end].trim_end()
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        self.skip_ws();
        if self.pos == self.src.len() {
            Ok(())
        } else {
            Err(ParseError::Trailing { offset: self.pos })
        }
    }

    fn instant(&mut self) -> Result<ParsedInstant<'a>, ParseError> {
        self.skip_ws();
        let start = self.pos;
        let value = self.take_while(|c| c != '@');
        if value.is_empty() {
            return Err(ParseError::Empty {
                what: "value",
                offset: start,
            });
        }
        self.expect('@', "`@`")?;
        self.skip_ws();
        let start = self.pos;
        let timestamp = self.take_while(|c| !matches!(c, ',' | '}' | ']' | ')'));
        if timestamp.is_empty() {
            return Err(ParseError::Empty {
                what: "timestamp",
                offset: start,
            });
        }
        Ok(ParsedInstant { value, timestamp })
    }

    fn instant_set(&mut self) -> Result<Vec<ParsedInstant<'a>>, ParseError> {
        self.skip_ws();
        self.expect('{', "`{`")?;
        self.skip_ws();
        if self.peek() == Some('}') {
            return Err(ParseError::Empty {
                what: "instant list",
                offset: self.pos,
            });
        }
        let instants = self.sep_by1(Cursor::instant)?;
        self.expect('}', "`}`")?;
        Ok(instants)
    }

    fn sequence(&mut self) -> Result<ParsedSequence<'a>, ParseError> {
        let interp = self.interp_prefix();
        self.skip_ws();
        let lower_inc = if self.eat('[') {
            true
        } else if self.eat('(') {
            false
        } else {
            return Err(ParseError::Expected {
                expected: "`[` or `(`",
                offset: self.pos,
            });
        };
        self.skip_ws();
        if matches!(self.peek(), Some(']') | Some(')')) {
            return Err(ParseError::Empty {
                what: "instant list",
                offset: self.pos,
            });
        }
        let instants = self.sep_by1(Cursor::instant)?;
        let upper_inc = if self.eat(']') {
            true
        } else if self.eat(')') {
            false
        } else {
            return Err(ParseError::Expected {
                expected: "`]` or `)`",
                offset: self.pos,
            });
        };
        Ok(ParsedSequence {
            instants,
            lower_inc,
            upper_inc,
            interp,
        })
    }

    fn sequence_set(&mut self) -> Result<ParsedSequenceSet<'a>, ParseError> {
        let interp = self.interp_prefix();
        self.skip_ws();
        self.expect('{', "`{`")?;
        self.skip_ws();
        if self.peek() == Some('}') {
            return Err(ParseError::Empty {
                what: "sequence list",
                offset: self.pos,
            });
        }
        let sequences = self.sep_by1(Cursor::sequence)?;
        self.expect('}', "`}`")?;
        Ok(ParsedSequenceSet { sequences, interp })
    }

    fn interp_prefix(&mut self) -> Option<Interp> {
        self.skip_ws();
        if self.rest().starts_with(STEPWISE_PREFIX) {
            self.pos += STEPWISE_PREFIX.len();
            Some(Interp::Stepwise)
        } else {
            None
        }
    }

    /// One or more `p`, separated by commas. Leaves the cursor just past the
    /// whitespace after the last element.
    fn sep_by1<T>(
        &mut self,
        p: impl Fn(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![p(self)?];
        loop {
            self.skip_ws();
            if self.eat(',') {
                items.push(p(self)?);
            } else {
                return Ok(items);
            }
        }
    }
}

impl Display for ParsedInstant<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.value, self.timestamp)
    }
}

impl Display for ParsedSequence<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.interp == Some(Interp::Stepwise) {
            f.write_str(STEPWISE_PREFIX)?;
        }
        f.write_str(if self.lower_inc { "[" } else { "(" })?;
        for (i, inst) in self.instants.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{inst}")?;
        }
        f.write_str(if self.upper_inc { "]" } else { ")" })
    }
}

impl Display for ParsedSequenceSet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.interp == Some(Interp::Stepwise) {
            f.write_str(STEPWISE_PREFIX)?;
        }
        f.write_str("{")?;
        for (i, seq) in self.sequences.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{seq}")?;
        }
        f.write_str("}")
    }
}

impl Display for TemporalLiteral<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TemporalLiteral::Instant(inst) => write!(f, "{inst}"),
            TemporalLiteral::InstantSet(instants) => {
                f.write_str("{")?;
                for (i, inst) in instants.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{inst}")?;
                }
                f.write_str("}")
            }
            TemporalLiteral::Sequence(seq) => write!(f, "{seq}"),
            TemporalLiteral::SequenceSet(set) => write!(f, "{set}"),
        }
    }
}
