//! A minimal host that lays out a whole file.
//!
//! The driver is not a parser. It tracks just enough structure to give the
//! scanners a realistic parse stack: brackets, and compound statements whose
//! header line ends in `:`. Everything else is skipped byte by byte.

use std::mem;

use offside_scan::{
    is_ident_byte, is_line_break, Accepted, BlockContinuationScanner, ConstructKind,
    ContinuationKeywordScanner, Cursor, ExternalScanner, InputStream, LegacyKeywordScanner,
    LineBreakScanner, OpenConstruct, ParseStack, ScanConfig, ScanSession, SourceBuffer, TokenKind,
    COMPOUND, CONTINUATION_KEYWORDS, LEGACY_PRINT,
};
use tracing::debug;

use crate::stack::ConstructStack;

/// Words that start a compound statement when the line ends in `:`.
pub const COMPOUND_HEADS: &[&[u8]] = &[
    b"if", b"elif", b"else", b"for", b"while", b"def", b"class", b"try", b"except", b"finally",
    b"with",
];

/// A token produced by one of the scanners during a layout run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutToken {
    pub kind: TokenKind,
    pub start: u32,
    pub end: u32,
}

/// Walks a source buffer and collects every token the scanners accept.
#[derive(Debug)]
pub struct LayoutDriver {
    buf: SourceBuffer,
    session: ScanSession,
    stack: ConstructStack,
    tokens: Vec<LayoutToken>,
    /// First token of the current logical line, if it is a compound head.
    pending_compound: Option<u32>,
    /// Last byte of the last token on the current logical line.
    last_significant: u8,
}

impl LayoutDriver {
    pub fn new(source: &str, config: ScanConfig) -> Self {
        Self {
            buf: SourceBuffer::new(source),
            session: ScanSession::new(config),
            stack: ConstructStack::new(),
            tokens: Vec::new(),
            pending_compound: None,
            last_significant: 0,
        }
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.buf
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    /// Lay out the whole buffer.
    ///
    /// Each run starts from an empty construct stack. The stream's indent
    /// cache survives between runs, so a second run is served mostly from
    /// memoized depths.
    pub fn run(&mut self) -> Vec<LayoutToken> {
        self.stack.clear();
        self.pending_compound = None;
        self.last_significant = 0;

        let mut pos = 0;
        let mut at_line_start = true;

        loop {
            let mut cursor = Cursor::new(&self.buf, pos);
            cursor.eat_whitespace();
            pos = cursor.pos();
            let byte = cursor.current();

            if cursor.is_eof() || is_line_break(byte) {
                let Some(token) = self.scan(&LineBreakScanner, pos) else {
                    pos += 1;
                    continue;
                };
                match token.kind {
                    TokenKind::Eof => break,
                    TokenKind::Newline => {
                        self.end_logical_line();
                        at_line_start = true;
                    }
                    _ => {}
                }
                pos = token.end;
                continue;
            }

            if byte == self.session.config().comment_marker {
                pos = self.skip_comment(pos);
                continue;
            }

            if at_line_start {
                at_line_start = false;
                self.open_line(pos);
            }

            if let Some(next) = self.line_join(pos) {
                pos = next;
                continue;
            }

            pos = match byte {
                b'(' => self.open_bracket(ConstructKind::Paren, pos),
                b'[' => self.open_bracket(ConstructKind::List, pos),
                b'{' => self.open_bracket(ConstructKind::Dict, pos),
                b')' | b']' | b'}' => {
                    self.stack.pop_bracket();
                    pos + 1
                }
                b'"' | b'\'' => self.skip_string(pos, byte),
                _ if is_ident_byte(byte) => self.word(pos),
                _ => pos + 1,
            };
            self.last_significant = self.buf.byte_at(pos - 1);
        }

        debug!(
            tokens = self.tokens.len(),
            stream = %self.buf.id(),
            "layout complete"
        );
        mem::take(&mut self.tokens)
    }

    /// Run `scanner` against the current stack, keeping the token if one
    /// is accepted.
    fn scan(&mut self, scanner: &dyn ExternalScanner, pos: u32) -> Option<Accepted> {
        let accepted = self.session.run(scanner, &self.buf, &self.stack, pos)?;
        self.tokens.push(LayoutToken {
            kind: accepted.kind,
            start: pos,
            end: accepted.end,
        });
        Some(accepted)
    }

    /// Close finished blocks and bind continuation keywords at the first
    /// token of a logical line.
    fn open_line(&mut self, pos: u32) {
        self.last_significant = 0;

        let mut last_closed = None;
        while self.stack.innermost(COMPOUND).is_some() {
            match self.scan(&BlockContinuationScanner, pos) {
                Some(Accepted {
                    kind: TokenKind::BodyEnd,
                    ..
                }) => match self.stack.pop_compound() {
                    Some(closed) => last_closed = Some(closed),
                    None => break,
                },
                _ => break,
            }
        }

        let cursor = Cursor::new(&self.buf, pos);
        let is_head = COMPOUND_HEADS.iter().any(|word| cursor.at_word(word));
        let is_continuation = CONTINUATION_KEYWORDS
            .iter()
            .any(|(word, _)| cursor.at_word(word));
        self.pending_compound = is_head.then_some(pos);

        if !is_continuation {
            return;
        }

        // The keyword is measured against the statement it would continue,
        // which the loop above has just closed.
        if let Some(closed) = last_closed {
            self.stack.push(closed);
        }
        let bound = self.scan(&ContinuationKeywordScanner, pos).is_some();
        match (bound, last_closed) {
            (true, Some(_)) => self.pending_compound = None,
            (false, Some(_)) => {
                self.stack.pop_compound();
            }
            (_, None) => {}
        }
    }

    fn end_logical_line(&mut self) {
        if let Some(start) = self.pending_compound.take() {
            if self.last_significant == b':' {
                self.stack.push(OpenConstruct::new(
                    ConstructKind::CompoundStatement,
                    start,
                ));
            }
        }
    }

    fn open_bracket(&mut self, kind: ConstructKind, pos: u32) -> u32 {
        self.stack.push(OpenConstruct::new(kind, pos));
        pos + 1
    }

    fn word(&mut self, start: u32) -> u32 {
        let mut cursor = Cursor::new(&self.buf, start);
        while is_ident_byte(cursor.current()) {
            cursor.advance();
        }
        let end = cursor.pos();
        if self.buf.read(start, end) == LEGACY_PRINT {
            self.scan(&LegacyKeywordScanner, start);
        }
        end
    }

    /// End of a `\` line join at `pos`, if there is one.
    ///
    /// The joined line break belongs to the same logical line, so it is never
    /// offered to the newline scanner. `\r\n` counts as one break.
    fn line_join(&self, pos: u32) -> Option<u32> {
        if self.buf.byte_at(pos) != b'\\' {
            return None;
        }
        match (self.buf.byte_at(pos + 1), self.buf.byte_at(pos + 2)) {
            (b'\r', b'\n') => Some(pos + 3),
            (b'\n' | b'\r', _) => Some(pos + 2),
            _ => None,
        }
    }

    fn skip_comment(&self, start: u32) -> u32 {
        let mut cursor = Cursor::new(&self.buf, start);
        while !cursor.is_eof() && !is_line_break(cursor.current()) {
            cursor.advance();
        }
        cursor.pos()
    }

    /// Skip a string literal starting at its opening quote.
    ///
    /// Single-quoted strings stop at the closing quote or the end of the
    /// line; triple-quoted strings may span lines. A backslash skips the
    /// following byte.
    fn skip_string(&self, start: u32, quote: u8) -> u32 {
        let mut cursor = Cursor::new(&self.buf, start);
        let triple = cursor.peek() == quote && self.buf.byte_at(start + 2) == quote;

        if triple {
            cursor.advance_n(3);
            while !cursor.is_eof() {
                let pos = cursor.pos();
                match cursor.current() {
                    b'\\' => cursor.advance_n(2),
                    b if b == quote
                        && self.buf.byte_at(pos + 1) == quote
                        && self.buf.byte_at(pos + 2) == quote =>
                    {
                        cursor.advance_n(3);
                        break;
                    }
                    _ => cursor.advance(),
                }
            }
        } else {
            cursor.advance();
            while !cursor.is_eof() {
                let b = cursor.current();
                if is_line_break(b) {
                    break;
                }
                cursor.advance();
                if b == quote {
                    break;
                }
                if b == b'\\' && !is_line_break(cursor.current()) {
                    cursor.advance();
                }
            }
        }

        cursor.pos().min(self.buf.len())
    }
}
