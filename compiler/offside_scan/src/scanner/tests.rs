use super::*;
use crate::stack::{ConstructKind, OpenConstruct};
use crate::token::{Accepted, TokenKind};
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Run `scanner` once at `pos` with an explicit cache.
fn scan_with(
    scanner: &dyn ExternalScanner,
    buf: &SourceBuffer,
    stack: &Vec<OpenConstruct>,
    cache: &mut IndentCache,
    pos: u32,
) -> Option<Accepted> {
    let config = ScanConfig::default();
    let mut cx = ScanContext::new(buf, stack, cache, &config);
    let mut token = ScanToken::new(pos);
    scanner.scan(&mut cx, &mut token);
    token.accepted()
}

/// Run `scanner` once at `pos` with a cold cache.
fn scan(
    scanner: &dyn ExternalScanner,
    source: &str,
    stack: &[OpenConstruct],
    pos: u32,
) -> Option<Accepted> {
    let buf = SourceBuffer::new(source);
    let mut cache = IndentCache::new();
    scan_with(scanner, &buf, &stack.to_vec(), &mut cache, pos)
}

fn accepted(kind: TokenKind, end: u32) -> Option<Accepted> {
    Some(Accepted { kind, end })
}

fn compound(start: u32) -> OpenConstruct {
    OpenConstruct::new(ConstructKind::CompoundStatement, start)
}

// === LineBreakScanner ===

#[test]
fn eof_is_zero_width() {
    assert_eq!(
        scan(&LineBreakScanner, "x", &[], 1),
        accepted(TokenKind::Eof, 1)
    );
    assert_eq!(
        scan(&LineBreakScanner, "", &[], 0),
        accepted(TokenKind::Eof, 0)
    );
}

#[test]
fn declines_off_a_line_break() {
    assert_eq!(scan(&LineBreakScanner, "x = 1\n", &[], 0), None);
}

#[test]
fn statement_newline_records_next_line() {
    let buf = SourceBuffer::new("if a:\n    b\n");
    let mut cache = IndentCache::new();
    assert_eq!(
        scan_with(&LineBreakScanner, &buf, &vec![], &mut cache, 5),
        accepted(TokenKind::Newline, 6)
    );
    assert_eq!(cache.current(), Some((10, 4)));
}

#[test]
fn newline_inside_brackets_is_suppressed() {
    let stack = vec![
        compound(0),
        OpenConstruct::new(ConstructKind::Paren, 8),
    ];
    let buf = SourceBuffer::new("if a:\n  f(x,\ny)\n");
    let mut cache = IndentCache::new();
    assert_eq!(
        scan_with(&LineBreakScanner, &buf, &stack, &mut cache, 12),
        accepted(TokenKind::BracketNewline, 13)
    );
    assert_eq!(cache, IndentCache::new());
}

#[test]
fn every_bracketed_kind_suppresses() {
    for &kind in crate::stack::BRACKETED {
        let stack = [OpenConstruct::new(kind, 0)];
        assert_eq!(
            scan(&LineBreakScanner, "[\n    # c\n]", &stack, 1),
            accepted(TokenKind::BracketNewline, 2),
            "{kind:?}"
        );
    }
}

#[test]
fn blank_line_is_absorbed() {
    assert_eq!(
        scan(&LineBreakScanner, "x\n   \ny", &[], 1),
        accepted(TokenKind::BlankLineNewline, 2)
    );
    assert_eq!(
        scan(&LineBreakScanner, "x\n\ny", &[], 1),
        accepted(TokenKind::BlankLineNewline, 2)
    );
}

#[test]
fn comment_line_is_absorbed() {
    assert_eq!(
        scan(&LineBreakScanner, "x\n    # note\ny", &[], 1),
        accepted(TokenKind::BlankLineNewline, 2)
    );
    // The comment marker ends the scan even when more text follows.
    assert_eq!(
        scan(&LineBreakScanner, "x\n#a\n#b\ny", &[], 1),
        accepted(TokenKind::BlankLineNewline, 2)
    );
}

#[test]
fn trailing_whitespace_at_eof_is_absorbed() {
    assert_eq!(
        scan(&LineBreakScanner, "x\n  \t", &[], 1),
        accepted(TokenKind::BlankLineNewline, 2)
    );
}

#[test]
fn blank_lines_leave_recorded_depth_alone() {
    let buf = SourceBuffer::new("if a:\n    b\n  \n    c");
    let mut cache = IndentCache::new();
    scan_with(&LineBreakScanner, &buf, &vec![], &mut cache, 5);
    assert_eq!(cache.current(), Some((10, 4)));

    assert_eq!(
        scan_with(&LineBreakScanner, &buf, &vec![], &mut cache, 11),
        accepted(TokenKind::BlankLineNewline, 12)
    );
    assert_eq!(cache.current(), Some((10, 4)));

    assert_eq!(
        scan_with(&LineBreakScanner, &buf, &vec![], &mut cache, 14),
        accepted(TokenKind::Newline, 15)
    );
    assert_eq!(cache.current(), Some((19, 4)));
}

#[test]
fn crlf_absorbs_the_carriage_return() {
    let buf = SourceBuffer::new("a\r\n  b");
    let mut cache = IndentCache::new();
    assert_eq!(
        scan_with(&LineBreakScanner, &buf, &vec![], &mut cache, 1),
        accepted(TokenKind::BlankLineNewline, 2)
    );
    assert_eq!(
        scan_with(&LineBreakScanner, &buf, &vec![], &mut cache, 2),
        accepted(TokenKind::Newline, 3)
    );
    assert_eq!(cache.current(), Some((5, 2)));
}

#[test]
fn newline_expands_tabs() {
    let cases: &[(&str, u32, u32)] = &[
        ("x\n\ty", 3, 8),
        ("x\n       \ty", 10, 8),
        ("x\n        \ty", 11, 16),
    ];
    for &(source, pos, depth) in cases {
        let buf = SourceBuffer::new(source);
        let mut cache = IndentCache::new();
        scan_with(&LineBreakScanner, &buf, &vec![], &mut cache, 1);
        assert_eq!(cache.current(), Some((pos, depth)), "{source:?}");
    }
}

#[test]
fn custom_comment_marker() {
    let buf = SourceBuffer::new("x\n; note\n# not a comment\n");
    let stack: Vec<OpenConstruct> = vec![];
    let config = ScanConfig::default().with_comment_marker(b';');

    let mut cache = IndentCache::new();
    let mut cx = ScanContext::new(&buf, &stack, &mut cache, &config);
    let mut token = ScanToken::new(1);
    LineBreakScanner.scan(&mut cx, &mut token);
    assert_eq!(token.accepted(), accepted(TokenKind::BlankLineNewline, 2));

    let mut token = ScanToken::new(8);
    LineBreakScanner.scan(&mut cx, &mut token);
    assert_eq!(token.accepted(), accepted(TokenKind::Newline, 9));
}

// === BlockContinuationScanner ===

#[test]
fn equal_indent_ends_body() {
    // `if` at column 2; the next line is also at column 2.
    let source = "  if a:\n  b\n";
    assert_eq!(
        scan(&BlockContinuationScanner, source, &[compound(2)], 10),
        accepted(TokenKind::BodyEnd, 10)
    );
}

#[test]
fn deeper_indent_continues_body() {
    let source = "  if a:\n    b\n";
    assert_eq!(
        scan(&BlockContinuationScanner, source, &[compound(2)], 12),
        accepted(TokenKind::BodyContinue, 12)
    );
}

#[test]
fn shallower_indent_ends_body() {
    let source = "    if a:\n        b\n  c\n";
    assert_eq!(
        scan(&BlockContinuationScanner, source, &[compound(4)], 22),
        accepted(TokenKind::BodyEnd, 22)
    );
}

#[test]
fn top_level_baseline_is_zero() {
    assert_eq!(
        scan(&BlockContinuationScanner, "x\n", &[], 0),
        accepted(TokenKind::BodyEnd, 0)
    );
    assert_eq!(
        scan(&BlockContinuationScanner, "  x\n", &[], 2),
        accepted(TokenKind::BodyContinue, 2)
    );
}

#[test]
fn uses_innermost_compound() {
    let source = "if a:\n    while b:\n        c\n    d\n";
    let stack = [compound(0), compound(10)];
    assert_eq!(
        scan(&BlockContinuationScanner, source, &stack, 27),
        accepted(TokenKind::BodyContinue, 27)
    );
    assert_eq!(
        scan(&BlockContinuationScanner, source, &stack, 33),
        accepted(TokenKind::BodyEnd, 33)
    );
    assert_eq!(
        scan(&BlockContinuationScanner, source, &stack[..1], 33),
        accepted(TokenKind::BodyContinue, 33)
    );
}

#[test]
fn body_scanner_reuses_newline_record() {
    let buf = SourceBuffer::new("if a:\n\tb\n");
    let stack = vec![compound(0)];
    let mut cache = IndentCache::new();
    scan_with(&LineBreakScanner, &buf, &stack, &mut cache, 5);
    assert_eq!(cache.current(), Some((7, 8)));
    assert_eq!(
        scan_with(&BlockContinuationScanner, &buf, &stack, &mut cache, 7),
        accepted(TokenKind::BodyContinue, 7)
    );
}

// === ContinuationKeywordScanner ===

#[test]
fn else_at_statement_depth_binds() {
    let source = "if a:\n    b\nelse:\n    c\n";
    assert_eq!(
        scan(&ContinuationKeywordScanner, source, &[compound(0)], 12),
        accepted(TokenKind::Else, 16)
    );
}

#[test]
fn else_at_nested_depth_is_declined() {
    let source = "if a:\n    b\n    else:\n";
    assert_eq!(
        scan(&ContinuationKeywordScanner, source, &[compound(0)], 16),
        None
    );
}

#[test]
fn else_binds_to_nested_statement_at_its_depth() {
    let source = "if a:\n    if b:\n        c\n    else:\n";
    let stack = [compound(0), compound(10)];
    assert_eq!(
        scan(&ContinuationKeywordScanner, source, &stack, 30),
        accepted(TokenKind::Else, 34)
    );
}

#[test]
fn all_continuation_keywords() {
    let cases: &[(&str, TokenKind, u32)] = &[
        ("elif x:", TokenKind::Elif, 4),
        ("else:", TokenKind::Else, 4),
        ("except E:", TokenKind::Except, 6),
        ("finally:", TokenKind::Finally, 7),
    ];
    for &(source, kind, end) in cases {
        assert_eq!(
            scan(&ContinuationKeywordScanner, source, &[compound(0)], 0),
            accepted(kind, end),
            "{source:?}"
        );
    }
}

#[test]
fn keyword_needs_word_boundary() {
    for source in ["elsewhere = 1", "else_ = 1", "elifant", "finally2", "exception"] {
        assert_eq!(
            scan(&ContinuationKeywordScanner, source, &[compound(0)], 0),
            None,
            "{source:?}"
        );
    }
}

#[test]
fn other_words_are_declined() {
    assert_eq!(
        scan(&ContinuationKeywordScanner, "pass", &[compound(0)], 0),
        None
    );
}

#[test]
fn keyword_at_top_level_uses_zero_baseline() {
    assert_eq!(
        scan(&ContinuationKeywordScanner, "else:", &[], 0),
        accepted(TokenKind::Else, 4)
    );
    assert_eq!(scan(&ContinuationKeywordScanner, "x\n  else:", &[], 4), None);
}

// === LegacyKeywordScanner ===

#[test]
fn print_call_is_an_identifier() {
    assert_eq!(scan(&LegacyKeywordScanner, "print(x)", &[], 0), None);
    assert_eq!(scan(&LegacyKeywordScanner, "print (x)", &[], 0), None);
}

#[test]
fn print_statement_is_the_keyword() {
    assert_eq!(
        scan(&LegacyKeywordScanner, "print x", &[], 0),
        accepted(TokenKind::Print, 5)
    );
    assert_eq!(
        scan(&LegacyKeywordScanner, "print\t'hi'", &[], 0),
        accepted(TokenKind::Print, 5)
    );
    assert_eq!(
        scan(&LegacyKeywordScanner, "print >>f, x", &[], 0),
        accepted(TokenKind::Print, 5)
    );
}

#[test]
fn longer_identifier_is_declined() {
    assert_eq!(scan(&LegacyKeywordScanner, "printer = 1", &[], 0), None);
    assert_eq!(scan(&LegacyKeywordScanner, "print_x = 1", &[], 0), None);
}

#[test]
fn attribute_newline_and_comment_decline() {
    for source in ["print.x", "print .x", "print\n", "print  \r\n", "print # c"] {
        assert_eq!(scan(&LegacyKeywordScanner, source, &[], 0), None, "{source:?}");
    }
}

#[test]
fn other_words_never_print() {
    assert_eq!(scan(&LegacyKeywordScanner, "prin x", &[], 0), None);
    assert_eq!(scan(&LegacyKeywordScanner, "x = print", &[], 0), None);
}

#[test]
fn print_mid_line() {
    assert_eq!(
        scan(&LegacyKeywordScanner, "if a: print a", &[], 6),
        accepted(TokenKind::Print, 11)
    );
}

// === Idempotence ===

#[test]
fn repeated_probes_agree_everywhere() {
    let source = "if a:\n    b = [1,\n  2]\n\n    # c\nelse:\n\tprint b\n    elif\n";
    let buf = SourceBuffer::new(source);
    let stacks = [
        vec![],
        vec![compound(0)],
        vec![compound(0), OpenConstruct::new(ConstructKind::List, 14)],
    ];
    let mut cache = IndentCache::new();
    for stack in &stacks {
        for pos in 0..=buf.len() {
            for &scanner in scanners() {
                let first = scan_with(scanner, &buf, stack, &mut cache, pos);
                let second = scan_with(scanner, &buf, stack, &mut cache, pos);
                assert_eq!(first, second, "{} at {pos}", scanner.name());
                if let Some(Accepted { kind, end }) = first {
                    assert!(
                        !kind.is_zero_width() || end == pos,
                        "{} at {pos}: zero-width {kind} ends at {end}",
                        scanner.name()
                    );
                }
            }
        }
    }
}

#[test]
fn warm_and_cold_caches_decide_alike() {
    let source = "class A:\n    def f(self):\n        if x:\n            y\n        else:\n            z\n    w\n";
    let buf = SourceBuffer::new(source);
    let stack = vec![compound(0), compound(13), compound(34)];
    let mut warm = IndentCache::new();
    for pos in 0..=buf.len() {
        for &scanner in scanners() {
            let hot = scan_with(scanner, &buf, &stack, &mut warm, pos);
            let cold = scan_with(scanner, &buf, &stack, &mut IndentCache::new(), pos);
            // Cold probes are only meaningful at line starts, so compare
            // wherever the cold path produced a token.
            if cold.is_some() || hot.is_some() {
                assert_eq!(hot, cold, "{} at {pos}", scanner.name());
            }
        }
    }
}

// === Registry of scanners ===

#[test]
fn scanner_table() {
    let names: Vec<&str> = scanners().iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec!["newlines", "bodyContinue", "statementContinueKeyword", "legacyPrint"]
    );
    for scanner in scanners() {
        assert_eq!(
            scanner.flags(),
            ScannerFlags::CONTEXTUAL | ScannerFlags::FALLBACK
        );
    }
}
