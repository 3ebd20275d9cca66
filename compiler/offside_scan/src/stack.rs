//! The host's parse-stack query.
//!
//! Scanners only ever ask one question of the parser: "what is the innermost
//! open construct of one of these kinds?" Two fixed kind sets are used:
//! [`BRACKETED`] to suppress newlines inside brackets, and [`COMPOUND`] to
//! find the statement whose indentation a line is measured against.

/// Kinds of open constructs the scanners care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    /// `( expr )`
    Paren,
    /// `( a, b )`
    Tuple,
    /// `[ a, b ]`
    List,
    /// `{ a, b }`
    Set,
    /// `{ k: v }`
    Dict,
    /// `[ x for x in xs ]`
    ListComprehension,
    /// `{ x for x in xs }`
    SetComprehension,
    /// `{ k: v for k, v in kvs }`
    DictComprehension,
    /// `( x for x in xs )`
    Generator,
    /// A block-introducing statement (`if`, `for`, `while`, `def`, `class`, ...).
    CompoundStatement,
}

/// Constructs inside which newlines never separate statements.
pub const BRACKETED: &[ConstructKind] = &[
    ConstructKind::Paren,
    ConstructKind::Tuple,
    ConstructKind::List,
    ConstructKind::Set,
    ConstructKind::Dict,
    ConstructKind::ListComprehension,
    ConstructKind::SetComprehension,
    ConstructKind::DictComprehension,
    ConstructKind::Generator,
];

/// Constructs whose start indentation bounds a block body.
pub const COMPOUND: &[ConstructKind] = &[ConstructKind::CompoundStatement];

impl ConstructKind {
    /// Returns `true` for the [`BRACKETED`] kinds.
    pub fn is_bracketed(self) -> bool {
        BRACKETED.contains(&self)
    }
}

/// An open construct: its kind and the offset of its first token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpenConstruct {
    pub kind: ConstructKind,
    pub start: u32,
}

impl OpenConstruct {
    pub const fn new(kind: ConstructKind, start: u32) -> Self {
        Self { kind, start }
    }
}

/// Read access to the host parser's stack of open constructs.
pub trait ParseStack {
    /// The innermost open construct whose kind is in `kinds`, if any.
    fn innermost(&self, kinds: &[ConstructKind]) -> Option<OpenConstruct>;
}

/// A plain stack of constructs, innermost last.
impl ParseStack for [OpenConstruct] {
    fn innermost(&self, kinds: &[ConstructKind]) -> Option<OpenConstruct> {
        self.iter().rev().find(|c| kinds.contains(&c.kind)).copied()
    }
}

impl ParseStack for Vec<OpenConstruct> {
    fn innermost(&self, kinds: &[ConstructKind]) -> Option<OpenConstruct> {
        self.as_slice().innermost(kinds)
    }
}
