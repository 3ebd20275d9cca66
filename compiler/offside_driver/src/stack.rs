//! The driver's construct stack.

use offside_scan::{ConstructKind, OpenConstruct, ParseStack};
use smallvec::SmallVec;

/// Open brackets and compound statements, innermost last.
///
/// Real files rarely nest deeper than a handful of levels, so the stack lives
/// inline until it spills.
#[derive(Clone, Debug, Default)]
pub struct ConstructStack {
    items: SmallVec<[OpenConstruct; 16]>,
}

impl ConstructStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, construct: OpenConstruct) {
        self.items.push(construct);
    }

    /// Pop the top construct if it is a bracket.
    ///
    /// An unmatched closer leaves the stack untouched.
    pub fn pop_bracket(&mut self) -> Option<OpenConstruct> {
        match self.items.last() {
            Some(top) if top.kind.is_bracketed() => self.items.pop(),
            _ => None,
        }
    }

    /// Pop the top construct if it is a compound statement.
    pub fn pop_compound(&mut self) -> Option<OpenConstruct> {
        match self.items.last() {
            Some(top) if top.kind == ConstructKind::CompoundStatement => self.items.pop(),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[OpenConstruct] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl ParseStack for ConstructStack {
    fn innermost(&self, kinds: &[ConstructKind]) -> Option<OpenConstruct> {
        self.items.as_slice().innermost(kinds)
    }
}
