use std::fmt;

pub mod errors;
pub mod special;
mod trie;

use errors::{EmptyTerm, NewSpecialTerm, VocabularyError};
use special::{special_name, Special};
use trie::TrieNode;

/// Ordinary terms get ids starting at 1, specials are 0 or negative.
pub type TermID = i64;

/// Maps terms to unique, densely assigned integers.
///
/// Ids are handed out in order of first insertion and never change. The
/// structure only grows: there is no way to remove a term.
#[derive(Clone, Default)]
pub struct Vocabulary {
    root: TrieNode,
    count: usize,
}

impl fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vocabulary")
            .field("count", &self.count)
            .field("nodes", &self.root.node_count())
            .finish()
    }
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ordinary terms vivified so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn special(&self) -> &'static [Special] {
        &Special::ALL
    }

    /// Returns the id of `term`, or `None` if it was never vivified.
    ///
    /// Special references with an unknown name are reported as `None` too.
    pub fn lookup(&self, term: &str) -> Result<Option<TermID>, VocabularyError> {
        if term.is_empty() {
            return Err(EmptyTerm {
                dbg_line: crate::dbg_line!(),
                operation: "look up",
            }
            .into());
        }

        if let Some(name) = special_name(term) {
            return Ok(Special::from_name(name).map(Special::id));
        }

        Ok(self.root.find(term).and_then(|node| node.id))
    }

    /// Returns the id of `term`, assigning the next free one if it is new.
    pub fn vivify(&mut self, term: &str) -> Result<TermID, VocabularyError> {
        if term.is_empty() {
            return Err(EmptyTerm {
                dbg_line: crate::dbg_line!(),
                operation: "vivify",
            }
            .into());
        }

        if let Some(name) = special_name(term) {
            return match Special::from_name(name) {
                Some(special) => Ok(special.id()),
                None => Err(NewSpecialTerm {
                    dbg_line: crate::dbg_line!(),
                    name: name.to_string(),
                }
                .into()),
            };
        }

        if let Some(id) = self.root.find(term).and_then(|node| node.id) {
            return Ok(id);
        }

        let id = self.next_id();
        self.root.find_or_create(term).id = Some(id);
        Ok(id)
    }

    fn next_id(&mut self) -> TermID {
        self.count += 1;
        self.count as TermID
    }
}
