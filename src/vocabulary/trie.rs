use std::collections::hash_map;

use rustc_hash::FxHashMap;

use super::TermID;

/// Node of the character trie. A node carries an `id` only when the path
/// leading to it has been vivified.
#[derive(Default)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    pub id: Option<TermID>,
}

impl TrieNode {
    pub fn find(&self, term: &str) -> Option<&TrieNode> {
        let mut node = self;
        for char in term.chars() {
            node = node.children.get(&char)?;
        }
        Some(node)
    }

    pub fn find_or_create(&mut self, term: &str) -> &mut TrieNode {
        let mut node = self;
        for char in term.chars() {
            node = node.children.entry(char).or_default();
        }
        node
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

struct CloneFrame<'a> {
    char: Option<char>,
    id: Option<TermID>,
    pending: hash_map::Iter<'a, char, TrieNode>,
    children: FxHashMap<char, TrieNode>,
}

impl<'a> CloneFrame<'a> {
    fn new(char: Option<char>, source: &'a TrieNode) -> Self {
        Self {
            char,
            id: source.id,
            pending: source.children.iter(),
            children: FxHashMap::default(),
        }
    }
}

// Cloned bottom-up with an explicit stack for the same reason as `Drop`.
impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new(None, self)];
        loop {
            let Some(frame) = stack.last_mut() else {
                return TrieNode::default();
            };

            if let Some((char, child)) = frame.pending.next() {
                stack.push(CloneFrame::new(Some(*char), child));
                continue;
            }

            let Some(frame) = stack.pop() else {
                return TrieNode::default();
            };
            let node = TrieNode {
                children: frame.children,
                id: frame.id,
            };

            match (frame.char, stack.last_mut()) {
                (Some(char), Some(parent)) => {
                    parent.children.insert(char, node);
                }
                _ => return node,
            }
        }
    }
}

// Dropped iteratively, a single long term nests one node per character.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
