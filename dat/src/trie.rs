//! The set/map façade (C2) over the raw cell heap (C1).
//!
//! [`Trie`] maps byte-string keys to small non-negative integer values. A
//! plain membership test (`insert`/`contains`) is just a map whose values
//! default to `0`.

use crate::error::{Result, TrieError};
use crate::heap::{Heap, Cell, NULL_VALUE, ROOT};

/// The largest value a terminal cell can hold. Stored values are negated
/// and offset by one (`-(value + 1)`) into a signed 32-bit `base` field, so
/// anything above `i32::MAX - 1` would silently wrap on the `as i32` cast
/// rather than round-trip. `insert_with_value`/`set_value_at` reject larger
/// values with [`TrieError::Overflow`] instead of truncating.
pub const MAX_VALUE: i64 = i32::MAX as i64 - 1;

/// An opaque reference to a trie state, returned by lookups and insertions.
///
/// Comparable to a tagged index rather than a pointer: it is invalidated by
/// any mutating call (`insert`/`erase`) on the trie that produced it, same
/// as the abstract iterator this façade is modeled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrieIndex(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct Trie {
    heap: Heap,
}

impl Trie {
    pub fn new() -> Self {
        Trie { heap: Heap::new() }
    }

    pub fn len(&self) -> usize {
        self.heap.key_count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub(crate) fn heap(&self) -> &Heap {
        &self.heap
    }

    pub(crate) fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    pub(crate) fn from_heap(heap: Heap) -> Self {
        Trie { heap }
    }

    fn child(&self, parent: usize, label: u16) -> Option<usize> {
        let base = self.heap.base(parent);
        if base <= 0 {
            return None;
        }
        let idx = base as i64 + label as i64;
        if idx < 2 || idx as usize >= self.heap.len() {
            return None;
        }
        let idx = idx as usize;
        if self.heap.check(idx) == parent as i32 {
            Some(idx)
        } else {
            None
        }
    }

    fn has_null(&self, node: usize) -> bool {
        let base = self.heap.base(node);
        base > 0 && self.child(node, NULL_VALUE).is_some()
    }

    fn is_terminal(&self, node: usize) -> bool {
        let base = self.heap.base(node);
        if base < 0 {
            true
        } else if base > 0 {
            self.has_null(node)
        } else {
            false
        }
    }

    fn value_index(&self, node: usize) -> Option<usize> {
        let base = self.heap.base(node);
        if base < 0 {
            Some(node)
        } else if base > 0 {
            self.child(node, NULL_VALUE)
        } else {
            None
        }
    }

    fn read_value(&self, value_idx: usize) -> i64 {
        let b = self.heap.base(value_idx);
        debug_assert!(b < 0, "value cell must hold a negative-encoded value");
        -(b as i64) - 1
    }

    /// Walk as far as possible along `key`'s transitions from the root.
    /// Returns the number of bytes matched and the state reached.
    fn walk(&self, key: &[u8]) -> (usize, usize) {
        let mut node = ROOT;
        for (i, &b) in key.iter().enumerate() {
            match self.child(node, b as u16) {
                Some(n) => node = n,
                None => return (i, node),
            }
        }
        (key.len(), node)
    }

    fn has_sibling(&self, parent: usize, exclude: usize) -> bool {
        let base = self.heap.base(parent);
        if base <= 0 {
            return false;
        }
        for label in 0u16..=NULL_VALUE {
            let idx = base as i64 + label as i64;
            if idx < 2 || idx as usize >= self.heap.len() {
                continue;
            }
            let idx = idx as usize;
            if idx != exclude && self.heap.check(idx) == parent as i32 {
                return true;
            }
        }
        false
    }

    /// Place `labels` as children of `parent`, preserving any value `parent`
    /// already held directly (converting it into a null-transition child)
    /// when `parent` is becoming an internal node for the first time.
    fn add(&mut self, parent: usize, labels: &[u16]) -> Result<i32> {
        let base = self.heap.base(parent);
        let existing_value = if base < 0 {
            Some(-(base as i64) - 1)
        } else {
            None
        };

        let mut labels = labels.to_vec();
        if existing_value.is_some() && !labels.contains(&NULL_VALUE) {
            labels.push(NULL_VALUE);
            labels.sort_unstable();
        }

        let new_base = if base <= 0 {
            let b = self.heap.locate(&labels, 1)?;
            self.heap.allocate(parent, b, &labels)?;
            b
        } else if self.heap.is_free(base, &labels) {
            self.heap.allocate(parent, base, &labels)?;
            base
        } else {
            self.heap.relocate(parent, base, &labels)?
        };

        for &label in &labels {
            let idx = (new_base as i64 + label as i64) as usize;
            self.heap.set_check(idx, parent as i32);
        }
        self.heap.set_base(parent, new_base);

        if let Some(v) = existing_value {
            let null_idx = (new_base as i64 + NULL_VALUE as i64) as usize;
            self.heap.set_base(null_idx, -(v + 1) as i32);
        }
        Ok(new_base)
    }

    fn set_value_at(&mut self, node: usize, value: i64) -> Result<()> {
        if value < 0 {
            return Err(TrieError::NegativeValue(value));
        }
        if value > MAX_VALUE {
            return Err(TrieError::Overflow);
        }
        let encoded = -(value + 1) as i32;
        match self.value_index(node) {
            Some(idx) => {
                self.heap.set_base(idx, encoded);
            }
            None => {
                let base = self.heap.base(node);
                if base <= 0 {
                    self.heap.set_base(node, encoded);
                } else {
                    self.add(node, &[NULL_VALUE])?;
                    let idx = self.child(node, NULL_VALUE).expect("just added");
                    self.heap.set_base(idx, encoded);
                }
            }
        }
        Ok(())
    }

    /// Insert `key` as a member (value `0`). No-op if already present.
    pub fn insert(&mut self, key: &[u8]) -> Result<TrieIndex> {
        self.insert_with_value(key, 0)
    }

    /// Insert `key` mapped to `value`, overwriting any prior value.
    pub fn insert_with_value(&mut self, key: &[u8], value: i64) -> Result<TrieIndex> {
        if value < 0 {
            return Err(TrieError::NegativeValue(value));
        }
        if value > MAX_VALUE {
            return Err(TrieError::Overflow);
        }
        if key.is_empty() {
            return Ok(TrieIndex(ROOT));
        }

        let (matched_len, mut node) = self.walk(key);
        let mut new_key = false;

        if matched_len < key.len() {
            new_key = true;
            for &b in &key[matched_len..] {
                self.add(node, &[b as u16])?;
                node = self.child(node, b as u16).expect("just added");
            }
            let encoded = -(value + 1) as i32;
            self.heap.set_base(node, encoded);
        } else {
            if self.value_index(node).is_none() {
                new_key = true;
            }
            self.set_value_at(node, value)?;
        }

        if new_key {
            self.heap.set_key_count(self.heap.key_count() + 1);
        }
        Ok(TrieIndex(node))
    }

    /// Remove `key`. Returns an error if the key was not present.
    pub fn erase(&mut self, key: &[u8]) -> Result<()> {
        let leaf = self.find_index(key).ok_or(TrieError::KeyNotFound)?.0;
        let base = self.heap.base(leaf);
        if base > 0 {
            let null_idx = self.child(leaf, NULL_VALUE).expect("terminal-with-children");
            self.heap.free_cell(null_idx);
        } else {
            let mut cur = leaf;
            loop {
                if cur == ROOT {
                    break;
                }
                let parent = self.heap.check(cur) as usize;
                let had_sibling = self.has_sibling(parent, cur);
                self.heap.free_cell(cur);
                if had_sibling {
                    break;
                }
                cur = parent;
            }
        }
        self.heap.set_key_count(self.heap.key_count() - 1);
        Ok(())
    }

    /// Does the trie contain `key`?
    pub fn contains(&self, key: &[u8]) -> bool {
        self.find_index(key).is_some()
    }

    /// Find the terminal state for `key`, if present.
    pub fn find_index(&self, key: &[u8]) -> Option<TrieIndex> {
        let (matched_len, node) = self.walk(key);
        if matched_len == key.len() && self.is_terminal(node) {
            Some(TrieIndex(node))
        } else {
            None
        }
    }

    /// Prefix search: the state reached by the longest matched prefix of
    /// `key`, and the unmatched remainder.
    pub fn search<'k>(&self, key: &'k [u8]) -> (TrieIndex, &'k [u8]) {
        let (matched_len, node) = self.walk(key);
        (TrieIndex(node), &key[matched_len..])
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &[u8]) -> Option<i64> {
        self.find_index(key).map(|idx| self.value_of(idx))
    }

    /// The state reached by walking every byte of `key`, regardless of
    /// whether that state is terminal. Lets a caller distinguish "no key
    /// starts with this prefix" from "some key does, but `key` itself
    /// isn't one" without also doing a value lookup.
    pub fn node_after(&self, key: &[u8]) -> Option<TrieIndex> {
        let (matched_len, node) = self.walk(key);
        if matched_len == key.len() {
            Some(TrieIndex(node))
        } else {
            None
        }
    }

    /// Read the value at a state known to be terminal.
    pub fn value_of(&self, index: TrieIndex) -> i64 {
        let idx = self
            .value_index(index.0)
            .expect("TrieIndex did not refer to a terminal state");
        self.read_value(idx)
    }

    /// Fetch `key`'s value, inserting a default of `0` if absent (the
    /// `operator[]` contract).
    pub fn get_or_insert(&mut self, key: &[u8]) -> Result<i64> {
        if let Some(v) = self.get(key) {
            return Ok(v);
        }
        let idx = self.insert(key)?;
        Ok(self.value_of(idx))
    }

    /// Resolve a value the way `at()` / `operator[]` does, failing if the
    /// key is absent.
    pub fn at(&self, key: &[u8]) -> Result<i64> {
        self.get(key).ok_or(TrieError::KeyNotFound)
    }

    /// Iterate over every stored `(key, value)` pair. Order is an
    /// implementation detail (byte-label DFS), not insertion order.
    pub fn iter(&self) -> TrieIter<'_> {
        TrieIter {
            trie: self,
            stack: vec![Frame {
                node: ROOT,
                prefix_len: 0,
                next_label: 0,
            }],
            prefix: Vec::new(),
        }
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        self.heap.cells()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

struct Frame {
    node: usize,
    prefix_len: usize,
    next_label: u32,
}

/// Depth-first iterator over `(key bytes, value)` pairs.
pub struct TrieIter<'a> {
    trie: &'a Trie,
    stack: Vec<Frame>,
    prefix: Vec<u8>,
}

impl<'a> Iterator for TrieIter<'a> {
    type Item = (Vec<u8>, i64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            if frame.next_label > NULL_VALUE as u32 {
                self.prefix.truncate(frame.prefix_len.saturating_sub(1));
                self.stack.pop();
                continue;
            }
            let label = frame.next_label as u16;
            let node = frame.node;
            let prefix_len = frame.prefix_len;
            frame.next_label += 1;

            let Some(child) = self.trie.child(node, label) else {
                continue;
            };

            if label == NULL_VALUE {
                let value = self.trie.read_value(child);
                return Some((self.prefix[..prefix_len].to_vec(), value));
            }

            self.prefix.truncate(prefix_len);
            self.prefix.push(label as u8);
            let child_prefix_len = self.prefix.len();

            if self.trie.heap.base(child) < 0 {
                let value = self.trie.read_value(child);
                let key = self.prefix[..child_prefix_len].to_vec();
                self.stack.push(Frame {
                    node: child,
                    prefix_len: child_prefix_len,
                    next_label: (NULL_VALUE as u32) + 1, // nothing further under a childless leaf
                });
                return Some((key, value));
            }

            self.stack.push(Frame {
                node: child,
                prefix_len: child_prefix_len,
                next_label: 0,
            });
        }
    }
}
