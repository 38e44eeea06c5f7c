//! Symmetric encoders (C3): a trie's cell storage as a flat big-endian byte
//! stream, or as a vector of 32-bit words, and back.
//!
//! Both codecs carry the same payload — the header cell followed by every
//! other cell, `base` then `check` — so a trie serialized one way can be
//! decoded the other way by converting words to bytes (or back) first.

use crate::error::{Result, TrieError};
use crate::heap::{Cell, Heap};
use crate::trie::Trie;

const CELL_BYTES: usize = 8;

/// Encode as big-endian bytes: `[base0, check0, base1, check1, ...]`, 4
/// bytes per field.
pub fn to_bytes(trie: &Trie) -> Vec<u8> {
    let cells = trie.cells();
    let mut out = Vec::with_capacity(cells.len() * CELL_BYTES);
    for cell in cells {
        out.extend_from_slice(&cell.base.to_be_bytes());
        out.extend_from_slice(&cell.check.to_be_bytes());
    }
    out
}

/// Decode a byte stream produced by [`to_bytes`].
pub fn from_bytes(bytes: &[u8]) -> Result<Trie> {
    if bytes.len() % CELL_BYTES != 0 {
        return Err(TrieError::Truncated {
            expected: (bytes.len() / CELL_BYTES + 1) * CELL_BYTES,
            actual: bytes.len(),
        });
    }
    let n = bytes.len() / CELL_BYTES;
    if n < 2 {
        return Err(TrieError::Truncated {
            expected: 2 * CELL_BYTES,
            actual: bytes.len(),
        });
    }
    let mut cells = Vec::with_capacity(n);
    for chunk in bytes.chunks_exact(CELL_BYTES) {
        let base = i32::from_be_bytes(chunk[0..4].try_into().unwrap());
        let check = i32::from_be_bytes(chunk[4..8].try_into().unwrap());
        cells.push(Cell { base, check });
    }
    Ok(build_trie(cells))
}

/// Encode as 32-bit words: `[base0, check0, base1, check1, ...]`, each field
/// bit-reinterpreted (not truncated) into a `u32`.
pub fn to_words(trie: &Trie) -> Vec<u32> {
    let cells = trie.cells();
    let mut out = Vec::with_capacity(cells.len() * 2);
    for cell in cells {
        out.push(cell.base as u32);
        out.push(cell.check as u32);
    }
    out
}

/// Decode a word vector produced by [`to_words`].
pub fn from_words(words: &[u32]) -> Result<Trie> {
    if words.len() % 2 != 0 {
        return Err(TrieError::Truncated {
            expected: words.len() + 1,
            actual: words.len(),
        });
    }
    let n = words.len() / 2;
    if n < 2 {
        return Err(TrieError::Truncated {
            expected: 4,
            actual: words.len(),
        });
    }
    let mut cells = Vec::with_capacity(n);
    for pair in words.chunks_exact(2) {
        cells.push(Cell {
            base: pair[0] as i32,
            check: pair[1] as i32,
        });
    }
    Ok(build_trie(cells))
}

fn build_trie(cells: Vec<Cell>) -> Trie {
    let mut heap = Heap::new();
    heap.set_cells(cells);
    Trie::from_heap(heap)
}
