// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The [`BufferQueue`] struct and helper types.
//!
//! This type is designed for the efficient parsing of string data, especially where many
//! significant characters are from the ascii range 0-63. This includes, for example, important
//! characters in xml/html parsing.
//!
//! Good and predictable performance is achieved by avoiding allocation where possible (a.k.a. zero
//! copy).
//!
//! [`BufferQueue`]: struct.BufferQueue.html


use std::cell::RefCell;
use std::collections::VecDeque;

use tendril::StrTendril;

pub use self::SetResult::{FromSet, NotFromSet};
use crate::util::smallcharset::SmallCharSet;

/// Result from [`pop_except_from`] containing either a character from a [`SmallCharSet`], or a
/// string buffer of characters not from the set.
///
/// [`pop_except_from`]: struct.BufferQueue.html#method.pop_except_from
/// [`SmallCharSet`]: ../struct.SmallCharSet.html
#[derive(PartialEq, Eq, Debug)]
pub enum SetResult {
    /// A character from the `SmallCharSet`.
    FromSet(char),
    /// A block of text containing no characters from the `SmallCharSet`.
    NotFromSet(StrTendril),
}

/// A queue of owned string buffers, which supports incrementally consuming characters.
///
/// Internally it uses [`VecDeque`] and has the same complexity properties.
///
/// [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html
pub struct BufferQueue {
    /// Buffers to process.
    buffers: RefCell<VecDeque<StrTendril>>,
}

impl BufferQueue {
    /// Create an empty BufferQueue.
    pub fn new() -> BufferQueue {
        BufferQueue {
            buffers: RefCell::new(VecDeque::with_capacity(16)),
        }
    }

    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.buffers.borrow().is_empty()
    }

    /// Get the tendril at the beginning of the queue.
    pub fn pop_front(&self) -> Option<StrTendril> {
        self.buffers.borrow_mut().pop_front()
    }

    /// Add a buffer to the beginning of the queue.
    pub fn push_front(&self, buf: StrTendril) {
        if buf.len32() == 0 {
            return;
        }
        self.buffers.borrow_mut().push_front(buf);
    }

    /// Put a character sequence back at the front of the queue, as if it had
    /// never been consumed. Used by the tokenizer's one-codepoint lookahead.
    pub fn unconsume(&self, buf: StrTendril) {
        self.push_front(buf);
    }

    /// Drop all buffered input.
    pub fn clear(&self) {
        self.buffers.borrow_mut().clear();
    }

    /// Add a buffer to the end of the queue.
    pub fn push_back(&self, buf: StrTendril) {
        if buf.len32() == 0 {
            return;
        }
        self.buffers.borrow_mut().push_back(buf);
    }

    /// Look at the next available character, if any.
    pub fn peek(&self) -> Option<char> {
        // Invariant: all buffers in the queue are non-empty.
        self.buffers
            .borrow()
            .front()
            .map(|b| b.chars().next().unwrap())
    }

    /// Get the next character, if one is available.
    pub fn next(&self) -> Option<char> {
        let mut buffers = self.buffers.borrow_mut();
        let (result, now_empty) = match buffers.front_mut() {
            None => (None, false),
            Some(buf) => {
                let c = buf.pop_front_char().expect("empty buffer in queue");
                (Some(c), buf.is_empty())
            }
        };

        if now_empty {
            buffers.pop_front();
        }

        result
    }

    /// Pops and returns either a single character from the given set, or
    /// a `StrTendril` of characters none of which are in the set.  The set
    /// is represented as a bitmask and so can only contain the first 64
    /// ASCII characters.
    pub fn pop_except_from(&self, set: SmallCharSet) -> Option<SetResult> {
        let mut buffers = self.buffers.borrow_mut();
        let (result, now_empty) = match buffers.front_mut() {
            None => (None, false),
            Some(buf) => {
                let n = set.nonmember_prefix_len(&buf);
                if n > 0 {
                    let out;
                    unsafe {
                        out = buf.unsafe_subtendril(0, n);
                        buf.unsafe_pop_front(n);
                    }
                    (Some(NotFromSet(out)), buf.is_empty())
                } else {
                    let c = buf.pop_front_char().expect("empty buffer in queue");
                    (Some(FromSet(c)), buf.is_empty())
                }
            }
        };

        // Unborrow self for this part.
        if now_empty {
            buffers.pop_front();
        }

        result
    }

    // Check if the next characters are an ASCII case-insensitive match for
    // `pat`, which must be non-empty.
    //
    // If so, consume them and return Some(true).
    // If they do not match, return Some(false).
    // If not enough characters are available to know, return None.
    pub fn eat<F: Fn(&u8, &u8) -> bool>(&self, pat: &str, eq: F) -> Option<bool> {
        let mut buffers = self.buffers.borrow_mut();
        let mut buffers_exhausted = 0;
        let mut consumed_from_last = 0;
        if buffers.front().is_none() {
            return None;
        }

        for pattern_byte in pat.bytes() {
            if buffers_exhausted >= buffers.len() {
                return None;
            }
            let ref buf = buffers[buffers_exhausted];

            if !eq(&buf.as_bytes()[consumed_from_last], &pattern_byte) {
                return Some(false)
            }

            consumed_from_last += 1;
            if consumed_from_last >= buf.len() {
                buffers_exhausted += 1;
                consumed_from_last = 0;
            }
        }

        // We have a match. Commit changes to the BufferQueue.
        for _ in 0 .. buffers_exhausted {
            buffers.pop_front();
        }

        match buffers.front_mut() {
            None => assert_eq!(consumed_from_last, 0),
            Some(ref mut buf) => buf.pop_front(consumed_from_last as u32),
        }

        Some(true)
    }
}

impl Default for BufferQueue {
    fn default() -> Self {
        BufferQueue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tendril::SliceExt;

    #[test]
    fn can_unconsume() {
        let q = BufferQueue::new();
        q.push_back("abc".to_tendril());
        assert_eq!(q.next(), Some('a'));
        q.unconsume("xa".to_tendril());
        assert_eq!(q.next(), Some('x'));
        assert_eq!(q.next(), Some('a'));
        assert_eq!(q.next(), Some('b'));
        assert_eq!(q.next(), Some('c'));
        assert_eq!(q.next(), None);
    }

    #[test]
    fn can_pop_except_set() {
        let q = BufferQueue::new();
        q.push_back("abc&".to_tendril());
        let mut set = SmallCharSet::default();
        set.insert(b'&');
        match q.pop_except_from(set) {
            Some(NotFromSet(s)) => assert_eq!(&*s, "abc"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(q.pop_except_from(set), Some(FromSet('&')));
    }

    #[test]
    fn can_eat() {
        let q = BufferQueue::new();
        q.push_back("DOCTYPE".to_tendril());
        assert_eq!(
            q.eat("doctype", |&a, &b| a.to_ascii_lowercase() == b.to_ascii_lowercase()),
            Some(true)
        );
        assert!(q.is_empty());
    }
}
