// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shared infrastructure between the tokenizer and the tree-construction
//! dispatcher: name interning backed by a double-array trie (C4), the
//! `TreeSink` seam (C8), and a couple of small zero-copy string utilities.

pub extern crate tendril;

#[macro_use]
pub mod atoms;
#[macro_use]
pub mod interface;
pub mod serialize;
pub mod util;

pub use atoms::{Atom, LocalName, Namespace, Prefix};
pub use interface::{Attribute, ExpandedName, QualName};
pub use util::buffer_queue;
pub use util::smallcharset::SmallCharSet;
