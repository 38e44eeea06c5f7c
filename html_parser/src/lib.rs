// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(unused_parens)]

pub use markup_core::interface;
pub use markup_core::{expanded_name, local_name, namespace_prefix, ns};
pub use markup_core::{Attribute, ExpandedName, LocalName, Namespace, Prefix, QualName};

pub use driver::{parse_document, parse_fragment, parse_fragment_for_element, ParseOpts, Parser};
pub use serialize::serialize;

#[macro_use]
mod macros;

mod util {
    pub(crate) mod str;
}

pub mod driver;
pub mod serialize;
pub mod tokenizer;
pub mod tree_builder;

pub(crate) mod encoding;

/// Re-export the tendril crate, so downstream crates don't need to depend
/// on it separately to call [`TendrilSink`](tendril::TendrilSink) methods
/// on a [`Parser`].
pub mod tendril {
    pub use tendril::*;
}
