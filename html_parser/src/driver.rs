// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! High-level interfaces to the HTML parser, built on top of the
//! [`tendril::TendrilSink`] streaming interface so that callers can feed
//! input incrementally (`parser.process(chunk)`) or all at once
//! (`tendril_sink.one(complete_string)`).

use std::borrow::Cow;

use markup_core::buffer_queue::BufferQueue;
use tendril::fmt::UTF8;
use tendril::{StrTendril, TendrilSink};

use crate::tokenizer::{Tokenizer, TokenizerOpts, TokenizerResult};
use crate::tree_builder::{TreeBuilder, TreeBuilderOpts, TreeSink};

/// Options for both the tokenizer and the tree builder stage.
#[derive(Clone, Default)]
pub struct ParseOpts {
    /// Options for the tokenizer.
    pub tokenizer: TokenizerOpts,

    /// Options for the tree builder.
    pub tree_builder: TreeBuilderOpts,
}

/// An HTML parser, ready to receive Unicode input through the
/// [`TendrilSink`] interface.
///
/// Feeds chunks of input through a [`Tokenizer`] into a [`TreeBuilder`],
/// which drives `sink`. Bytes destined for the tokenizer are buffered in a
/// `BufferQueue` rather than processed eagerly, so that a `<script>`
/// boundary that arrives split across two `process` calls is handled
/// correctly.
pub struct Parser<Sink>
where
    Sink: TreeSink,
{
    /// The underlying tokenizer driving the sink's tree builder.
    pub tokenizer: Tokenizer<TreeBuilder<Sink::Handle, Sink>>,

    /// Input ready to tokenize.
    pub input_buffer: BufferQueue,
}

impl<Sink: TreeSink> TendrilSink<UTF8> for Parser<Sink> {
    fn process(&mut self, t: StrTendril) {
        self.input_buffer.push_back(t);
        // There can't be a script to run, because we haven't executed any
        // of the previous input yet.
        match self.tokenizer.feed(&self.input_buffer) {
            TokenizerResult::Done => {},
            TokenizerResult::Script(_) => unreachable!(),
        }
    }

    // FIXME: Is it too noisy to report every character decoding error?
    fn error(&mut self, desc: Cow<'static, str>) {
        self.tokenizer.sink.sink.parse_error(desc)
    }

    type Output = Sink::Output;

    fn finish(self) -> Self::Output {
        self.tokenizer.end();
        let Parser { tokenizer, .. } = self;
        tokenizer.sink.sink.finish()
    }
}

/// Parse an entire HTML document into a `Sink`'s tree representation.
///
/// Feed the whole input string (or stream of strings) to the returned
/// [`Parser`] through the [`TendrilSink`] trait, then call
/// `.finish()` or use one of the convenience methods (`.one(...)`,
/// `.read_from(...)`) to get the sink's final output.
pub fn parse_document<Sink>(sink: Sink, opts: ParseOpts) -> Parser<Sink>
where
    Sink: TreeSink,
{
    let tb = TreeBuilder::new(sink, opts.tree_builder);
    let tok = Tokenizer::new(tb, opts.tokenizer);
    Parser {
        tokenizer: tok,
        input_buffer: BufferQueue::default(),
    }
}

/// Parse an HTML fragment, rooted at `context_name`, into a `Sink`'s tree
/// representation.
///
/// The context element is created via the sink's `create_element` before
/// parsing begins, and never appears in the finished output; it exists
/// only to pick the right tokenizer state and insertion mode (e.g. a
/// `<title>` context switches the tokenizer into RCDATA).
pub fn parse_fragment<Sink>(
    sink: Sink,
    opts: ParseOpts,
    context_name: markup_core::QualName,
    context_attrs: Vec<markup_core::Attribute>,
) -> Parser<Sink>
where
    Sink: TreeSink,
{
    let context_elem = sink.create_element(
        context_name,
        context_attrs,
        markup_core::interface::ElementFlags::default(),
    );
    parse_fragment_for_element(sink, opts, context_elem, None)
}

/// As [`parse_fragment`], but for a context element the caller already
/// created (and may already have attached a `<form>` ancestor to).
pub fn parse_fragment_for_element<Sink>(
    sink: Sink,
    opts: ParseOpts,
    context_elem: Sink::Handle,
    form_elem: Option<Sink::Handle>,
) -> Parser<Sink>
where
    Sink: TreeSink,
{
    let tb = TreeBuilder::new_for_fragment(sink, context_elem, form_elem, opts.tree_builder);
    let mut tok_opts = opts.tokenizer;
    tok_opts.initial_state = Some(tb.tokenizer_state_for_context_elem(
        opts.tree_builder.scripting_enabled,
    ));
    let tok = Tokenizer::new(tb, tok_opts);
    Parser {
        tokenizer: tok,
        input_buffer: BufferQueue::default(),
    }
}
