// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Types shared between the tokenizer, the tree-construction dispatcher,
//! and whatever concrete tree a caller plugs in (C8's node-adapter seam).

use std::borrow::Cow;
use std::fmt;

use tendril::StrTendril;

use crate::atoms::{LocalName, Namespace, Prefix};

/// <https://www.w3.org/TR/REC-xml-names/#dt-expname>
#[derive(Clone, Eq)]
pub struct ExpandedName<'a> {
    pub ns: &'a Namespace,
    pub local: &'a LocalName,
}

impl<'a, 'b> PartialEq<ExpandedName<'a>> for ExpandedName<'b> {
    fn eq(&self, other: &ExpandedName<'a>) -> bool {
        self.ns == other.ns && self.local == other.local
    }
}

impl<'a> fmt::Debug for ExpandedName<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.ns.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}:{}", self.ns, self.local)
        }
    }
}

/// What a `TreeSink::elem_name` call hands back: enough to answer "what
/// element is this" without committing callers to a concrete
/// representation. An adapter whose handles already carry a `QualName` can
/// return borrowed references to it instead of assembling a fresh
/// `ExpandedName`.
pub trait ElemName {
    fn ns(&self) -> &Namespace;
    fn local_name(&self) -> &LocalName;

    fn expanded(&self) -> ExpandedName<'_> {
        ExpandedName {
            ns: self.ns(),
            local: self.local_name(),
        }
    }
}

impl<'a> ElemName for ExpandedName<'a> {
    fn ns(&self) -> &Namespace {
        self.ns
    }
    fn local_name(&self) -> &LocalName {
        self.local
    }
}

impl ElemName for QualName {
    fn ns(&self) -> &Namespace {
        &self.ns
    }
    fn local_name(&self) -> &LocalName {
        &self.local
    }
}

/// Build an [`ExpandedName`] from a short namespace tag and a local name:
/// `expanded_name!(html "div")`, `expanded_name!("" "id")`.
#[macro_export]
macro_rules! expanded_name {
    ("", $local:tt) => {
        $crate::interface::ExpandedName {
            ns: &$crate::ns!(),
            local: &$crate::local_name!($local),
        }
    };
    ($ns:ident $local:tt) => {
        $crate::interface::ExpandedName {
            ns: &$crate::ns!($ns),
            local: &$crate::local_name!($local),
        }
    };
}

/// Fully qualified name: a local name plus the namespace (and source
/// prefix) it resolved against.
///
/// Distinguishes between e.g. an HTML `<table>` and an XML vocabulary's
/// unrelated `<table>` element once namespaces are declared.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct QualName {
    pub prefix: Option<Prefix>,
    pub ns: Namespace,
    pub local: LocalName,
}

impl QualName {
    #[inline]
    pub fn new(prefix: Option<Prefix>, ns: Namespace, local: LocalName) -> QualName {
        QualName { prefix, ns, local }
    }

    #[inline]
    pub fn expanded(&self) -> ExpandedName {
        ExpandedName {
            ns: &self.ns,
            local: &self.local,
        }
    }
}

/// A tag attribute.
///
/// The namespace on the attribute name is almost always `ns!("")`. The
/// tokenizer creates all attributes this way; the tree builder adjusts
/// certain attribute names inside foreign content (MathML, SVG).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub struct Attribute {
    pub name: QualName,
    pub value: StrTendril,
}

/// <https://html.spec.whatwg.org/#quirks-mode>
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum QuirksMode {
    Quirks,
    LimitedQuirks,
    NoQuirks,
}

pub use QuirksMode::{LimitedQuirks, NoQuirks, Quirks};

/// Either a new node to append, or a text string to append to / create as
/// the last child, per the tree-construction "insert a character" merging
/// rule.
pub enum NodeOrText<Handle> {
    AppendNode(Handle),
    AppendText(StrTendril),
}

pub use NodeOrText::{AppendNode, AppendText};

/// Flags accompanying a freshly created element, covering the tree
/// construction steps that run only for certain tags.
#[derive(Copy, Clone, Default)]
pub struct ElementFlags {
    pub template: bool,
    pub mathml_annotation_xml_integration_point: bool,
}

pub fn create_element<Sink: TreeSink>(
    sink: &Sink,
    name: QualName,
    attrs: Vec<Attribute>,
) -> Sink::Handle {
    sink.create_element(name, attrs, ElementFlags::default())
}

/// How the tokenizer should continue after a `TreeSink` call that can
/// affect it (entering RCDATA/RAWTEXT/script-data/plaintext states).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextParserState {
    Suspend,
    Continue,
}

/// Instrumentation seam for adapters that need to trace handles the parser
/// is holding onto (open-elements stack, formatting list, head/form
/// pointers). An adapter with no GC concerns implements this as a no-op.
pub trait Tracer {
    type Handle;
    fn trace_handle(&self, node: &Self::Handle);
}

/// The node-adapter trait (C8): the seam between the tree-construction
/// dispatcher and a caller-supplied concrete tree. Every method is
/// synchronous and infallible unless noted otherwise.
pub trait TreeSink {
    type Handle: Clone;
    type Output;
    /// The type `elem_name` borrows from; lets an adapter back it with
    /// either a borrowed `QualName` or a value it assembles on the spot.
    type ElemName<'a>: ElemName
    where
        Self: 'a;

    /// Consume this sink and return the finished output.
    fn finish(self) -> Self::Output;

    /// Report a parse error.
    fn parse_error(&self, msg: Cow<'static, str>);

    /// Set the document's quirks mode.
    fn set_quirks_mode(&self, mode: QuirksMode);

    /// Get a handle to the `Document` node.
    fn get_document(&self) -> Self::Handle;

    /// Get the template element's template contents (a `DocumentFragment`
    /// handle), per <https://html.spec.whatwg.org/#the-template-element>.
    /// Only ever called on `<template>` element handles.
    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle;

    /// Do two handles refer to the same underlying node? Used by the
    /// formatting-list Noah's-Ark clause and the adoption agency algorithm.
    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool;

    /// What element (namespace, local name) does a handle refer to? Only
    /// ever called on element nodes.
    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a>;

    /// Create a detached element node.
    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        flags: ElementFlags,
    ) -> Self::Handle;

    /// Create a detached comment node.
    fn create_comment(&self, text: StrTendril) -> Self::Handle;

    /// Create a detached processing-instruction node.
    fn create_pi(&self, target: StrTendril, data: StrTendril) -> Self::Handle;

    /// Append a node or text as the last child of `parent`.
    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>);

    /// Append a node as a sibling immediately before `sibling`.
    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>);

    /// Append based on the parent node of a prior element: insert `new_node`
    /// before `element` if it has a parent, else append it to `prev_element`
    /// (the "foster parent" fallback the table insertion algorithms use).
    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        new_node: NodeOrText<Self::Handle>,
    ) {
        if self.has_parent_node(element) {
            self.append_before_sibling(element, new_node);
        } else {
            self.append(prev_element, new_node);
        }
    }

    /// Does `node` currently have a parent?
    fn has_parent_node(&self, node: &Self::Handle) -> bool;

    /// Append a DOCTYPE node directly to the Document.
    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    );

    /// Add each attribute in `attrs` to `target` only if an attribute with
    /// the same name is not already present (the repeated `<html>`/`<body>`
    /// start-tag rule).
    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>);

    /// Detach `target` from its current parent.
    fn remove_from_parent(&self, target: &Self::Handle);

    /// Remove all children from `node`, then append them to `new_parent`.
    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle);

    /// Deep-clone `node` into a fresh, detached subtree. Used by the
    /// adoption agency algorithm's formatting-element reconstruction.
    fn clone_subtree(&self, node: &Self::Handle) -> Self::Handle;

    /// Associate a `form` element owner with the element, per the tree
    /// construction's form-association rules. Most adapters that don't
    /// model form ownership can leave this a no-op.
    fn associate_with_form(
        &self,
        _target: &Self::Handle,
        _form: &Self::Handle,
        _nodes: (&Self::Handle, Option<&Self::Handle>),
    ) {
    }

    /// Is `target` a MathML `annotation-xml` element whose `encoding`
    /// attribute marks it as an HTML/SVG integration point?
    fn is_mathml_annotation_xml_integration_point(&self, target: &Self::Handle) -> bool;

    /// Mark a script element as "already started", so it is never executed
    /// (script execution is out of scope for this parser).
    fn mark_script_already_started(&self, node: &Self::Handle);

    /// Record that tokenization has reached a given source line, for
    /// error-position reporting. Default is a no-op.
    fn set_current_line(&self, _line: u64) {}

    /// Finish parsing a script element; whether the tokenizer should pause
    /// (always `Continue` — script execution never happens here).
    fn complete_script(&self, _node: &Self::Handle) -> NextParserState {
        NextParserState::Continue
    }

    /// Notify the adapter that `node` has been popped off the
    /// open-elements stack, for adapters that mirror it. Default no-op.
    fn pop(&self, _node: &Self::Handle) {}

    /// Does the document that `intended_parent` belongs to permit
    /// declarative shadow roots? Default `false`: most adapters have no
    /// concept of shadow trees.
    fn allow_declarative_shadow_roots(&self, _intended_parent: &Self::Handle) -> bool {
        false
    }

    /// Attach a declarative shadow root to `shadow_host`, backed by
    /// `template`'s contents, per
    /// <https://html.spec.whatwg.org/#attach-a-shadow-root>. Returns whether
    /// attachment succeeded; on `false` the caller falls back to inserting
    /// `template` as an ordinary element. Default: unsupported.
    fn attach_declarative_shadow(
        &self,
        _shadow_host: &Self::Handle,
        _template: &Self::Handle,
        _attrs: &[Attribute],
    ) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ns_macro() {
        assert_eq!(ns!(), Namespace::from(""));
        assert_eq!(ns!(html), Namespace::from("http://www.w3.org/1999/xhtml"));
        assert_eq!(ns!(xml), Namespace::from("http://www.w3.org/XML/1998/namespace"));
        assert_eq!(ns!(xmlns), Namespace::from("http://www.w3.org/2000/xmlns/"));
        assert_eq!(ns!(xlink), Namespace::from("http://www.w3.org/1999/xlink"));
        assert_eq!(ns!(svg), Namespace::from("http://www.w3.org/2000/svg"));
        assert_eq!(ns!(mathml), Namespace::from("http://www.w3.org/1998/Math/MathML"));
    }

    #[test]
    fn qual_name_expands() {
        let q = QualName::new(None, ns!(html), local_name!("div"));
        let e = q.expanded();
        assert_eq!(e.local, &local_name!("div"));
    }
}
