//! A minimal reference-counted DOM, wired up as an `html_parser::tree_builder::TreeSink`.
//!
//! Good enough to hold a static parse tree and serialize it back out; not
//! a substitute for a real browser DOM (no live collections, no mutation
//! observers, no garbage-collected cycles beyond what `Rc`/`Weak` gives
//! for free).

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::mem;
use std::rc::{Rc, Weak};

use tendril::StrTendril;

use html_parser::serialize::{Serialize, Serializer, TraversalScope};
use html_parser::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use markup_core::{Attribute, ExpandedName, QualName};

/// The different kinds of node this DOM can hold.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Doctype {
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    },
    Text {
        contents: RefCell<StrTendril>,
    },
    Comment {
        contents: StrTendril,
    },
    Element {
        name: QualName,
        attrs: RefCell<Vec<Attribute>>,
        /// Contents of a `<template>` element, held as a detached
        /// document fragment per the spec's "template contents" concept.
        template_contents: RefCell<Option<Handle>>,
        mathml_annotation_xml_integration_point: bool,
    },
    ProcessingInstruction {
        target: StrTendril,
        contents: StrTendril,
    },
}

/// A node in the tree. Children are owned (`Rc`); the parent link is a
/// `Weak` reference so dropping a subtree doesn't leave a reference cycle.
pub struct Node {
    pub parent: Cell<Option<WeakHandle>>,
    pub children: RefCell<Vec<Handle>>,
    pub data: NodeData,
}

impl Node {
    pub fn new(data: NodeData) -> Rc<Self> {
        Rc::new(Node {
            data,
            parent: Cell::new(None),
            children: RefCell::new(Vec::new()),
        })
    }

    fn take_parent(&self) -> Option<WeakHandle> {
        let parent = self.parent.take();
        self.parent.set(parent.clone());
        parent
    }

    /// Deep-clone this node and its descendants into a fresh, detached
    /// subtree.
    ///
    /// Recurses without a cycle guard: fine for a parse tree, which can't
    /// contain cycles, but don't reuse this on an arbitrary graph.
    fn clone_with_subtree(&self) -> Rc<Self> {
        let children = self
            .children
            .borrow()
            .iter()
            .map(|child| child.clone_with_subtree())
            .collect();
        Rc::new(Node {
            parent: Cell::new(None),
            data: self.data.clone(),
            children: RefCell::new(children),
        })
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Break the tree apart iteratively; a recursive Drop would blow the
        // stack on a deeply nested document.
        let mut pending = mem::take(&mut *self.children.borrow_mut());
        while let Some(node) = pending.pop() {
            let children = mem::take(&mut *node.children.borrow_mut());
            pending.extend(children);
            if let NodeData::Element {
                ref template_contents,
                ..
            } = node.data
            {
                if let Some(contents) = template_contents.borrow_mut().take() {
                    pending.push(contents);
                }
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Node").field("data", &self.data).finish()
    }
}

/// Reference to a node, handed out by [`SimpleDom`] as a `TreeSink::Handle`.
pub type Handle = Rc<Node>;

/// Parent-pointer reference; never followed to keep a node alive.
pub type WeakHandle = Weak<Node>;

fn append(parent: &Handle, child: Handle) {
    let previous = child.parent.replace(Some(Rc::downgrade(parent)));
    assert!(previous.is_none(), "node already had a parent");
    parent.children.borrow_mut().push(child);
}

fn parent_and_index(target: &Handle) -> Option<(Handle, usize)> {
    let weak = target.take_parent()?;
    let parent = weak.upgrade().expect("dangling parent pointer");
    let index = parent
        .children
        .borrow()
        .iter()
        .position(|child| Rc::ptr_eq(child, target))
        .expect("node not found among its parent's children");
    Some((parent, index))
}

fn append_to_existing_text(prev: &Handle, text: &str) -> bool {
    match prev.data {
        NodeData::Text { ref contents } => {
            contents.borrow_mut().push_slice(text);
            true
        },
        _ => false,
    }
}

fn detach(target: &Handle) {
    if let Some((parent, index)) = parent_and_index(target) {
        parent.children.borrow_mut().remove(index);
        target.parent.set(None);
    }
}

/// The parsed document, plus whatever diagnostics the tree builder
/// reported along the way.
pub struct SimpleDom {
    pub document: Handle,
    pub errors: RefCell<Vec<Cow<'static, str>>>,
    pub quirks_mode: Cell<QuirksMode>,
}

impl Default for SimpleDom {
    fn default() -> Self {
        SimpleDom {
            document: Node::new(NodeData::Document),
            errors: RefCell::new(Vec::new()),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
        }
    }
}

impl TreeSink for SimpleDom {
    type Handle = Handle;
    type Output = Self;
    type ElemName<'a> = ExpandedName<'a>;

    fn finish(self) -> Self {
        self
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        self.errors.borrow_mut().push(msg);
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
    }

    fn get_document(&self) -> Handle {
        self.document.clone()
    }

    fn get_template_contents(&self, target: &Handle) -> Handle {
        match target.data {
            NodeData::Element {
                ref template_contents,
                ..
            } => template_contents
                .borrow()
                .clone()
                .expect("not a template element"),
            _ => panic!("not a template element"),
        }
    }

    fn same_node(&self, x: &Handle, y: &Handle) -> bool {
        Rc::ptr_eq(x, y)
    }

    fn elem_name<'a>(&'a self, target: &'a Handle) -> ExpandedName<'a> {
        match target.data {
            NodeData::Element { ref name, .. } => name.expanded(),
            _ => panic!("not an element"),
        }
    }

    fn create_element(&self, name: QualName, attrs: Vec<Attribute>, flags: ElementFlags) -> Handle {
        Node::new(NodeData::Element {
            name,
            attrs: RefCell::new(attrs),
            template_contents: RefCell::new(if flags.template {
                Some(Node::new(NodeData::Document))
            } else {
                None
            }),
            mathml_annotation_xml_integration_point: flags.mathml_annotation_xml_integration_point,
        })
    }

    fn create_comment(&self, text: StrTendril) -> Handle {
        Node::new(NodeData::Comment { contents: text })
    }

    fn create_pi(&self, target: StrTendril, data: StrTendril) -> Handle {
        Node::new(NodeData::ProcessingInstruction {
            target,
            contents: data,
        })
    }

    fn append(&self, parent: &Handle, child: NodeOrText<Handle>) {
        if let NodeOrText::AppendText(ref text) = child {
            if let Some(last) = parent.children.borrow().last() {
                if append_to_existing_text(last, text) {
                    return;
                }
            }
        }

        append(
            parent,
            match child {
                NodeOrText::AppendText(text) => Node::new(NodeData::Text {
                    contents: RefCell::new(text),
                }),
                NodeOrText::AppendNode(node) => node,
            },
        );
    }

    fn append_before_sibling(&self, sibling: &Handle, child: NodeOrText<Handle>) {
        let (parent, index) =
            parent_and_index(sibling).expect("append_before_sibling on a detached node");

        let child = match (child, index) {
            (NodeOrText::AppendText(text), 0) => Node::new(NodeData::Text {
                contents: RefCell::new(text),
            }),
            (NodeOrText::AppendText(text), index) => {
                let children = parent.children.borrow();
                if append_to_existing_text(&children[index - 1], &text) {
                    return;
                }
                Node::new(NodeData::Text {
                    contents: RefCell::new(text),
                })
            },
            (NodeOrText::AppendNode(node), _) => node,
        };

        detach(&child);
        child.parent.set(Some(Rc::downgrade(&parent)));
        parent.children.borrow_mut().insert(index, child);
    }

    fn has_parent_node(&self, node: &Handle) -> bool {
        let parent = node.take_parent();
        let has_parent = parent.is_some();
        node.parent.set(parent);
        has_parent
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        append(
            &self.document,
            Node::new(NodeData::Doctype {
                name,
                public_id,
                system_id,
            }),
        );
    }

    fn add_attrs_if_missing(&self, target: &Handle, attrs: Vec<Attribute>) {
        let NodeData::Element { attrs: existing, .. } = &target.data else {
            panic!("not an element");
        };
        let mut existing = existing.borrow_mut();
        let present: HashSet<_> = existing.iter().map(|a| a.name.clone()).collect();
        existing.extend(attrs.into_iter().filter(|a| !present.contains(&a.name)));
    }

    fn remove_from_parent(&self, target: &Handle) {
        detach(target);
    }

    fn reparent_children(&self, node: &Handle, new_parent: &Handle) {
        let mut children = node.children.borrow_mut();
        for child in children.iter() {
            child.parent.set(Some(Rc::downgrade(new_parent)));
        }
        new_parent
            .children
            .borrow_mut()
            .extend(mem::take(&mut *children));
    }

    fn clone_subtree(&self, node: &Handle) -> Handle {
        node.clone_with_subtree()
    }

    fn is_mathml_annotation_xml_integration_point(&self, target: &Handle) -> bool {
        match target.data {
            NodeData::Element {
                mathml_annotation_xml_integration_point,
                ..
            } => mathml_annotation_xml_integration_point,
            _ => panic!("not an element"),
        }
    }

    fn mark_script_already_started(&self, _node: &Handle) {
        // Script execution is out of scope; nothing to record.
    }
}

enum SerializeOp {
    Open(Handle),
    Close(QualName),
}

/// Wraps a [`Handle`] so it can be fed to [`html_parser::serialize::serialize`].
pub struct SerializableHandle(pub Handle);

impl From<Handle> for SerializableHandle {
    fn from(handle: Handle) -> Self {
        SerializableHandle(handle)
    }
}

impl Serialize for SerializableHandle {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let mut ops = VecDeque::new();
        match traversal_scope {
            TraversalScope::IncludeNode => ops.push_back(SerializeOp::Open(self.0.clone())),
            TraversalScope::ChildrenOnly => ops.extend(
                self.0
                    .children
                    .borrow()
                    .iter()
                    .cloned()
                    .map(SerializeOp::Open),
            ),
        }

        while let Some(op) = ops.pop_front() {
            match op {
                SerializeOp::Open(handle) => match handle.data {
                    NodeData::Element {
                        ref name,
                        ref attrs,
                        ..
                    } => {
                        serializer.start_elem(
                            name.clone(),
                            attrs.borrow().iter().map(|attr| (&attr.name, &attr.value[..])),
                        )?;

                        ops.push_front(SerializeOp::Close(name.clone()));
                        for child in handle.children.borrow().iter().rev() {
                            ops.push_front(SerializeOp::Open(child.clone()));
                        }
                    },
                    NodeData::Doctype { ref name, .. } => serializer.write_doctype(name)?,
                    NodeData::Text { ref contents } => serializer.write_text(&contents.borrow())?,
                    NodeData::Comment { ref contents } => serializer.write_comment(contents)?,
                    NodeData::ProcessingInstruction {
                        ref target,
                        ref contents,
                    } => serializer.write_processing_instruction(target, contents)?,
                    NodeData::Document => panic!("cannot serialize a Document node itself"),
                },
                SerializeOp::Close(name) => serializer.end_elem(name)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html_parser::driver;
    use html_parser::tendril::TendrilSink;

    fn parse(html: &str) -> SimpleDom {
        driver::parse_document(SimpleDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .unwrap()
    }

    fn first_element(dom: &SimpleDom, name: &str) -> Option<Handle> {
        let mut queue = VecDeque::new();
        queue.push_back(dom.document.clone());
        while let Some(node) = queue.pop_front() {
            if let NodeData::Element { name: n, .. } = &node.data {
                if &*n.local == name {
                    return Some(node);
                }
            }
            queue.extend(node.children.borrow().iter().cloned());
        }
        None
    }

    #[test]
    fn parses_a_minimal_document_into_html_head_body() {
        let dom = parse("<title>hi</title><p>hello</p>");
        assert!(first_element(&dom, "html").is_some());
        assert!(first_element(&dom, "head").is_some());
        assert!(first_element(&dom, "body").is_some());
    }

    #[test]
    fn text_nodes_are_merged_when_appended_consecutively() {
        let dom = parse("<p>hello</p>");
        let p = first_element(&dom, "p").unwrap();
        assert_eq!(p.children.borrow().len(), 1);
    }

    #[test]
    fn round_trips_through_the_serializer() {
        let dom = parse("<p>hi &amp; bye</p>");
        let mut out = Vec::new();
        html_parser::serialize::serialize(
            &mut out,
            &SerializableHandle(dom.document.clone()),
            Default::default(),
        )
        .unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("<p>hi &amp; bye</p>"));
    }
}
