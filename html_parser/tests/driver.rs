use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use html_parser::interface::{ElementFlags, NodeOrText, QuirksMode};
use html_parser::tendril::{SliceExt, TendrilSink};
use html_parser::tree_builder::TreeSink;
use html_parser::{driver, expanded_name, local_name, ns, Attribute, ExpandedName, ParseOpts, QualName};
use html_parser::tendril::StrTendril;

/// A tree sink that only tracks element identities, for exercising the
/// driver without pulling in a real DOM implementation.
#[derive(Default)]
struct Sink {
    next_id: Cell<usize>,
    names: RefCell<HashMap<usize, &'static QualName>>,
}

impl Sink {
    fn get_id(&self) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl TreeSink for Sink {
    type Handle = usize;
    type Output = Self;
    type ElemName<'a> = ExpandedName<'a>;

    fn finish(self) -> Self {
        self
    }

    fn get_document(&self) -> usize {
        0
    }

    fn get_template_contents(&self, target: &usize) -> usize {
        if let Some(expanded_name!(html "template")) =
            self.names.borrow().get(target).map(|n| n.expanded())
        {
            target + 1
        } else {
            panic!("not a template element")
        }
    }

    fn same_node(&self, x: &usize, y: &usize) -> bool {
        x == y
    }

    fn elem_name(&self, target: &usize) -> ExpandedName<'_> {
        self.names
            .borrow()
            .get(target)
            .expect("not an element")
            .expanded()
    }

    fn create_element(&self, name: QualName, _attrs: Vec<Attribute>, _flags: ElementFlags) -> usize {
        let id = self.get_id();
        self.names.borrow_mut().insert(id, Box::leak(Box::new(name)));
        id
    }

    fn create_comment(&self, _text: StrTendril) -> usize {
        self.get_id()
    }

    fn create_pi(&self, _target: StrTendril, _value: StrTendril) -> usize {
        self.get_id()
    }

    fn append_before_sibling(&self, _sibling: &usize, _new_node: NodeOrText<usize>) {}

    fn has_parent_node(&self, _node: &usize) -> bool {
        false
    }

    fn is_mathml_annotation_xml_integration_point(&self, _target: &usize) -> bool {
        false
    }

    fn parse_error(&self, _msg: Cow<'static, str>) {}
    fn set_quirks_mode(&self, _mode: QuirksMode) {}
    fn append(&self, _parent: &usize, _child: NodeOrText<usize>) {}

    fn append_doctype_to_document(&self, _: StrTendril, _: StrTendril, _: StrTendril) {}

    fn add_attrs_if_missing(&self, target: &usize, _attrs: Vec<Attribute>) {
        assert!(self.names.borrow().contains_key(target), "not an element");
    }

    fn remove_from_parent(&self, _target: &usize) {}
    fn reparent_children(&self, _node: &usize, _new_parent: &usize) {}
    fn mark_script_already_started(&self, _node: &usize) {}

    fn clone_subtree(&self, _node: &Self::Handle) -> Self::Handle {
        self.get_id()
    }
}

#[test]
fn driver_is_not_interrupted_by_back_to_back_meta_tags() {
    // A sequence of non-script tags that each produce an EncodingIndicator
    // must not confuse the tokenizer into treating the stream as done.
    let input = "<meta charset=\"UTF-8\" /><meta charset=\"UTF-8\" /> other stuff";
    let mut parser = driver::parse_document(Sink::default(), ParseOpts::default());
    parser.process(input.to_tendril());
    parser.finish();
}

#[test]
fn driver_parses_a_document_fed_in_one_shot() {
    let sink = driver::parse_document(Sink::default(), ParseOpts::default())
        .one("<!doctype html><html><body><p>hello</p></body></html>".to_tendril());
    // Body and html were both created as elements; the sink tracked them.
    assert!(sink.names.borrow().len() >= 2);
}

#[test]
fn driver_parses_a_fragment_rooted_at_a_context_element() {
    let sink = Sink::default();
    let context = QualName::new(None, ns!(html), local_name!("div"));
    let parser = driver::parse_fragment(sink, ParseOpts::default(), context, vec![]);
    let out = parser.one("<p>fragment text</p>".to_tendril());
    assert!(!out.names.borrow().is_empty());
}
