use std::collections::VecDeque;

use html_parser::driver;
use html_parser::tendril::TendrilSink;
use html_parser::tree_builder::QuirksMode;
use simple_dom::{Handle, NodeData, SimpleDom};

fn parse(html: &str) -> SimpleDom {
    driver::parse_document(SimpleDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap()
}

fn find_element(root: &Handle, name: &str) -> Option<Handle> {
    let mut queue = VecDeque::new();
    queue.push_back(root.clone());
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

fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => out.push_str(&text_content(child)),
            _ => {},
        }
    }
    out
}

#[test]
fn a_doctype_with_no_public_or_system_id_is_no_quirks() {
    let dom = parse("<!doctype html><p>hi</p>");
    assert_eq!(dom.quirks_mode.get(), QuirksMode::NoQuirks);
}

#[test]
fn a_missing_doctype_selects_quirks_mode() {
    let dom = parse("<p>hi</p>");
    assert_eq!(dom.quirks_mode.get(), QuirksMode::Quirks);
}

#[test]
fn head_and_body_are_implied_when_omitted() {
    let dom = parse("<title>t</title><p>hi</p>");
    assert!(find_element(&dom.document, "html").is_some());
    assert!(find_element(&dom.document, "head").is_some());
    assert!(find_element(&dom.document, "body").is_some());
}

#[test]
fn text_directly_inside_a_table_is_foster_parented_before_it() {
    // https://html.spec.whatwg.org/multipage/parsing.html#foster-parent
    // Text that would otherwise become a child of <table> is relocated to
    // just before the table in its parent's child list.
    let dom = parse("<div><table>stray text<tr><td>cell</td></tr></table></div>");
    let div = find_element(&dom.document, "div").unwrap();
    let children = div.children.borrow();
    let table_index = children
        .iter()
        .position(|c| matches!(&c.data, NodeData::Element { name, .. } if &*name.local == "table"))
        .expect("table should be a child of the div");
    assert!(
        children[..table_index]
            .iter()
            .any(|c| matches!(&c.data, NodeData::Text { contents } if !contents.borrow().trim().is_empty())),
        "stray text should have been foster-parented before the table"
    );
}

#[test]
fn mismatched_formatting_elements_are_reconstructed_by_the_adoption_agency() {
    // <b> closes with no matching </b> for the outer tag; the adoption
    // agency algorithm should still wrap "bar" in a reconstructed <b>.
    let dom = parse("<p><b>foo<i>bar</p>baz</i></p>");
    let i = find_element(&dom.document, "i").unwrap();
    assert!(find_element(&i, "b").is_some());
}

#[test]
fn a_template_elements_contents_are_kept_in_a_separate_fragment() {
    let dom = parse("<template><p>hi</p></template>");
    let template = find_element(&dom.document, "template").unwrap();
    // The <p> is parked in the template's content fragment, not as a
    // normal child of <template> in the main tree.
    assert!(template.children.borrow().is_empty());
}

#[test]
fn a_fragment_parse_is_rooted_at_the_context_element_without_html_or_body() {
    use markup_core::{local_name, ns, QualName};

    let context = QualName::new(None, ns!(html), local_name!("div"));
    let dom = driver::parse_fragment(SimpleDom::default(), Default::default(), context, vec![])
        .from_utf8()
        .read_from(&mut "<p>hello</p>".as_bytes())
        .unwrap();

    assert!(find_element(&dom.document, "html").is_none());
    let p = find_element(&dom.document, "p").expect("fragment should contain the <p>");
    assert_eq!(text_content(&p), "hello");
}
