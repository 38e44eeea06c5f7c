use html_parser::driver;
use html_parser::serialize::{serialize, SerializeOpts, TraversalScope};
use html_parser::tendril::TendrilSink;
use simple_dom::{SerializableHandle, SimpleDom};

fn parse(html: &str) -> SimpleDom {
    driver::parse_document(SimpleDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap()
}

fn render(dom: &SimpleDom, opts: SerializeOpts) -> String {
    let mut out = Vec::new();
    serialize(&mut out, &SerializableHandle(dom.document.clone()), opts).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn round_trips_a_full_document_through_parse_and_serialize() {
    let dom = parse("<!doctype html><html><head><title>t</title></head><body><p>hi</p></body></html>");
    let rendered = render(&dom, SerializeOpts::default());
    assert!(rendered.contains("<title>t</title>"));
    assert!(rendered.contains("<p>hi</p>"));
}

#[test]
fn void_elements_round_trip_without_a_closing_tag() {
    let dom = parse("<p>line one<br>line two</p>");
    let rendered = render(&dom, SerializeOpts::default());
    assert!(rendered.contains("<br>"));
    assert!(!rendered.contains("</br>"));
}

#[test]
fn script_contents_survive_serialization_unescaped() {
    let dom = parse("<script>if (a < b) { x(); }</script>");
    let rendered = render(&dom, SerializeOpts::default());
    assert!(rendered.contains("if (a < b) { x(); }"));
}

#[test]
fn attribute_values_are_escaped_on_the_way_out() {
    let dom = parse(r#"<div title="a &amp; b"></div>"#);
    let rendered = render(&dom, SerializeOpts::default());
    assert!(rendered.contains("title=\"a &amp; b\""));
}

#[test]
fn children_only_scope_omits_the_root_element_itself() {
    let dom = parse("<p>hi</p>");
    let body = {
        // Find the <body> element to serialize just its children.
        fn find(node: &simple_dom::Handle, name: &str) -> Option<simple_dom::Handle> {
            if let simple_dom::NodeData::Element { name: n, .. } = &node.data {
                if &*n.local == name {
                    return Some(node.clone());
                }
            }
            for child in node.children.borrow().iter() {
                if let Some(found) = find(child, name) {
                    return Some(found);
                }
            }
            None
        }
        find(&dom.document, "body").unwrap()
    };

    let mut out = Vec::new();
    serialize(
        &mut out,
        &SerializableHandle(body),
        SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly,
            ..Default::default()
        },
    )
    .unwrap();
    let rendered = String::from_utf8(out).unwrap();
    assert!(!rendered.contains("<body>"));
    assert!(rendered.contains("<p>hi</p>"));
}
