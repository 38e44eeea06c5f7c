// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A concrete [`Serializer`] that writes the HTML fragment serialization
//! algorithm to any `io::Write`.

use std::default::Default;
use std::io;
use std::io::Write;

use markup_core::interface::QualName;
use markup_core::local_name;

pub use markup_core::serialize::{AttrRef, Serialize, Serializer, TraversalScope};

/// Options for [`serialize`].
#[derive(Clone)]
pub struct SerializeOpts {
    /// Is scripting enabled? Affects whether the contents of a `<noscript>`
    /// element are serialized as text (scripting disabled, the element's
    /// children are real markup) or as raw text (scripting enabled).
    ///
    /// Default: true.
    pub scripting_enabled: bool,

    /// Serialize the root node itself, or only its children?
    ///
    /// Default: `ChildrenOnly`.
    pub traversal_scope: TraversalScope,

    /// If the serializer is asked to serialize an invalid tree fragment
    /// (e.g. a bare text node at the document root), create the implied
    /// parent elements rather than erroring.
    ///
    /// Default: false.
    pub create_missing_parent: bool,
}

impl Default for SerializeOpts {
    fn default() -> Self {
        SerializeOpts {
            scripting_enabled: true,
            traversal_scope: TraversalScope::ChildrenOnly,
            create_missing_parent: false,
        }
    }
}

/// Run the HTML serialization algorithm for `node`, writing to `writer`.
pub fn serialize<Wr, T>(writer: Wr, node: &T, opts: SerializeOpts) -> io::Result<()>
where
    Wr: Write,
    T: Serialize,
{
    let mut ser = HtmlSerializer::new(writer, opts.clone());
    node.serialize(&mut ser, opts.traversal_scope)
}

// https://html.spec.whatwg.org/multipage/syntax.html#void-elements
fn is_void_element(name: &QualName) -> bool {
    matches!(
        name.local,
        local_name!("area")
            | local_name!("base")
            | local_name!("basefont")
            | local_name!("bgsound")
            | local_name!("br")
            | local_name!("col")
            | local_name!("embed")
            | local_name!("frame")
            | local_name!("hr")
            | local_name!("img")
            | local_name!("input")
            | local_name!("keygen")
            | local_name!("link")
            | local_name!("meta")
            | local_name!("param")
            | local_name!("source")
            | local_name!("track")
            | local_name!("wbr")
    )
}

// https://html.spec.whatwg.org/multipage/parsing.html#serialises-as-void
// Elements whose contents are never escaped when serialized as text.
fn has_raw_text_contents(name: &QualName) -> bool {
    matches!(
        name.local,
        local_name!("style")
            | local_name!("script")
            | local_name!("xmp")
            | local_name!("iframe")
            | local_name!("noembed")
            | local_name!("noframes")
            | local_name!("plaintext")
            | local_name!("noscript")
    )
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// A `Serializer` that writes the HTML syntax directly, matching the
/// "HTML fragment serialization algorithm" in the spec: void elements get
/// no closing tag, `<script>`/`<style>`/etc. contents are never escaped,
/// and everything else goes through ordinary text/attribute escaping.
pub struct HtmlSerializer<Wr: Write> {
    writer: Wr,
    opts: SerializeOpts,
    // Stack of currently open elements, used only to decide whether the
    // current text node sits inside a raw-text element.
    stack: Vec<QualName>,
}

impl<Wr: Write> HtmlSerializer<Wr> {
    pub fn new(writer: Wr, opts: SerializeOpts) -> Self {
        HtmlSerializer {
            writer,
            opts,
            stack: Vec::new(),
        }
    }

    fn write_escaped_attribute(&mut self, v: &str) -> io::Result<()> {
        write!(self.writer, "\"{}\"", escape_attr_value(v))
    }

    fn in_raw_text_context(&self) -> bool {
        match self.stack.last() {
            Some(name) if name.local == local_name!("noscript") => self.opts.scripting_enabled,
            Some(name) => has_raw_text_contents(name),
            None => false,
        }
    }
}

impl<Wr: Write> Serializer for HtmlSerializer<Wr> {
    fn start_elem<'a, AttrIter>(&mut self, name: QualName, attrs: AttrIter) -> io::Result<()>
    where
        AttrIter: Iterator<Item = AttrRef<'a>>,
    {
        write!(self.writer, "<{}", name.local)?;
        for (attr_name, attr_value) in attrs {
            write!(self.writer, " ")?;
            if let Some(ref prefix) = attr_name.prefix {
                write!(self.writer, "{}:", prefix)?;
            }
            write!(self.writer, "{}=", attr_name.local)?;
            self.write_escaped_attribute(attr_value)?;
        }
        write!(self.writer, ">")?;

        self.stack.push(name);
        Ok(())
    }

    fn end_elem(&mut self, name: QualName) -> io::Result<()> {
        self.stack.pop();
        if is_void_element(&name) {
            return Ok(());
        }
        write!(self.writer, "</{}>", name.local)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        if self.in_raw_text_context() {
            write!(self.writer, "{text}")
        } else {
            write!(self.writer, "{}", escape_text(text))
        }
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "<!--{text}-->")
    }

    fn write_doctype(&mut self, name: &str) -> io::Result<()> {
        write!(self.writer, "<!DOCTYPE {name}>")
    }

    fn write_processing_instruction(&mut self, target: &str, data: &str) -> io::Result<()> {
        write!(self.writer, "<?{target} {data}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup_core::interface::Attribute;
    use markup_core::{ns, QualName};
    use tendril::SliceExt;

    fn name(local: &str) -> QualName {
        QualName::new(None, ns!(html), local.into())
    }

    #[test]
    fn void_elements_get_no_closing_tag() {
        let mut buf = Vec::new();
        let mut ser = HtmlSerializer::new(&mut buf, SerializeOpts::default());
        ser.start_elem(name("br"), std::iter::empty()).unwrap();
        ser.end_elem(name("br")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "<br>");
    }

    #[test]
    fn ordinary_elements_get_a_closing_tag() {
        let mut buf = Vec::new();
        let mut ser = HtmlSerializer::new(&mut buf, SerializeOpts::default());
        ser.start_elem(name("div"), std::iter::empty()).unwrap();
        ser.end_elem(name("div")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "<div></div>");
    }

    #[test]
    fn text_is_escaped_outside_raw_text_elements() {
        let mut buf = Vec::new();
        let mut ser = HtmlSerializer::new(&mut buf, SerializeOpts::default());
        ser.write_text("<a> & <b>").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "&lt;a&gt; &amp; &lt;b&gt;");
    }

    #[test]
    fn script_contents_are_not_escaped() {
        let mut buf = Vec::new();
        let mut ser = HtmlSerializer::new(&mut buf, SerializeOpts::default());
        let script_attrs: Vec<AttrRef> = vec![];
        ser.start_elem(name("script"), script_attrs.into_iter())
            .unwrap();
        ser.write_text("if (a < b && b > c) {}").unwrap();
        ser.end_elem(name("script")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "<script>if (a < b && b > c) {}</script>"
        );
    }

    #[test]
    fn attribute_values_are_quoted_and_escaped() {
        let mut buf = Vec::new();
        let mut ser = HtmlSerializer::new(&mut buf, SerializeOpts::default());
        let attr = Attribute {
            name: QualName::new(None, ns!(), local_name!("title")),
            value: "a \"quote\" & an amp".to_tendril(),
        };
        let attrs: Vec<AttrRef> = vec![(&attr.name, &attr.value)];
        ser.start_elem(name("span"), attrs.into_iter()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "<span title=\"a &quot;quote&quot; &amp; an amp\">"
        );
    }
}
