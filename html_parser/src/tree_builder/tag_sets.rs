// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Predicates over `ExpandedName` describing the various named tag sets
//! the tree builder consults: "has an element in scope", "generate implied
//! end tags", and so on.
//!
//! `declare_tag_set!` builds one of these predicates from a list of HTML
//! local names, optionally starting from an existing set and excluding a
//! few names from it (`[base] - "a" "b"`).

macro_rules! declare_tag_set {
    ($name:ident = [$base:ident] - $($tag:tt)+) => {
        pub(crate) fn $name(name: markup_core::ExpandedName) -> bool {
            if matches!(name, $(markup_core::expanded_name!(html $tag))|+) {
                false
            } else {
                $base(name)
            }
        }
    };
    ($name:ident = $($tag:tt)+) => {
        pub(crate) fn $name(name: markup_core::ExpandedName) -> bool {
            matches!(name, $(markup_core::expanded_name!(html $tag))|+)
        }
    };
}

// https://html.spec.whatwg.org/multipage/parsing.html#has-an-element-in-the-specific-scope

declare_tag_set!(default_scope =
    "applet" "caption" "html" "table" "td" "th" "marquee" "object" "template");

declare_tag_set!(list_item_scope = [default_scope] - "ol" "ul");

declare_tag_set!(button_scope = [default_scope] - "button");

declare_tag_set!(table_scope = "html" "table" "template");

// The select-item scope boundary is the inverse of the usual tag sets:
// everything stops the search except <option> and <optgroup> themselves.
pub(crate) fn select_scope(name: markup_core::ExpandedName) -> bool {
    !matches!(name, markup_core::expanded_name!(html "option") | markup_core::expanded_name!(html "optgroup"))
}

// https://html.spec.whatwg.org/multipage/parsing.html#generate-implied-end-tags

declare_tag_set!(cursory_implied_end =
    "dd" "dt" "li" "option" "optgroup" "p" "rb" "rp" "rt" "rtc");

declare_tag_set!(thorough_implied_end = [cursory_implied_end] -
    "tbody" "td" "tfoot" "th" "thead" "tr" "body" "caption" "col" "colgroup" "html");

// Other named sets used around tree construction.

declare_tag_set!(heading_tag = "h1" "h2" "h3" "h4" "h5" "h6");

declare_tag_set!(special_tag =
    "address" "applet" "area" "article" "aside" "base" "basefont" "bgsound"
    "blockquote" "body" "br" "button" "caption" "center" "col" "colgroup"
    "dd" "details" "dir" "div" "dl" "dt" "embed" "fieldset" "figcaption"
    "figure" "footer" "form" "frame" "frameset" "h1" "h2" "h3" "h4" "h5" "h6"
    "head" "header" "hgroup" "hr" "html" "iframe" "img" "input" "keygen" "li"
    "link" "listing" "main" "marquee" "menu" "meta" "nav" "noembed"
    "noframes" "noscript" "object" "ol" "p" "param" "plaintext" "pre"
    "script" "search" "section" "select" "source" "style" "summary" "table"
    "tbody" "td" "template" "textarea" "tfoot" "th" "thead" "title" "tr"
    "track" "ul" "wbr" "xmp");

declare_tag_set!(td_th = "td" "th");

declare_tag_set!(table_body_context = "tbody" "tfoot" "thead" "html");

declare_tag_set!(table_row_context = "tr" "html");

#[cfg(test)]
mod tests {
    use super::*;
    use markup_core::expanded_name;

    #[test]
    fn default_scope_contains_table() {
        assert!(default_scope(expanded_name!(html "table")));
    }

    #[test]
    fn default_scope_excludes_div() {
        assert!(!default_scope(expanded_name!(html "div")));
    }

    #[test]
    fn list_item_scope_adds_ol_ul_on_top_of_default() {
        assert!(list_item_scope(expanded_name!(html "ol")));
        assert!(list_item_scope(expanded_name!(html "table")));
        assert!(!list_item_scope(expanded_name!(html "div")));
    }

    #[test]
    fn button_scope_adds_button() {
        assert!(button_scope(expanded_name!(html "button")));
        assert!(!list_item_scope(expanded_name!(html "button")));
    }

    #[test]
    fn select_scope_stops_everywhere_except_option_and_optgroup() {
        assert!(!select_scope(expanded_name!(html "option")));
        assert!(!select_scope(expanded_name!(html "optgroup")));
        assert!(select_scope(expanded_name!(html "select")));
        assert!(select_scope(expanded_name!(html "table")));
    }

    #[test]
    fn thorough_implied_end_is_superset_of_cursory() {
        assert!(thorough_implied_end(expanded_name!(html "p")));
        assert!(thorough_implied_end(expanded_name!(html "tbody")));
        assert!(!cursory_implied_end(expanded_name!(html "tbody")));
    }

    #[test]
    fn heading_tag_matches_all_six_levels() {
        assert!(heading_tag(expanded_name!(html "h1")));
        assert!(heading_tag(expanded_name!(html "h6")));
        assert!(!heading_tag(expanded_name!(html "header")));
    }

    #[test]
    fn special_tag_contains_div_but_not_span() {
        assert!(special_tag(expanded_name!(html "div")));
        assert!(!special_tag(expanded_name!(html "span")));
    }
}
