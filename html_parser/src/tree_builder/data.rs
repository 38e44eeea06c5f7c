// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Static tables used by the tree builder: quirks-mode detection from a
//! DOCTYPE token.

use markup_core::interface::{LimitedQuirks, NoQuirks, Quirks, QuirksMode};
use crate::tokenizer::Doctype;

// https://html.spec.whatwg.org/multipage/parsing.html#the-doctype-token-quirks-list
const QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "+//silmaril//dtd html pro v0r11 19970101//",
    "-//as//dtd html 3.0 aswedit + extensions//",
    "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
    "-//ietf//dtd html 2.0 level 1//",
    "-//ietf//dtd html 2.0 level 2//",
    "-//ietf//dtd html 2.0 strict level 1//",
    "-//ietf//dtd html 2.0 strict level 2//",
    "-//ietf//dtd html 2.0 strict//",
    "-//ietf//dtd html 2.0//",
    "-//ietf//dtd html 2.1e//",
    "-//ietf//dtd html 3.0//",
    "-//ietf//dtd html 3.2 final//",
    "-//ietf//dtd html 3.2//",
    "-//ietf//dtd html 3//",
    "-//ietf//dtd html level 0//",
    "-//ietf//dtd html level 1//",
    "-//ietf//dtd html level 2//",
    "-//ietf//dtd html level 3//",
    "-//ietf//dtd html strict level 0//",
    "-//ietf//dtd html strict level 1//",
    "-//ietf//dtd html strict level 2//",
    "-//ietf//dtd html strict level 3//",
    "-//ietf//dtd html strict//",
    "-//ietf//dtd html//",
    "-//metrius//dtd metrius presentational//",
    "-//microsoft//dtd internet explorer 2.0 html strict//",
    "-//microsoft//dtd internet explorer 2.0 html//",
    "-//microsoft//dtd internet explorer 2.0 tables//",
    "-//microsoft//dtd internet explorer 3.0 html strict//",
    "-//microsoft//dtd internet explorer 3.0 html//",
    "-//microsoft//dtd internet explorer 3.0 tables//",
    "-//netscape comm. corp.//dtd html//",
    "-//netscape comm. corp.//dtd strict html//",
    "-//o'reilly and associates//dtd html 2.0//",
    "-//o'reilly and associates//dtd html extended 1.0//",
    "-//o'reilly and associates//dtd html extended relaxed 1.0//",
    "-//sq//dtd html 2.0 hotmetal + extensions//",
    "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
    "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
    "-//spyglass//dtd html 2.0 extended//",
    "-//sun microsystems corp.//dtd hotjava html//",
    "-//sun microsystems corp.//dtd hotjava strict html//",
    "-//w3c//dtd html 3 1995-03-24//",
    "-//w3c//dtd html 3.2 draft//",
    "-//w3c//dtd html 3.2 final//",
    "-//w3c//dtd html 3.2//",
    "-//w3c//dtd html 3.2s draft//",
    "-//w3c//dtd html 4.0 frameset//",
    "-//w3c//dtd html 4.0 transitional//",
    "-//w3c//dtd html experimental 19960712//",
    "-//w3c//dtd html experimental 970421//",
    "-//w3c//dtd w3 html//",
    "-//w3o//dtd w3 html 3.0//",
    "-//webtechs//dtd mozilla html 2.0//",
    "-//webtechs//dtd mozilla html//",
];

const QUIRKY_PUBLIC_MATCHES: &[&str] = &[
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-/w3c/dtd html 4.0 transitional/en",
    "html",
];

const QUIRKY_SYSTEM_MATCHES: &[&str] =
    &["http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"];

const LIMITED_QUIRKY_PUBLIC_PREFIXES: &[&str] = &[
    "-//w3c//dtd xhtml 1.0 frameset//",
    "-//w3c//dtd xhtml 1.0 transitional//",
];

fn ascii_lower(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

fn opt_starts_with_any(value: Option<&str>, prefixes: &[&str]) -> bool {
    match value {
        None => false,
        Some(v) => {
            let v = ascii_lower(v);
            prefixes.iter().any(|p| v.starts_with(p))
        }
    }
}

fn opt_equals_any(value: Option<&str>, candidates: &[&str]) -> bool {
    match value {
        None => false,
        Some(v) => {
            let v = ascii_lower(v);
            candidates.iter().any(|c| v == *c)
        }
    }
}

/// Determine whether a DOCTYPE token is malformed according to the spec's
/// error-reporting rules, and which quirks mode it selects.
///
/// Returns `(is_error, quirks_mode)`.
pub(super) fn doctype_error_and_quirks(doctype: &Doctype, iframe_srcdoc: bool) -> (bool, QuirksMode) {
    fn is_exact_html(s: &Option<tendril::StrTendril>) -> bool {
        match s {
            Some(s) => &**s == "html",
            None => false,
        }
    }

    let name_ok = is_exact_html(&doctype.name);
    let public_ok = doctype.public_id.is_none();
    let system_ok = doctype.system_id.is_none()
        || doctype.system_id.as_deref() == Some("about:legacy-compat");

    let err = !name_ok || !public_ok || !system_ok;

    if iframe_srcdoc {
        return (err, NoQuirks);
    }

    if doctype.force_quirks {
        return (err, Quirks);
    }

    let public_id = doctype.public_id.as_deref();
    let system_id = doctype.system_id.as_deref();

    if opt_equals_any(public_id, &["-//w3o//dtd w3 html strict 3.0//en//", "-/w3c/dtd html 4.0 transitional/en"])
        || opt_equals_any(public_id, &["html"])
        || opt_starts_with_any(public_id, QUIRKY_PUBLIC_PREFIXES)
        || opt_starts_with_any(public_id, QUIRKY_PUBLIC_MATCHES)
        || opt_equals_any(system_id, QUIRKY_SYSTEM_MATCHES)
        || (system_id.is_none() && opt_starts_with_any(public_id, &["-//w3c//dtd html 4.01 frameset//", "-//w3c//dtd html 4.01 transitional//"]))
    {
        return (err, Quirks);
    }

    if opt_starts_with_any(public_id, LIMITED_QUIRKY_PUBLIC_PREFIXES)
        || (system_id.is_some()
            && opt_starts_with_any(public_id, &["-//w3c//dtd html 4.01 frameset//", "-//w3c//dtd html 4.01 transitional//"]))
    {
        return (err, LimitedQuirks);
    }

    (err, NoQuirks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tendril::SliceExt;

    fn doctype(name: Option<&str>, public_id: Option<&str>, system_id: Option<&str>) -> Doctype {
        Doctype {
            name: name.map(|s| s.to_tendril()),
            public_id: public_id.map(|s| s.to_tendril()),
            system_id: system_id.map(|s| s.to_tendril()),
            force_quirks: false,
        }
    }

    #[test]
    fn plain_html5_doctype_is_no_quirks() {
        let (err, mode) = doctype_error_and_quirks(&doctype(Some("html"), None, None), false);
        assert!(!err);
        assert_eq!(mode, NoQuirks);
    }

    #[test]
    fn html4_transitional_without_system_id_is_quirks() {
        let dt = doctype(Some("html"), Some("-//W3C//DTD HTML 4.01 Transitional//EN"), None);
        let (_, mode) = doctype_error_and_quirks(&dt, false);
        assert_eq!(mode, Quirks);
    }

    #[test]
    fn html4_transitional_with_system_id_is_limited_quirks() {
        let dt = doctype(
            Some("html"),
            Some("-//W3C//DTD HTML 4.01 Transitional//EN"),
            Some("http://www.w3.org/TR/html4/loose.dtd"),
        );
        let (_, mode) = doctype_error_and_quirks(&dt, false);
        assert_eq!(mode, LimitedQuirks);
    }

    #[test]
    fn missing_name_is_an_error() {
        let dt = doctype(None, None, None);
        let (err, _) = doctype_error_and_quirks(&dt, false);
        assert!(err);
    }

    #[test]
    fn iframe_srcdoc_is_always_no_quirks() {
        let dt = doctype(None, Some("garbage"), None);
        let (_, mode) = doctype_error_and_quirks(&dt, true);
        assert_eq!(mode, NoQuirks);
    }
}
