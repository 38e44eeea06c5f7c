//! Name interning for tags, attributes, and namespaces (C4's atom tables).
//!
//! Every tag/attribute/namespace name the parser touches is short: the
//! standard HTML, SVG and MathML vocabularies top out well under fifty
//! bytes. [`Atom`] exploits that by packing short strings inline as a
//! plain `(len, bytes)` pair — a POD value, comparable with plain integer
//! equality and constructible in `const` context, which is what lets
//! `local_name!("div")` and `ns!(html)` be used directly as match patterns
//! throughout tree construction. Anything too long to inline (arbitrary
//! author-supplied custom-element names, mostly) falls back to a
//! [`dat::Trie`]-backed interner: strings are leaked once into `'static`
//! storage and referenced by a small integer thereafter.
//!
//! The inline/leaked split above is about *storage*, not *recognition*.
//! Recognition — is this string one of the ~190 known HTML/SVG/MathML
//! local names — is handled separately by a second, read-only
//! [`dat::Trie`] (`KNOWN_LOCAL_NAMES`/`known_local`) that every runtime
//! `LocalName::from(&str)` call consults before falling through to
//! [`Atom::intern`]. A `match` pattern needs a `const`, so the compile-time
//! literal arms of [`local_name!`] can't be driven by a heap-backed trie
//! and still have to be written out by hand — but the runtime path that
//! interns a tag or attribute name read off the wire now goes through the
//! same trie engine the entity table does, rather than treating every
//! string under [`INLINE_CAP`] bytes as equally anonymous.

use std::fmt;
use std::sync::RwLock;

use dat::Trie;

/// Inline capacity in bytes. Covers every namespace URI and every
/// HTML/SVG/MathML local name used by this crate, with headroom to spare.
const INLINE_CAP: usize = 40;

/// Sentinel `tag_len` marking "look this one up in the interner instead".
const INTERNED: u8 = u8::MAX;

struct Interner {
    by_name: Trie,
    by_id: Vec<&'static str>,
}

impl Interner {
    fn new() -> Self {
        Interner {
            by_name: Trie::new(),
            by_id: Vec::new(),
        }
    }

    fn intern(&mut self, s: &str) -> u32 {
        if let Some(id) = self.by_name.get(s.as_bytes()) {
            return id as u32;
        }
        let id = self.by_id.len() as u32;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        self.by_id.push(leaked);
        self.by_name
            .insert_with_value(s.as_bytes(), id as i64)
            .expect("atom table overflow");
        id
    }
}

static INTERNER: RwLock<Option<Interner>> = RwLock::new(None);

fn with_interner<R>(f: impl FnOnce(&mut Interner) -> R) -> R {
    let mut guard = INTERNER.write().unwrap();
    let interner = guard.get_or_insert_with(Interner::new);
    f(interner)
}

/// A short interned string: inline for anything that fits in
/// [`INLINE_CAP`] bytes, trie-interned otherwise. `Copy`, hashes and
/// compares by content, and (for the inline case) is constructible in a
/// `const` so it can back match-pattern constants.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    tag_len: u8,
    bytes: [u8; INLINE_CAP],
}

impl Atom {
    /// Build an inline atom from a string literal known at compile time.
    /// Panics (at compile time, since this only ever runs in `const`
    /// contexts here) if `s` doesn't fit in [`INLINE_CAP`] bytes.
    pub const fn from_static(s: &'static str) -> Atom {
        let b = s.as_bytes();
        assert!(b.len() <= INLINE_CAP, "atom literal exceeds inline capacity");
        let mut bytes = [0u8; INLINE_CAP];
        let mut i = 0;
        while i < b.len() {
            bytes[i] = b[i];
            i += 1;
        }
        Atom {
            tag_len: b.len() as u8,
            bytes,
        }
    }

    pub fn intern(s: &str) -> Atom {
        if s.len() <= INLINE_CAP {
            let mut bytes = [0u8; INLINE_CAP];
            bytes[..s.len()].copy_from_slice(s.as_bytes());
            Atom {
                tag_len: s.len() as u8,
                bytes,
            }
        } else {
            let id = with_interner(|i| i.intern(s));
            let mut bytes = [0u8; INLINE_CAP];
            bytes[..4].copy_from_slice(&id.to_le_bytes());
            Atom {
                tag_len: INTERNED,
                bytes,
            }
        }
    }

    pub fn as_str(&self) -> &str {
        if self.tag_len == INTERNED {
            let id = u32::from_le_bytes(self.bytes[..4].try_into().unwrap());
            with_interner(|i| i.by_id[id as usize])
        } else {
            std::str::from_utf8(&self.bytes[..self.tag_len as usize])
                .expect("atom bytes are always valid utf-8")
        }
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::intern(s)
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Atom::intern(&s)
    }
}

impl PartialEq<str> for Atom {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Atom {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

macro_rules! atom_newtype {
    ($name:ident) => {
        atom_newtype!($name, no_known_names);
    };
    ($name:ident, $known:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub Atom);

        impl $name {
            pub const fn from_static(s: &'static str) -> Self {
                $name(Atom::from_static(s))
            }

            pub fn is_empty(&self) -> bool {
                self.0.as_str().is_empty()
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                if let Some(known) = $known(s) {
                    return known;
                }
                $name(Atom::intern(s))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:?})"), self.0.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.as_str())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0.as_str() == *other
            }
        }
    };
}

/// Fallback for the atom newtypes that have no known-name table: always
/// defers to [`Atom::intern`].
fn no_known_names<T>(_s: &str) -> Option<T> {
    None
}

atom_newtype!(LocalName, known_local);
atom_newtype!(Namespace, no_known_names);
atom_newtype!(Prefix, no_known_names);

/// The same names [`local_name!`] matches at compile time, paired with the
/// constant each one resolves to. A `match` pattern needs a `const` value,
/// which a heap-backed [`Trie`] can't produce, so the literal arms in
/// [`local_name!`] still have to be listed out by hand; this table lets the
/// *runtime* path — interning a tag or attribute name read off the wire —
/// go through the same trie engine instead of treating every name under
/// [`INLINE_CAP`] bytes as equally anonymous.
const KNOWN_LOCAL_NAMES: &[(&str, LocalName)] = &[
    ("a", local::a),
    ("altGlyph", local::altGlyph),
    ("annotation-xml", local::annotation_xml),
    ("altGlyphDef", local::altGlyphDef),
    ("altGlyphItem", local::altGlyphItem),
    ("altglyph", local::altglyph),
    ("altglyphdef", local::altglyphdef),
    ("altglyphitem", local::altglyphitem),
    ("animateColor", local::animateColor),
    ("animateMotion", local::animateMotion),
    ("animateTransform", local::animateTransform),
    ("animatecolor", local::animatecolor),
    ("animatemotion", local::animatemotion),
    ("animatetransform", local::animatetransform),
    ("attributename", local::attributename),
    ("attributetype", local::attributetype),
    ("basefrequency", local::basefrequency),
    ("baseprofile", local::baseprofile),
    ("body", local::body),
    ("button", local::button),
    ("calcmode", local::calcmode),
    ("caption", local::caption),
    ("clipPath", local::clipPath),
    ("color", local::color),
    ("clippath", local::clippath),
    ("clippathunits", local::clippathunits),
    ("colgroup", local::colgroup),
    ("dd", local::dd),
    ("definitionurl", local::definitionurl),
    ("diffuseconstant", local::diffuseconstant),
    ("dt", local::dt),
    ("edgemode", local::edgemode),
    ("face", local::face),
    ("feBlend", local::feBlend),
    ("feColorMatrix", local::feColorMatrix),
    ("feComponentTransfer", local::feComponentTransfer),
    ("feComposite", local::feComposite),
    ("feConvolveMatrix", local::feConvolveMatrix),
    ("feDiffuseLighting", local::feDiffuseLighting),
    ("feDisplacementMap", local::feDisplacementMap),
    ("feDistantLight", local::feDistantLight),
    ("feDropShadow", local::feDropShadow),
    ("feFlood", local::feFlood),
    ("feFuncA", local::feFuncA),
    ("feFuncB", local::feFuncB),
    ("feFuncG", local::feFuncG),
    ("feFuncR", local::feFuncR),
    ("feGaussianBlur", local::feGaussianBlur),
    ("feImage", local::feImage),
    ("feMerge", local::feMerge),
    ("feMergeNode", local::feMergeNode),
    ("feMorphology", local::feMorphology),
    ("feOffset", local::feOffset),
    ("fePointLight", local::fePointLight),
    ("feSpecularLighting", local::feSpecularLighting),
    ("feSpotLight", local::feSpotLight),
    ("feTile", local::feTile),
    ("feTurbulence", local::feTurbulence),
    ("feblend", local::feblend),
    ("fecolormatrix", local::fecolormatrix),
    ("fecomponenttransfer", local::fecomponenttransfer),
    ("fecomposite", local::fecomposite),
    ("feconvolvematrix", local::feconvolvematrix),
    ("fediffuselighting", local::fediffuselighting),
    ("fedisplacementmap", local::fedisplacementmap),
    ("fedistantlight", local::fedistantlight),
    ("fedropshadow", local::fedropshadow),
    ("feflood", local::feflood),
    ("fefunca", local::fefunca),
    ("fefuncb", local::fefuncb),
    ("fefuncg", local::fefuncg),
    ("fefuncr", local::fefuncr),
    ("fegaussianblur", local::fegaussianblur),
    ("feimage", local::feimage),
    ("femerge", local::femerge),
    ("femergenode", local::femergenode),
    ("femorphology", local::femorphology),
    ("feoffset", local::feoffset),
    ("fepointlight", local::fepointlight),
    ("fespecularlighting", local::fespecularlighting),
    ("fespotlight", local::fespotlight),
    ("fetile", local::fetile),
    ("feturbulence", local::feturbulence),
    ("filterunits", local::filterunits),
    ("foreignObject", local::foreignObject),
    ("foreignobject", local::foreignobject),
    ("form", local::form),
    ("frameset", local::frameset),
    ("glyphRef", local::glyphRef),
    ("glyphref", local::glyphref),
    ("gradienttransform", local::gradienttransform),
    ("gradientunits", local::gradientunits),
    ("head", local::head),
    ("html", local::html),
    ("iframe", local::iframe),
    ("img", local::img),
    ("input", local::input),
    ("kernelmatrix", local::kernelmatrix),
    ("kernelunitlength", local::kernelunitlength),
    ("keypoints", local::keypoints),
    ("keysplines", local::keysplines),
    ("keytimes", local::keytimes),
    ("lengthadjust", local::lengthadjust),
    ("li", local::li),
    ("limitingconeangle", local::limitingconeangle),
    ("linearGradient", local::linearGradient),
    ("lineargradient", local::lineargradient),
    ("malignmark", local::malignmark),
    ("markerheight", local::markerheight),
    ("markerunits", local::markerunits),
    ("markerwidth", local::markerwidth),
    ("maskcontentunits", local::maskcontentunits),
    ("maskunits", local::maskunits),
    ("mglyph", local::mglyph),
    ("nobr", local::nobr),
    ("noembed", local::noembed),
    ("noframes", local::noframes),
    ("noscript", local::noscript),
    ("numoctaves", local::numoctaves),
    ("optgroup", local::optgroup),
    ("option", local::option),
    ("p", local::p),
    ("pathlength", local::pathlength),
    ("patterncontentunits", local::patterncontentunits),
    ("patterntransform", local::patterntransform),
    ("patternunits", local::patternunits),
    ("plaintext", local::plaintext),
    ("pointsatx", local::pointsatx),
    ("pointsaty", local::pointsaty),
    ("pointsatz", local::pointsatz),
    ("preservealpha", local::preservealpha),
    ("preserveaspectratio", local::preserveaspectratio),
    ("primitiveunits", local::primitiveunits),
    ("radialGradient", local::radialGradient),
    ("radialgradient", local::radialgradient),
    ("refx", local::refx),
    ("refy", local::refy),
    ("repeatcount", local::repeatcount),
    ("repeatdur", local::repeatdur),
    ("requiredextensions", local::requiredextensions),
    ("requiredfeatures", local::requiredfeatures),
    ("rtc", local::rtc),
    ("ruby", local::ruby),
    ("script", local::script),
    ("select", local::select),
    ("shadowrootmode", local::shadowrootmode),
    ("size", local::size),
    ("specularconstant", local::specularconstant),
    ("specularexponent", local::specularexponent),
    ("spreadmethod", local::spreadmethod),
    ("startoffset", local::startoffset),
    ("stddeviation", local::stddeviation),
    ("stitchtiles", local::stitchtiles),
    ("style", local::style),
    ("surfacescale", local::surfacescale),
    ("svg", local::svg),
    ("systemlanguage", local::systemlanguage),
    ("table", local::table),
    ("tablevalues", local::tablevalues),
    ("targetx", local::targetx),
    ("targety", local::targety),
    ("tbody", local::tbody),
    ("td", local::td),
    ("template", local::template),
    ("textPath", local::textPath),
    ("textarea", local::textarea),
    ("textlength", local::textlength),
    ("textpath", local::textpath),
    ("tfoot", local::tfoot),
    ("th", local::th),
    ("thead", local::thead),
    ("title", local::title),
    ("tr", local::tr),
    ("type", local::r#type),
    ("viewbox", local::viewbox),
    ("viewtarget", local::viewtarget),
    ("xchannelselector", local::xchannelselector),
    ("xlink:actuate", local::xlink_actuate),
    ("xlink:arcrole", local::xlink_arcrole),
    ("xlink:href", local::xlink_href),
    ("xlink:role", local::xlink_role),
    ("xlink:show", local::xlink_show),
    ("xlink:title", local::xlink_title),
    ("xlink:type", local::xlink_type),
    ("xml:lang", local::xml_lang),
    ("xml:space", local::xml_space),
    ("xmlns", local::xmlns),
    ("xmlns:xlink", local::xmlns_xlink),
    ("xmp", local::xmp),
    ("ychannelselector", local::ychannelselector),
    ("zoomandpan", local::zoomandpan),
    ("address", local::address),
    ("applet", local::applet),
    ("area", local::area),
    ("article", local::article),
    ("aside", local::aside),
    ("b", local::b),
    ("base", local::base),
    ("basefont", local::basefont),
    ("bgsound", local::bgsound),
    ("big", local::big),
    ("blockquote", local::blockquote),
    ("br", local::br),
    ("center", local::center),
    ("charset", local::charset),
    ("code", local::code),
    ("col", local::col),
    ("content", local::content),
    ("details", local::details),
    ("dialog", local::dialog),
    ("dir", local::dir),
    ("div", local::div),
    ("dl", local::dl),
    ("em", local::em),
    ("embed", local::embed),
    ("fieldset", local::fieldset),
    ("figcaption", local::figcaption),
    ("figure", local::figure),
    ("font", local::font),
    ("footer", local::footer),
    ("frame", local::frame),
    ("h1", local::h1),
    ("h2", local::h2),
    ("h3", local::h3),
    ("h4", local::h4),
    ("h5", local::h5),
    ("h6", local::h6),
    ("header", local::header),
    ("hgroup", local::hgroup),
    ("hr", local::hr),
    ("http-equiv", local::http_equiv),
    ("i", local::i),
    ("image", local::image),
    ("keygen", local::keygen),
    ("link", local::link),
    ("listing", local::listing),
    ("main", local::main),
    ("marquee", local::marquee),
    ("math", local::math),
    ("menu", local::menu),
    ("meta", local::meta),
    ("nav", local::nav),
    ("object", local::object),
    ("ol", local::ol),
    ("param", local::param),
    ("pre", local::pre),
    ("rb", local::rb),
    ("rp", local::rp),
    ("rt", local::rt),
    ("s", local::s),
    ("search", local::search),
    ("small", local::small),
    ("source", local::source),
    ("span", local::span),
    ("strike", local::strike),
    ("strong", local::strong),
    ("sub", local::sub),
    ("summary", local::summary),
    ("sup", local::sup),
    ("track", local::track),
    ("tt", local::tt),
    ("u", local::u),
    ("ul", local::ul),
    ("var", local::var),
    ("wbr", local::wbr),
    ("section", local::section),
];

struct KnownLocalsTable {
    by_name: Trie,
}

static KNOWN_LOCALS: std::sync::OnceLock<KnownLocalsTable> = std::sync::OnceLock::new();

fn known_locals() -> &'static KnownLocalsTable {
    KNOWN_LOCALS.get_or_init(|| {
        let mut by_name = Trie::new();
        for (index, &(name, _)) in KNOWN_LOCAL_NAMES.iter().enumerate() {
            by_name
                .insert_with_value(name.as_bytes(), index as i64)
                .expect("known local name table contains only valid, distinct keys");
        }
        KnownLocalsTable { by_name }
    })
}

/// Look `s` up in the trie over [`KNOWN_LOCAL_NAMES`], returning the same
/// constant `local_name!` would match at compile time.
fn known_local(s: &str) -> Option<LocalName> {
    known_locals()
        .by_name
        .get(s.as_bytes())
        .map(|index| KNOWN_LOCAL_NAMES[index as usize].1)
}

impl Default for Namespace {
    fn default() -> Self {
        ns::EMPTY
    }
}

/// Well-known XML/HTML namespace URIs as compile-time constants, so
/// `ns!(html)` can be used both as a value and as a match pattern.
#[allow(non_upper_case_globals)]
pub mod ns {
    use super::Namespace;

    pub const EMPTY: Namespace = Namespace::from_static("");
    pub const HTML: Namespace = Namespace::from_static("http://www.w3.org/1999/xhtml");
    pub const XML: Namespace = Namespace::from_static("http://www.w3.org/XML/1998/namespace");
    pub const XMLNS: Namespace = Namespace::from_static("http://www.w3.org/2000/xmlns/");
    pub const XLINK: Namespace = Namespace::from_static("http://www.w3.org/1999/xlink");
    pub const SVG: Namespace = Namespace::from_static("http://www.w3.org/2000/svg");
    pub const MATHML: Namespace = Namespace::from_static("http://www.w3.org/1998/Math/MathML");
}

/// Namespace prefixes as compile-time constants, for `namespace_prefix!(xlink)`.
#[allow(non_upper_case_globals)]
pub mod prefix {
    use super::Prefix;

    pub const EMPTY: Prefix = Prefix::from_static("");
    pub const xlink: Prefix = Prefix::from_static("xlink");
    pub const xml: Prefix = Prefix::from_static("xml");
    pub const xmlns: Prefix = Prefix::from_static("xmlns");
}

/// Intern an HTML namespace URI by short name: `ns!()`, `ns!(html)`, `ns!(svg)`, ...
#[macro_export]
macro_rules! ns {
    () => {
        $crate::atoms::ns::EMPTY
    };
    (html) => {
        $crate::atoms::ns::HTML
    };
    (xml) => {
        $crate::atoms::ns::XML
    };
    (xmlns) => {
        $crate::atoms::ns::XMLNS
    };
    (xlink) => {
        $crate::atoms::ns::XLINK
    };
    (svg) => {
        $crate::atoms::ns::SVG
    };
    (mathml) => {
        $crate::atoms::ns::MATHML
    };
}

/// Resolve a namespace prefix string literal to its [`Prefix`] constant:
/// `namespace_prefix!("xlink")`.
#[macro_export]
macro_rules! namespace_prefix {
    ("") => {
        $crate::atoms::prefix::EMPTY
    };
    ("xlink") => {
        $crate::atoms::prefix::xlink
    };
    ("xml") => {
        $crate::atoms::prefix::xml
    };
    ("xmlns") => {
        $crate::atoms::prefix::xmlns
    };
}

/// Every tag/attribute local name used anywhere in tree construction, as a
/// compile-time constant — the counterpart to [`ns`] for `local_name!(...)`.
#[allow(non_upper_case_globals)]
pub mod local {
    use super::LocalName;

    pub const a: LocalName = LocalName::from_static("a");
    pub const altGlyph: LocalName = LocalName::from_static("altGlyph");
    pub const annotation_xml: LocalName = LocalName::from_static("annotation-xml");
    pub const altGlyphDef: LocalName = LocalName::from_static("altGlyphDef");
    pub const altGlyphItem: LocalName = LocalName::from_static("altGlyphItem");
    pub const altglyph: LocalName = LocalName::from_static("altglyph");
    pub const altglyphdef: LocalName = LocalName::from_static("altglyphdef");
    pub const altglyphitem: LocalName = LocalName::from_static("altglyphitem");
    pub const animateColor: LocalName = LocalName::from_static("animateColor");
    pub const animateMotion: LocalName = LocalName::from_static("animateMotion");
    pub const animateTransform: LocalName = LocalName::from_static("animateTransform");
    pub const animatecolor: LocalName = LocalName::from_static("animatecolor");
    pub const animatemotion: LocalName = LocalName::from_static("animatemotion");
    pub const animatetransform: LocalName = LocalName::from_static("animatetransform");
    pub const attributename: LocalName = LocalName::from_static("attributename");
    pub const attributetype: LocalName = LocalName::from_static("attributetype");
    pub const basefrequency: LocalName = LocalName::from_static("basefrequency");
    pub const baseprofile: LocalName = LocalName::from_static("baseprofile");
    pub const body: LocalName = LocalName::from_static("body");
    pub const button: LocalName = LocalName::from_static("button");
    pub const calcmode: LocalName = LocalName::from_static("calcmode");
    pub const caption: LocalName = LocalName::from_static("caption");
    pub const clipPath: LocalName = LocalName::from_static("clipPath");
    pub const color: LocalName = LocalName::from_static("color");
    pub const clippath: LocalName = LocalName::from_static("clippath");
    pub const clippathunits: LocalName = LocalName::from_static("clippathunits");
    pub const colgroup: LocalName = LocalName::from_static("colgroup");
    pub const dd: LocalName = LocalName::from_static("dd");
    pub const definitionurl: LocalName = LocalName::from_static("definitionurl");
    pub const diffuseconstant: LocalName = LocalName::from_static("diffuseconstant");
    pub const dt: LocalName = LocalName::from_static("dt");
    pub const edgemode: LocalName = LocalName::from_static("edgemode");
    pub const face: LocalName = LocalName::from_static("face");
    pub const feBlend: LocalName = LocalName::from_static("feBlend");
    pub const feColorMatrix: LocalName = LocalName::from_static("feColorMatrix");
    pub const feComponentTransfer: LocalName = LocalName::from_static("feComponentTransfer");
    pub const feComposite: LocalName = LocalName::from_static("feComposite");
    pub const feConvolveMatrix: LocalName = LocalName::from_static("feConvolveMatrix");
    pub const feDiffuseLighting: LocalName = LocalName::from_static("feDiffuseLighting");
    pub const feDisplacementMap: LocalName = LocalName::from_static("feDisplacementMap");
    pub const feDistantLight: LocalName = LocalName::from_static("feDistantLight");
    pub const feDropShadow: LocalName = LocalName::from_static("feDropShadow");
    pub const feFlood: LocalName = LocalName::from_static("feFlood");
    pub const feFuncA: LocalName = LocalName::from_static("feFuncA");
    pub const feFuncB: LocalName = LocalName::from_static("feFuncB");
    pub const feFuncG: LocalName = LocalName::from_static("feFuncG");
    pub const feFuncR: LocalName = LocalName::from_static("feFuncR");
    pub const feGaussianBlur: LocalName = LocalName::from_static("feGaussianBlur");
    pub const feImage: LocalName = LocalName::from_static("feImage");
    pub const feMerge: LocalName = LocalName::from_static("feMerge");
    pub const feMergeNode: LocalName = LocalName::from_static("feMergeNode");
    pub const feMorphology: LocalName = LocalName::from_static("feMorphology");
    pub const feOffset: LocalName = LocalName::from_static("feOffset");
    pub const fePointLight: LocalName = LocalName::from_static("fePointLight");
    pub const feSpecularLighting: LocalName = LocalName::from_static("feSpecularLighting");
    pub const feSpotLight: LocalName = LocalName::from_static("feSpotLight");
    pub const feTile: LocalName = LocalName::from_static("feTile");
    pub const feTurbulence: LocalName = LocalName::from_static("feTurbulence");
    pub const feblend: LocalName = LocalName::from_static("feblend");
    pub const fecolormatrix: LocalName = LocalName::from_static("fecolormatrix");
    pub const fecomponenttransfer: LocalName = LocalName::from_static("fecomponenttransfer");
    pub const fecomposite: LocalName = LocalName::from_static("fecomposite");
    pub const feconvolvematrix: LocalName = LocalName::from_static("feconvolvematrix");
    pub const fediffuselighting: LocalName = LocalName::from_static("fediffuselighting");
    pub const fedisplacementmap: LocalName = LocalName::from_static("fedisplacementmap");
    pub const fedistantlight: LocalName = LocalName::from_static("fedistantlight");
    pub const fedropshadow: LocalName = LocalName::from_static("fedropshadow");
    pub const feflood: LocalName = LocalName::from_static("feflood");
    pub const fefunca: LocalName = LocalName::from_static("fefunca");
    pub const fefuncb: LocalName = LocalName::from_static("fefuncb");
    pub const fefuncg: LocalName = LocalName::from_static("fefuncg");
    pub const fefuncr: LocalName = LocalName::from_static("fefuncr");
    pub const fegaussianblur: LocalName = LocalName::from_static("fegaussianblur");
    pub const feimage: LocalName = LocalName::from_static("feimage");
    pub const femerge: LocalName = LocalName::from_static("femerge");
    pub const femergenode: LocalName = LocalName::from_static("femergenode");
    pub const femorphology: LocalName = LocalName::from_static("femorphology");
    pub const feoffset: LocalName = LocalName::from_static("feoffset");
    pub const fepointlight: LocalName = LocalName::from_static("fepointlight");
    pub const fespecularlighting: LocalName = LocalName::from_static("fespecularlighting");
    pub const fespotlight: LocalName = LocalName::from_static("fespotlight");
    pub const fetile: LocalName = LocalName::from_static("fetile");
    pub const feturbulence: LocalName = LocalName::from_static("feturbulence");
    pub const filterunits: LocalName = LocalName::from_static("filterunits");
    pub const foreignObject: LocalName = LocalName::from_static("foreignObject");
    pub const foreignobject: LocalName = LocalName::from_static("foreignobject");
    pub const form: LocalName = LocalName::from_static("form");
    pub const frameset: LocalName = LocalName::from_static("frameset");
    pub const glyphRef: LocalName = LocalName::from_static("glyphRef");
    pub const glyphref: LocalName = LocalName::from_static("glyphref");
    pub const gradienttransform: LocalName = LocalName::from_static("gradienttransform");
    pub const gradientunits: LocalName = LocalName::from_static("gradientunits");
    pub const head: LocalName = LocalName::from_static("head");
    pub const html: LocalName = LocalName::from_static("html");
    pub const iframe: LocalName = LocalName::from_static("iframe");
    pub const img: LocalName = LocalName::from_static("img");
    pub const input: LocalName = LocalName::from_static("input");
    pub const kernelmatrix: LocalName = LocalName::from_static("kernelmatrix");
    pub const kernelunitlength: LocalName = LocalName::from_static("kernelunitlength");
    pub const keypoints: LocalName = LocalName::from_static("keypoints");
    pub const keysplines: LocalName = LocalName::from_static("keysplines");
    pub const keytimes: LocalName = LocalName::from_static("keytimes");
    pub const lengthadjust: LocalName = LocalName::from_static("lengthadjust");
    pub const li: LocalName = LocalName::from_static("li");
    pub const limitingconeangle: LocalName = LocalName::from_static("limitingconeangle");
    pub const linearGradient: LocalName = LocalName::from_static("linearGradient");
    pub const lineargradient: LocalName = LocalName::from_static("lineargradient");
    pub const malignmark: LocalName = LocalName::from_static("malignmark");
    pub const markerheight: LocalName = LocalName::from_static("markerheight");
    pub const markerunits: LocalName = LocalName::from_static("markerunits");
    pub const markerwidth: LocalName = LocalName::from_static("markerwidth");
    pub const maskcontentunits: LocalName = LocalName::from_static("maskcontentunits");
    pub const maskunits: LocalName = LocalName::from_static("maskunits");
    pub const mglyph: LocalName = LocalName::from_static("mglyph");
    pub const nobr: LocalName = LocalName::from_static("nobr");
    pub const noembed: LocalName = LocalName::from_static("noembed");
    pub const noframes: LocalName = LocalName::from_static("noframes");
    pub const noscript: LocalName = LocalName::from_static("noscript");
    pub const numoctaves: LocalName = LocalName::from_static("numoctaves");
    pub const optgroup: LocalName = LocalName::from_static("optgroup");
    pub const option: LocalName = LocalName::from_static("option");
    pub const p: LocalName = LocalName::from_static("p");
    pub const pathlength: LocalName = LocalName::from_static("pathlength");
    pub const patterncontentunits: LocalName = LocalName::from_static("patterncontentunits");
    pub const patterntransform: LocalName = LocalName::from_static("patterntransform");
    pub const patternunits: LocalName = LocalName::from_static("patternunits");
    pub const plaintext: LocalName = LocalName::from_static("plaintext");
    pub const pointsatx: LocalName = LocalName::from_static("pointsatx");
    pub const pointsaty: LocalName = LocalName::from_static("pointsaty");
    pub const pointsatz: LocalName = LocalName::from_static("pointsatz");
    pub const preservealpha: LocalName = LocalName::from_static("preservealpha");
    pub const preserveaspectratio: LocalName = LocalName::from_static("preserveaspectratio");
    pub const primitiveunits: LocalName = LocalName::from_static("primitiveunits");
    pub const radialGradient: LocalName = LocalName::from_static("radialGradient");
    pub const radialgradient: LocalName = LocalName::from_static("radialgradient");
    pub const refx: LocalName = LocalName::from_static("refx");
    pub const refy: LocalName = LocalName::from_static("refy");
    pub const repeatcount: LocalName = LocalName::from_static("repeatcount");
    pub const repeatdur: LocalName = LocalName::from_static("repeatdur");
    pub const requiredextensions: LocalName = LocalName::from_static("requiredextensions");
    pub const requiredfeatures: LocalName = LocalName::from_static("requiredfeatures");
    pub const rtc: LocalName = LocalName::from_static("rtc");
    pub const ruby: LocalName = LocalName::from_static("ruby");
    pub const script: LocalName = LocalName::from_static("script");
    pub const select: LocalName = LocalName::from_static("select");
    pub const shadowrootmode: LocalName = LocalName::from_static("shadowrootmode");
    pub const size: LocalName = LocalName::from_static("size");
    pub const specularconstant: LocalName = LocalName::from_static("specularconstant");
    pub const specularexponent: LocalName = LocalName::from_static("specularexponent");
    pub const spreadmethod: LocalName = LocalName::from_static("spreadmethod");
    pub const startoffset: LocalName = LocalName::from_static("startoffset");
    pub const stddeviation: LocalName = LocalName::from_static("stddeviation");
    pub const stitchtiles: LocalName = LocalName::from_static("stitchtiles");
    pub const style: LocalName = LocalName::from_static("style");
    pub const surfacescale: LocalName = LocalName::from_static("surfacescale");
    pub const svg: LocalName = LocalName::from_static("svg");
    pub const systemlanguage: LocalName = LocalName::from_static("systemlanguage");
    pub const table: LocalName = LocalName::from_static("table");
    pub const tablevalues: LocalName = LocalName::from_static("tablevalues");
    pub const targetx: LocalName = LocalName::from_static("targetx");
    pub const targety: LocalName = LocalName::from_static("targety");
    pub const tbody: LocalName = LocalName::from_static("tbody");
    pub const td: LocalName = LocalName::from_static("td");
    pub const template: LocalName = LocalName::from_static("template");
    pub const textPath: LocalName = LocalName::from_static("textPath");
    pub const textarea: LocalName = LocalName::from_static("textarea");
    pub const textlength: LocalName = LocalName::from_static("textlength");
    pub const textpath: LocalName = LocalName::from_static("textpath");
    pub const tfoot: LocalName = LocalName::from_static("tfoot");
    pub const th: LocalName = LocalName::from_static("th");
    pub const thead: LocalName = LocalName::from_static("thead");
    pub const title: LocalName = LocalName::from_static("title");
    pub const tr: LocalName = LocalName::from_static("tr");
    pub const r#type: LocalName = LocalName::from_static("type");
    pub const viewbox: LocalName = LocalName::from_static("viewbox");
    pub const viewtarget: LocalName = LocalName::from_static("viewtarget");
    pub const xchannelselector: LocalName = LocalName::from_static("xchannelselector");
    pub const xlink_actuate: LocalName = LocalName::from_static("xlink:actuate");
    pub const xlink_arcrole: LocalName = LocalName::from_static("xlink:arcrole");
    pub const xlink_href: LocalName = LocalName::from_static("xlink:href");
    pub const xlink_role: LocalName = LocalName::from_static("xlink:role");
    pub const xlink_show: LocalName = LocalName::from_static("xlink:show");
    pub const xlink_title: LocalName = LocalName::from_static("xlink:title");
    pub const xlink_type: LocalName = LocalName::from_static("xlink:type");
    pub const xml_lang: LocalName = LocalName::from_static("xml:lang");
    pub const xml_space: LocalName = LocalName::from_static("xml:space");
    pub const xmlns: LocalName = LocalName::from_static("xmlns");
    pub const xmlns_xlink: LocalName = LocalName::from_static("xmlns:xlink");
    pub const xmp: LocalName = LocalName::from_static("xmp");
    pub const ychannelselector: LocalName = LocalName::from_static("ychannelselector");
    pub const zoomandpan: LocalName = LocalName::from_static("zoomandpan");
    pub const address: LocalName = LocalName::from_static("address");
    pub const applet: LocalName = LocalName::from_static("applet");
    pub const area: LocalName = LocalName::from_static("area");
    pub const article: LocalName = LocalName::from_static("article");
    pub const aside: LocalName = LocalName::from_static("aside");
    pub const b: LocalName = LocalName::from_static("b");
    pub const base: LocalName = LocalName::from_static("base");
    pub const basefont: LocalName = LocalName::from_static("basefont");
    pub const bgsound: LocalName = LocalName::from_static("bgsound");
    pub const big: LocalName = LocalName::from_static("big");
    pub const blockquote: LocalName = LocalName::from_static("blockquote");
    pub const br: LocalName = LocalName::from_static("br");
    pub const center: LocalName = LocalName::from_static("center");
    pub const charset: LocalName = LocalName::from_static("charset");
    pub const code: LocalName = LocalName::from_static("code");
    pub const col: LocalName = LocalName::from_static("col");
    pub const content: LocalName = LocalName::from_static("content");
    pub const details: LocalName = LocalName::from_static("details");
    pub const dialog: LocalName = LocalName::from_static("dialog");
    pub const dir: LocalName = LocalName::from_static("dir");
    pub const div: LocalName = LocalName::from_static("div");
    pub const dl: LocalName = LocalName::from_static("dl");
    pub const em: LocalName = LocalName::from_static("em");
    pub const embed: LocalName = LocalName::from_static("embed");
    pub const fieldset: LocalName = LocalName::from_static("fieldset");
    pub const figcaption: LocalName = LocalName::from_static("figcaption");
    pub const figure: LocalName = LocalName::from_static("figure");
    pub const font: LocalName = LocalName::from_static("font");
    pub const footer: LocalName = LocalName::from_static("footer");
    pub const frame: LocalName = LocalName::from_static("frame");
    pub const h1: LocalName = LocalName::from_static("h1");
    pub const h2: LocalName = LocalName::from_static("h2");
    pub const h3: LocalName = LocalName::from_static("h3");
    pub const h4: LocalName = LocalName::from_static("h4");
    pub const h5: LocalName = LocalName::from_static("h5");
    pub const h6: LocalName = LocalName::from_static("h6");
    pub const header: LocalName = LocalName::from_static("header");
    pub const hgroup: LocalName = LocalName::from_static("hgroup");
    pub const hr: LocalName = LocalName::from_static("hr");
    pub const http_equiv: LocalName = LocalName::from_static("http-equiv");
    pub const i: LocalName = LocalName::from_static("i");
    pub const image: LocalName = LocalName::from_static("image");
    pub const keygen: LocalName = LocalName::from_static("keygen");
    pub const link: LocalName = LocalName::from_static("link");
    pub const listing: LocalName = LocalName::from_static("listing");
    pub const main: LocalName = LocalName::from_static("main");
    pub const marquee: LocalName = LocalName::from_static("marquee");
    pub const math: LocalName = LocalName::from_static("math");
    pub const menu: LocalName = LocalName::from_static("menu");
    pub const meta: LocalName = LocalName::from_static("meta");
    pub const nav: LocalName = LocalName::from_static("nav");
    pub const object: LocalName = LocalName::from_static("object");
    pub const ol: LocalName = LocalName::from_static("ol");
    pub const param: LocalName = LocalName::from_static("param");
    pub const pre: LocalName = LocalName::from_static("pre");
    pub const rb: LocalName = LocalName::from_static("rb");
    pub const rp: LocalName = LocalName::from_static("rp");
    pub const rt: LocalName = LocalName::from_static("rt");
    pub const s: LocalName = LocalName::from_static("s");
    pub const search: LocalName = LocalName::from_static("search");
    pub const small: LocalName = LocalName::from_static("small");
    pub const source: LocalName = LocalName::from_static("source");
    pub const span: LocalName = LocalName::from_static("span");
    pub const strike: LocalName = LocalName::from_static("strike");
    pub const strong: LocalName = LocalName::from_static("strong");
    pub const sub: LocalName = LocalName::from_static("sub");
    pub const summary: LocalName = LocalName::from_static("summary");
    pub const sup: LocalName = LocalName::from_static("sup");
    pub const track: LocalName = LocalName::from_static("track");
    pub const tt: LocalName = LocalName::from_static("tt");
    pub const u: LocalName = LocalName::from_static("u");
    pub const ul: LocalName = LocalName::from_static("ul");
    pub const var: LocalName = LocalName::from_static("var");
    pub const wbr: LocalName = LocalName::from_static("wbr");
    pub const section: LocalName = LocalName::from_static("section");
}

/// Intern a tag or attribute local name: `local_name!("div")`. Known names
/// resolve to the constants in [`local`] (usable as match patterns); an
/// unrecognized literal or a runtime `&str`/`String` falls back to
/// [`LocalName::from`].
#[macro_export]
macro_rules! local_name {
    ("a") => { $crate::atoms::local::a };
    ("altGlyph") => { $crate::atoms::local::altGlyph };
    ("annotation-xml") => { $crate::atoms::local::annotation_xml };
    ("altGlyphDef") => { $crate::atoms::local::altGlyphDef };
    ("altGlyphItem") => { $crate::atoms::local::altGlyphItem };
    ("altglyph") => { $crate::atoms::local::altglyph };
    ("altglyphdef") => { $crate::atoms::local::altglyphdef };
    ("altglyphitem") => { $crate::atoms::local::altglyphitem };
    ("animateColor") => { $crate::atoms::local::animateColor };
    ("animateMotion") => { $crate::atoms::local::animateMotion };
    ("animateTransform") => { $crate::atoms::local::animateTransform };
    ("animatecolor") => { $crate::atoms::local::animatecolor };
    ("animatemotion") => { $crate::atoms::local::animatemotion };
    ("animatetransform") => { $crate::atoms::local::animatetransform };
    ("attributename") => { $crate::atoms::local::attributename };
    ("attributetype") => { $crate::atoms::local::attributetype };
    ("basefrequency") => { $crate::atoms::local::basefrequency };
    ("baseprofile") => { $crate::atoms::local::baseprofile };
    ("body") => { $crate::atoms::local::body };
    ("button") => { $crate::atoms::local::button };
    ("calcmode") => { $crate::atoms::local::calcmode };
    ("caption") => { $crate::atoms::local::caption };
    ("clipPath") => { $crate::atoms::local::clipPath };
    ("color") => { $crate::atoms::local::color };
    ("clippath") => { $crate::atoms::local::clippath };
    ("clippathunits") => { $crate::atoms::local::clippathunits };
    ("colgroup") => { $crate::atoms::local::colgroup };
    ("dd") => { $crate::atoms::local::dd };
    ("definitionurl") => { $crate::atoms::local::definitionurl };
    ("diffuseconstant") => { $crate::atoms::local::diffuseconstant };
    ("dt") => { $crate::atoms::local::dt };
    ("edgemode") => { $crate::atoms::local::edgemode };
    ("face") => { $crate::atoms::local::face };
    ("feBlend") => { $crate::atoms::local::feBlend };
    ("feColorMatrix") => { $crate::atoms::local::feColorMatrix };
    ("feComponentTransfer") => { $crate::atoms::local::feComponentTransfer };
    ("feComposite") => { $crate::atoms::local::feComposite };
    ("feConvolveMatrix") => { $crate::atoms::local::feConvolveMatrix };
    ("feDiffuseLighting") => { $crate::atoms::local::feDiffuseLighting };
    ("feDisplacementMap") => { $crate::atoms::local::feDisplacementMap };
    ("feDistantLight") => { $crate::atoms::local::feDistantLight };
    ("feDropShadow") => { $crate::atoms::local::feDropShadow };
    ("feFlood") => { $crate::atoms::local::feFlood };
    ("feFuncA") => { $crate::atoms::local::feFuncA };
    ("feFuncB") => { $crate::atoms::local::feFuncB };
    ("feFuncG") => { $crate::atoms::local::feFuncG };
    ("feFuncR") => { $crate::atoms::local::feFuncR };
    ("feGaussianBlur") => { $crate::atoms::local::feGaussianBlur };
    ("feImage") => { $crate::atoms::local::feImage };
    ("feMerge") => { $crate::atoms::local::feMerge };
    ("feMergeNode") => { $crate::atoms::local::feMergeNode };
    ("feMorphology") => { $crate::atoms::local::feMorphology };
    ("feOffset") => { $crate::atoms::local::feOffset };
    ("fePointLight") => { $crate::atoms::local::fePointLight };
    ("feSpecularLighting") => { $crate::atoms::local::feSpecularLighting };
    ("feSpotLight") => { $crate::atoms::local::feSpotLight };
    ("feTile") => { $crate::atoms::local::feTile };
    ("feTurbulence") => { $crate::atoms::local::feTurbulence };
    ("feblend") => { $crate::atoms::local::feblend };
    ("fecolormatrix") => { $crate::atoms::local::fecolormatrix };
    ("fecomponenttransfer") => { $crate::atoms::local::fecomponenttransfer };
    ("fecomposite") => { $crate::atoms::local::fecomposite };
    ("feconvolvematrix") => { $crate::atoms::local::feconvolvematrix };
    ("fediffuselighting") => { $crate::atoms::local::fediffuselighting };
    ("fedisplacementmap") => { $crate::atoms::local::fedisplacementmap };
    ("fedistantlight") => { $crate::atoms::local::fedistantlight };
    ("fedropshadow") => { $crate::atoms::local::fedropshadow };
    ("feflood") => { $crate::atoms::local::feflood };
    ("fefunca") => { $crate::atoms::local::fefunca };
    ("fefuncb") => { $crate::atoms::local::fefuncb };
    ("fefuncg") => { $crate::atoms::local::fefuncg };
    ("fefuncr") => { $crate::atoms::local::fefuncr };
    ("fegaussianblur") => { $crate::atoms::local::fegaussianblur };
    ("feimage") => { $crate::atoms::local::feimage };
    ("femerge") => { $crate::atoms::local::femerge };
    ("femergenode") => { $crate::atoms::local::femergenode };
    ("femorphology") => { $crate::atoms::local::femorphology };
    ("feoffset") => { $crate::atoms::local::feoffset };
    ("fepointlight") => { $crate::atoms::local::fepointlight };
    ("fespecularlighting") => { $crate::atoms::local::fespecularlighting };
    ("fespotlight") => { $crate::atoms::local::fespotlight };
    ("fetile") => { $crate::atoms::local::fetile };
    ("feturbulence") => { $crate::atoms::local::feturbulence };
    ("filterunits") => { $crate::atoms::local::filterunits };
    ("foreignObject") => { $crate::atoms::local::foreignObject };
    ("foreignobject") => { $crate::atoms::local::foreignobject };
    ("form") => { $crate::atoms::local::form };
    ("frameset") => { $crate::atoms::local::frameset };
    ("glyphRef") => { $crate::atoms::local::glyphRef };
    ("glyphref") => { $crate::atoms::local::glyphref };
    ("gradienttransform") => { $crate::atoms::local::gradienttransform };
    ("gradientunits") => { $crate::atoms::local::gradientunits };
    ("head") => { $crate::atoms::local::head };
    ("html") => { $crate::atoms::local::html };
    ("iframe") => { $crate::atoms::local::iframe };
    ("img") => { $crate::atoms::local::img };
    ("input") => { $crate::atoms::local::input };
    ("kernelmatrix") => { $crate::atoms::local::kernelmatrix };
    ("kernelunitlength") => { $crate::atoms::local::kernelunitlength };
    ("keypoints") => { $crate::atoms::local::keypoints };
    ("keysplines") => { $crate::atoms::local::keysplines };
    ("keytimes") => { $crate::atoms::local::keytimes };
    ("lengthadjust") => { $crate::atoms::local::lengthadjust };
    ("li") => { $crate::atoms::local::li };
    ("limitingconeangle") => { $crate::atoms::local::limitingconeangle };
    ("linearGradient") => { $crate::atoms::local::linearGradient };
    ("lineargradient") => { $crate::atoms::local::lineargradient };
    ("malignmark") => { $crate::atoms::local::malignmark };
    ("markerheight") => { $crate::atoms::local::markerheight };
    ("markerunits") => { $crate::atoms::local::markerunits };
    ("markerwidth") => { $crate::atoms::local::markerwidth };
    ("maskcontentunits") => { $crate::atoms::local::maskcontentunits };
    ("maskunits") => { $crate::atoms::local::maskunits };
    ("mglyph") => { $crate::atoms::local::mglyph };
    ("nobr") => { $crate::atoms::local::nobr };
    ("noembed") => { $crate::atoms::local::noembed };
    ("noframes") => { $crate::atoms::local::noframes };
    ("noscript") => { $crate::atoms::local::noscript };
    ("numoctaves") => { $crate::atoms::local::numoctaves };
    ("optgroup") => { $crate::atoms::local::optgroup };
    ("option") => { $crate::atoms::local::option };
    ("p") => { $crate::atoms::local::p };
    ("pathlength") => { $crate::atoms::local::pathlength };
    ("patterncontentunits") => { $crate::atoms::local::patterncontentunits };
    ("patterntransform") => { $crate::atoms::local::patterntransform };
    ("patternunits") => { $crate::atoms::local::patternunits };
    ("plaintext") => { $crate::atoms::local::plaintext };
    ("pointsatx") => { $crate::atoms::local::pointsatx };
    ("pointsaty") => { $crate::atoms::local::pointsaty };
    ("pointsatz") => { $crate::atoms::local::pointsatz };
    ("preservealpha") => { $crate::atoms::local::preservealpha };
    ("preserveaspectratio") => { $crate::atoms::local::preserveaspectratio };
    ("primitiveunits") => { $crate::atoms::local::primitiveunits };
    ("radialGradient") => { $crate::atoms::local::radialGradient };
    ("radialgradient") => { $crate::atoms::local::radialgradient };
    ("refx") => { $crate::atoms::local::refx };
    ("refy") => { $crate::atoms::local::refy };
    ("repeatcount") => { $crate::atoms::local::repeatcount };
    ("repeatdur") => { $crate::atoms::local::repeatdur };
    ("requiredextensions") => { $crate::atoms::local::requiredextensions };
    ("requiredfeatures") => { $crate::atoms::local::requiredfeatures };
    ("rtc") => { $crate::atoms::local::rtc };
    ("ruby") => { $crate::atoms::local::ruby };
    ("script") => { $crate::atoms::local::script };
    ("select") => { $crate::atoms::local::select };
    ("shadowrootmode") => { $crate::atoms::local::shadowrootmode };
    ("size") => { $crate::atoms::local::size };
    ("specularconstant") => { $crate::atoms::local::specularconstant };
    ("specularexponent") => { $crate::atoms::local::specularexponent };
    ("spreadmethod") => { $crate::atoms::local::spreadmethod };
    ("startoffset") => { $crate::atoms::local::startoffset };
    ("stddeviation") => { $crate::atoms::local::stddeviation };
    ("stitchtiles") => { $crate::atoms::local::stitchtiles };
    ("style") => { $crate::atoms::local::style };
    ("surfacescale") => { $crate::atoms::local::surfacescale };
    ("svg") => { $crate::atoms::local::svg };
    ("systemlanguage") => { $crate::atoms::local::systemlanguage };
    ("table") => { $crate::atoms::local::table };
    ("tablevalues") => { $crate::atoms::local::tablevalues };
    ("targetx") => { $crate::atoms::local::targetx };
    ("targety") => { $crate::atoms::local::targety };
    ("tbody") => { $crate::atoms::local::tbody };
    ("td") => { $crate::atoms::local::td };
    ("template") => { $crate::atoms::local::template };
    ("textPath") => { $crate::atoms::local::textPath };
    ("textarea") => { $crate::atoms::local::textarea };
    ("textlength") => { $crate::atoms::local::textlength };
    ("textpath") => { $crate::atoms::local::textpath };
    ("tfoot") => { $crate::atoms::local::tfoot };
    ("th") => { $crate::atoms::local::th };
    ("thead") => { $crate::atoms::local::thead };
    ("title") => { $crate::atoms::local::title };
    ("tr") => { $crate::atoms::local::tr };
    ("type") => { $crate::atoms::local::r#type };
    ("viewbox") => { $crate::atoms::local::viewbox };
    ("viewtarget") => { $crate::atoms::local::viewtarget };
    ("xchannelselector") => { $crate::atoms::local::xchannelselector };
    ("xlink:actuate") => { $crate::atoms::local::xlink_actuate };
    ("xlink:arcrole") => { $crate::atoms::local::xlink_arcrole };
    ("xlink:href") => { $crate::atoms::local::xlink_href };
    ("xlink:role") => { $crate::atoms::local::xlink_role };
    ("xlink:show") => { $crate::atoms::local::xlink_show };
    ("xlink:title") => { $crate::atoms::local::xlink_title };
    ("xlink:type") => { $crate::atoms::local::xlink_type };
    ("xml:lang") => { $crate::atoms::local::xml_lang };
    ("xml:space") => { $crate::atoms::local::xml_space };
    ("xmlns") => { $crate::atoms::local::xmlns };
    ("xmlns:xlink") => { $crate::atoms::local::xmlns_xlink };
    ("xmp") => { $crate::atoms::local::xmp };
    ("ychannelselector") => { $crate::atoms::local::ychannelselector };
    ("zoomandpan") => { $crate::atoms::local::zoomandpan };
    ("address") => { $crate::atoms::local::address };
    ("applet") => { $crate::atoms::local::applet };
    ("area") => { $crate::atoms::local::area };
    ("article") => { $crate::atoms::local::article };
    ("aside") => { $crate::atoms::local::aside };
    ("b") => { $crate::atoms::local::b };
    ("base") => { $crate::atoms::local::base };
    ("basefont") => { $crate::atoms::local::basefont };
    ("bgsound") => { $crate::atoms::local::bgsound };
    ("big") => { $crate::atoms::local::big };
    ("blockquote") => { $crate::atoms::local::blockquote };
    ("br") => { $crate::atoms::local::br };
    ("center") => { $crate::atoms::local::center };
    ("charset") => { $crate::atoms::local::charset };
    ("code") => { $crate::atoms::local::code };
    ("col") => { $crate::atoms::local::col };
    ("content") => { $crate::atoms::local::content };
    ("details") => { $crate::atoms::local::details };
    ("dialog") => { $crate::atoms::local::dialog };
    ("dir") => { $crate::atoms::local::dir };
    ("div") => { $crate::atoms::local::div };
    ("dl") => { $crate::atoms::local::dl };
    ("em") => { $crate::atoms::local::em };
    ("embed") => { $crate::atoms::local::embed };
    ("fieldset") => { $crate::atoms::local::fieldset };
    ("figcaption") => { $crate::atoms::local::figcaption };
    ("figure") => { $crate::atoms::local::figure };
    ("font") => { $crate::atoms::local::font };
    ("footer") => { $crate::atoms::local::footer };
    ("frame") => { $crate::atoms::local::frame };
    ("h1") => { $crate::atoms::local::h1 };
    ("h2") => { $crate::atoms::local::h2 };
    ("h3") => { $crate::atoms::local::h3 };
    ("h4") => { $crate::atoms::local::h4 };
    ("h5") => { $crate::atoms::local::h5 };
    ("h6") => { $crate::atoms::local::h6 };
    ("header") => { $crate::atoms::local::header };
    ("hgroup") => { $crate::atoms::local::hgroup };
    ("hr") => { $crate::atoms::local::hr };
    ("http-equiv") => { $crate::atoms::local::http_equiv };
    ("i") => { $crate::atoms::local::i };
    ("image") => { $crate::atoms::local::image };
    ("keygen") => { $crate::atoms::local::keygen };
    ("link") => { $crate::atoms::local::link };
    ("listing") => { $crate::atoms::local::listing };
    ("main") => { $crate::atoms::local::main };
    ("marquee") => { $crate::atoms::local::marquee };
    ("math") => { $crate::atoms::local::math };
    ("menu") => { $crate::atoms::local::menu };
    ("meta") => { $crate::atoms::local::meta };
    ("nav") => { $crate::atoms::local::nav };
    ("object") => { $crate::atoms::local::object };
    ("ol") => { $crate::atoms::local::ol };
    ("param") => { $crate::atoms::local::param };
    ("pre") => { $crate::atoms::local::pre };
    ("rb") => { $crate::atoms::local::rb };
    ("rp") => { $crate::atoms::local::rp };
    ("rt") => { $crate::atoms::local::rt };
    ("s") => { $crate::atoms::local::s };
    ("search") => { $crate::atoms::local::search };
    ("small") => { $crate::atoms::local::small };
    ("source") => { $crate::atoms::local::source };
    ("span") => { $crate::atoms::local::span };
    ("strike") => { $crate::atoms::local::strike };
    ("strong") => { $crate::atoms::local::strong };
    ("sub") => { $crate::atoms::local::sub };
    ("summary") => { $crate::atoms::local::summary };
    ("sup") => { $crate::atoms::local::sup };
    ("track") => { $crate::atoms::local::track };
    ("tt") => { $crate::atoms::local::tt };
    ("u") => { $crate::atoms::local::u };
    ("ul") => { $crate::atoms::local::ul };
    ("var") => { $crate::atoms::local::var };
    ("wbr") => { $crate::atoms::local::wbr };
    ("section") => { $crate::atoms::local::section };
    ($s:expr) => {
        $crate::atoms::LocalName::from($s)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_interning_returns_same_atom() {
        let a = LocalName::from("div");
        let b = LocalName::from("div");
        assert_eq!(a, b);
        assert_eq!(&*a, "div");
    }

    #[test]
    fn distinct_names_stay_distinct() {
        let a = LocalName::from("div");
        let b = LocalName::from("span");
        assert_ne!(a, b);
    }

    #[test]
    fn namespace_macro_resolves_known_uris() {
        assert_eq!(ns!(html), Namespace::from("http://www.w3.org/1999/xhtml"));
        assert_eq!(ns!(), Namespace::from(""));
    }

    #[test]
    fn known_local_name_is_usable_as_a_match_pattern() {
        let name = LocalName::from("title");
        let matched = matches!(name, local_name!("title"));
        assert!(matched);
    }

    #[test]
    fn namespace_constant_is_usable_as_a_match_pattern() {
        let namespace = ns::HTML;
        let matched = matches!(namespace, ns!(html));
        assert!(matched);
    }

    #[test]
    fn known_local_name_resolves_through_the_trie() {
        assert_eq!(known_local("title"), Some(local::title));
        assert_eq!(known_local("script"), Some(local::script));
        assert_eq!(known_local("not-a-known-name"), None);
    }

    #[test]
    fn runtime_interning_of_a_known_name_matches_the_constant() {
        let name = LocalName::from("script");
        assert_eq!(name, local::script);
    }

    #[test]
    fn long_name_falls_back_to_the_interner() {
        let long = "a".repeat(INLINE_CAP + 5);
        let a = LocalName::from(long.as_str());
        let b = LocalName::from(long.as_str());
        assert_eq!(a, b);
        assert_eq!(&*a, long.as_str());
    }
}
