use std::cell::RefCell;

use html_parser::tendril::SliceExt;
use html_parser::tokenizer::{
    BufferQueue, CharacterTokens, CommentToken, DoctypeToken, EndTag, StartTag, Tag, TagToken,
    Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

struct TokenLogger {
    tokens: RefCell<Vec<Token>>,
}

impl TokenLogger {
    fn new() -> Self {
        TokenLogger {
            tokens: RefCell::new(Vec::new()),
        }
    }
}

impl TokenSink for TokenLogger {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        self.tokens.borrow_mut().push(token);
        TokenSinkResult::Continue
    }
}

fn tokenize(input: &str, opts: TokenizerOpts) -> Vec<Token> {
    let sink = TokenLogger::new();
    let tok = Tokenizer::new(sink, opts);
    let buffer = BufferQueue::default();
    buffer.push_back(input.to_tendril());
    let _ = tok.feed(&buffer);
    tok.end();
    tok.sink.tokens.take()
}

#[test]
fn tokenizes_a_simple_start_and_end_tag() {
    let tokens = tokenize("<p>hi</p>", TokenizerOpts::default());
    let tags: Vec<&Tag> = tokens
        .iter()
        .filter_map(|t| match t {
            TagToken(tag) => Some(tag),
            _ => None,
        })
        .collect();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].kind, StartTag);
    assert_eq!(&*tags[0].name, "p");
    assert_eq!(tags[1].kind, EndTag);
    assert_eq!(&*tags[1].name, "p");
}

#[test]
fn splits_character_data_across_feed_calls_without_losing_any() {
    // The tokenizer is fed one byte at a time; character tokens must still
    // reassemble into the full text when the sink concatenates them.
    let sink = TokenLogger::new();
    let tok = Tokenizer::new(sink, TokenizerOpts::default());
    let buffer = BufferQueue::default();
    for byte in "hello world".bytes() {
        buffer.push_back((byte as char).to_string().to_tendril());
        let _ = tok.feed(&buffer);
    }
    tok.end();

    let text: String = tok
        .sink
        .tokens
        .take()
        .into_iter()
        .filter_map(|t| match t {
            CharacterTokens(s) => Some(s.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "hello world");
}

#[test]
fn tokenizes_attributes_with_quoted_and_unquoted_values() {
    let tokens = tokenize(r#"<a href="/x" target=_blank>"#, TokenizerOpts::default());
    let TagToken(tag) = &tokens[0] else {
        panic!("expected a tag token, got {:?}", tokens[0]);
    };
    assert_eq!(tag.attrs.len(), 2);
    assert_eq!(&*tag.get_attribute_for_test("href").unwrap(), "/x");
    assert_eq!(&*tag.get_attribute_for_test("target").unwrap(), "_blank");
}

#[test]
fn recognizes_a_doctype() {
    let tokens = tokenize("<!DOCTYPE html>", TokenizerOpts::default());
    assert!(matches!(&tokens[0], DoctypeToken(d) if d.name.as_deref() == Some("html")));
}

#[test]
fn recognizes_a_comment() {
    let tokens = tokenize("<!-- hi -->", TokenizerOpts::default());
    assert!(matches!(&tokens[0], CommentToken(c) if &**c == " hi "));
}

#[test]
fn exact_errors_mode_swaps_the_descriptive_message_for_a_terse_one() {
    // A NUL byte in the Data state always reports a parse error; exact_errors
    // controls whether the message is the spec's terse string or a more
    // debuggable one naming the offending character and state.
    let error_message = |exact_errors: bool| {
        let tokens = tokenize(
            "a\0b",
            TokenizerOpts {
                exact_errors,
                ..Default::default()
            },
        );
        tokens
            .into_iter()
            .find_map(|t| match t {
                html_parser::tokenizer::ParseError(msg) => Some(msg.into_owned()),
                _ => None,
            })
            .expect("expected a parse error for the embedded NUL byte")
    };

    assert_eq!(error_message(true), "Bad character");
    assert_ne!(error_message(false), "Bad character");
}

trait TagAttrExt {
    fn get_attribute_for_test(&self, name: &str) -> Option<html_parser::tendril::StrTendril>;
}

impl TagAttrExt for Tag {
    fn get_attribute_for_test(&self, name: &str) -> Option<html_parser::tendril::StrTendril> {
        self.attrs
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.clone())
    }
}
