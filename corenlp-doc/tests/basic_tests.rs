//! Basic tests for corenlp-doc

use corenlp_doc::*;

/// A borrowed, non-owning document used to check the traits are usable
/// without the bundled model.
struct SliceDocument<'a> {
    flat: &'a [Token],
    grouped: &'a [Sentence],
}

impl AnnotationDocument for SliceDocument<'_> {
    type Token = Token;
    type Sentence = Sentence;

    fn sentenceless_tokens(&self) -> &[Token] {
        self.flat
    }

    fn sentences(&self) -> &[Sentence] {
        self.grouped
    }
}

fn words<D: AnnotationDocument>(doc: &D) -> Vec<String> {
    doc.sentenceless_tokens()
        .iter()
        .map(|t| t.word().to_string())
        .collect()
}

#[test]
fn test_custom_document_implementation() {
    let flat = vec![Token::new("a"), Token::new("b")];
    let doc = SliceDocument {
        flat: &flat,
        grouped: &[],
    };
    assert_eq!(words(&doc), vec!["a", "b"]);
    assert!(doc.sentences().is_empty());
}

#[test]
fn test_boxed_document_delegates() {
    let doc: Box<Document> = Box::new(Document::from_words(["x", "y", "z"]));
    assert_eq!(words(&doc), vec!["x", "y", "z"]);
}

#[test]
fn test_token_whitespace_defaults() {
    struct Bare;
    impl TokenView for Bare {
        fn word(&self) -> &str {
            "bare"
        }
    }

    assert_eq!(Bare.before(), "");
    assert_eq!(Bare.original_text(), "bare");

    let token = Token::new("word").with_before(" ");
    assert_eq!(token.before(), " ");
}

#[test]
#[cfg(feature = "serde")]
fn test_deserialize_server_field_names() {
    let json = r#"{
        "text": "Hi there!",
        "sentence": [
            {"token": [{"word": "Hi", "after": " "}]},
            {"token": [{"word": "there", "before": " "}, {"word": "!"}]}
        ]
    }"#;

    let doc: Document = serde_json::from_str(json).unwrap();
    assert!(doc.sentenceless_tokens.is_empty());
    assert_eq!(doc.sentences.len(), 2);
    assert_eq!(doc.sentences[1].tokens[0].before, " ");
    assert_eq!(doc.sentences[1].tokens[1].word, "!");
    assert_eq!(doc.sentences[1].tokens[1].original_text, "");
    assert_eq!(doc.sentences[1].tokens[1].original_text(), "!");
}

#[test]
#[cfg(feature = "serde")]
fn test_deserialize_sentenceless_tokens() {
    let json = r#"{"sentencelessToken": [{"word": "Hello", "originalText": "Hello"}, {"word": "world"}]}"#;

    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(words(&doc), vec!["Hello", "world"]);
    assert_eq!(doc.sentenceless_tokens[0].original_text, "Hello");
}
