//! Annotation document access for CoreNLP server responses
//!
//! The annotation server returns one document per request. Tokenizers only
//! ever read two shapes out of it: the flat token sequence produced when no
//! sentence splitting ran, and the sentence-grouped token sequence. The
//! traits in this crate describe exactly that, so any decoded response type
//! can be plugged in. [`Document`] is an owned implementation.

#![warn(missing_docs)]

pub mod model;

pub use model::{Document, Sentence, Token};

/// Read access to a single token
pub trait TokenView {
    /// The token text as normalized by the server
    fn word(&self) -> &str;

    /// Whitespace preceding the token in the original text
    fn before(&self) -> &str {
        ""
    }

    /// Token text exactly as it appeared in the input; defaults to [`word`](Self::word)
    fn original_text(&self) -> &str {
        self.word()
    }
}

/// Read access to a single sentence
pub trait SentenceView {
    /// Token type stored in the sentence
    type Token: TokenView;

    /// Tokens of this sentence, in token order
    fn tokens(&self) -> &[Self::Token];
}

/// Read access to an annotated document
pub trait AnnotationDocument {
    /// Token type of the flat view
    type Token: TokenView;
    /// Sentence type of the grouped view
    type Sentence: SentenceView;

    /// Tokens not assigned to any sentence, in document order
    ///
    /// Populated when the request ran tokenization without sentence splitting.
    fn sentenceless_tokens(&self) -> &[Self::Token];

    /// Sentences in document order
    fn sentences(&self) -> &[Self::Sentence];
}

impl<T: TokenView + ?Sized> TokenView for &T {
    fn word(&self) -> &str {
        (**self).word()
    }

    fn before(&self) -> &str {
        (**self).before()
    }

    fn original_text(&self) -> &str {
        (**self).original_text()
    }
}

impl<D: AnnotationDocument + ?Sized> AnnotationDocument for Box<D> {
    type Token = D::Token;
    type Sentence = D::Sentence;

    fn sentenceless_tokens(&self) -> &[Self::Token] {
        (**self).sentenceless_tokens()
    }

    fn sentences(&self) -> &[Self::Sentence] {
        (**self).sentences()
    }
}

impl<D: AnnotationDocument + ?Sized> AnnotationDocument for std::sync::Arc<D> {
    type Token = D::Token;
    type Sentence = D::Sentence;

    fn sentenceless_tokens(&self) -> &[Self::Token] {
        (**self).sentenceless_tokens()
    }

    fn sentences(&self) -> &[Self::Sentence] {
        (**self).sentences()
    }
}
