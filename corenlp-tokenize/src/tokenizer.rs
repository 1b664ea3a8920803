//! Word and sentence tokenizers
//!
//! Both tokenizers issue a single request per call and then project words
//! out of the returned document. The projection is lazy, but the document
//! is always fully received before the first item is produced.

use crate::adapter::AnnotationRequestAdapter;
use crate::client::AnnotationClient;
use crate::options::TokenizeOptions;
use crate::properties::{SSPLIT, TOKENIZE};
use corenlp_doc::{AnnotationDocument, SentenceView, TokenView};
use std::iter::FusedIterator;

/// Common interface of the tokenizers
pub trait Tokenize {
    /// Item produced per step
    type Item;
    /// Sequence returned by [`tokenize`](Self::tokenize)
    type Iter: Iterator<Item = Self::Item>;
    /// Error returned when the request fails
    type Error;

    /// Send `text` to the server and return the tokenized sequence
    fn tokenize(&self, text: &str) -> Result<Self::Iter, Self::Error>;
}

/// Splits text into words using the server's tokenizer
#[derive(Debug, Clone)]
pub struct WordTokenizer<C> {
    adapter: AnnotationRequestAdapter<C>,
}

impl<C: AnnotationClient> WordTokenizer<C> {
    /// Annotators requested by this tokenizer
    pub const STAGES: &'static [&'static str] = &[TOKENIZE];

    /// Create a word tokenizer
    pub fn new(client: C, options: Option<&TokenizeOptions>) -> Self {
        Self {
            adapter: AnnotationRequestAdapter::new(client, options),
        }
    }

    /// The underlying request adapter
    pub fn adapter(&self) -> &AnnotationRequestAdapter<C> {
        &self.adapter
    }
}

impl<C: AnnotationClient> Tokenize for WordTokenizer<C> {
    type Item = String;
    type Iter = Words<C::Document>;
    type Error = C::Error;

    fn tokenize(&self, text: &str) -> Result<Words<C::Document>, C::Error> {
        let document = self.adapter.execute(Self::STAGES, text)?;
        Ok(Words::new(document))
    }
}

/// Splits text into sentences of words using the server's sentence splitter
#[derive(Debug, Clone)]
pub struct SentTokenizer<C> {
    adapter: AnnotationRequestAdapter<C>,
}

impl<C: AnnotationClient> SentTokenizer<C> {
    /// Annotators requested by this tokenizer
    pub const STAGES: &'static [&'static str] = &[SSPLIT];

    /// Create a sentence tokenizer
    pub fn new(client: C, options: Option<&TokenizeOptions>) -> Self {
        Self {
            adapter: AnnotationRequestAdapter::new(client, options),
        }
    }

    /// The underlying request adapter
    pub fn adapter(&self) -> &AnnotationRequestAdapter<C> {
        &self.adapter
    }

    /// Send `text` to the server and return each sentence as text
    ///
    /// Sentences are rebuilt from the tokens' original text joined by the
    /// whitespace the server reports before each token, so normalization such
    /// as `americanize` does not show up in the result.
    pub fn tokenize_text(&self, text: &str) -> Result<SentenceTexts<C::Document>, C::Error> {
        let document = self.adapter.execute(Self::STAGES, text)?;
        Ok(SentenceTexts::new(document))
    }
}

impl<C: AnnotationClient> Tokenize for SentTokenizer<C> {
    type Item = Vec<String>;
    type Iter = Sentences<C::Document>;
    type Error = C::Error;

    fn tokenize(&self, text: &str) -> Result<Sentences<C::Document>, C::Error> {
        let document = self.adapter.execute(Self::STAGES, text)?;
        Ok(Sentences::new(document))
    }
}

/// Words of a document's flat token sequence
#[derive(Debug, Clone)]
pub struct Words<D> {
    document: D,
    position: usize,
}

impl<D: AnnotationDocument> Words<D> {
    fn new(document: D) -> Self {
        Self {
            document,
            position: 0,
        }
    }

    /// Restart from the first word without a new request
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Give back the fetched document
    pub fn into_document(self) -> D {
        self.document
    }
}

impl<D: AnnotationDocument> Iterator for Words<D> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let token = self.document.sentenceless_tokens().get(self.position)?;
        self.position += 1;
        Some(token.word().to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.document.sentenceless_tokens().len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<D: AnnotationDocument> ExactSizeIterator for Words<D> {}

impl<D: AnnotationDocument> FusedIterator for Words<D> {}

/// Per-sentence word lists of a document
#[derive(Debug, Clone)]
pub struct Sentences<D> {
    document: D,
    position: usize,
}

impl<D: AnnotationDocument> Sentences<D> {
    fn new(document: D) -> Self {
        Self {
            document,
            position: 0,
        }
    }

    /// Restart from the first sentence without a new request
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Give back the fetched document
    pub fn into_document(self) -> D {
        self.document
    }
}

impl<D: AnnotationDocument> Iterator for Sentences<D> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        let sentence = self.document.sentences().get(self.position)?;
        self.position += 1;
        Some(
            sentence
                .tokens()
                .iter()
                .map(|token| token.word().to_string())
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.document.sentences().len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<D: AnnotationDocument> ExactSizeIterator for Sentences<D> {}

impl<D: AnnotationDocument> FusedIterator for Sentences<D> {}

/// Reconstructed text of each sentence of a document
#[derive(Debug, Clone)]
pub struct SentenceTexts<D> {
    document: D,
    position: usize,
}

impl<D: AnnotationDocument> SentenceTexts<D> {
    fn new(document: D) -> Self {
        Self {
            document,
            position: 0,
        }
    }

    /// Restart from the first sentence without a new request
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Give back the fetched document
    pub fn into_document(self) -> D {
        self.document
    }
}

impl<D: AnnotationDocument> Iterator for SentenceTexts<D> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let sentence = self.document.sentences().get(self.position)?;
        self.position += 1;

        let mut text = String::new();
        for (i, token) in sentence.tokens().iter().enumerate() {
            // leading whitespace of the sentence is dropped
            if i > 0 {
                text.push_str(token.before());
            }
            text.push_str(token.original_text());
        }
        Some(text)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.document.sentences().len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<D: AnnotationDocument> ExactSizeIterator for SentenceTexts<D> {}

impl<D: AnnotationDocument> FusedIterator for SentenceTexts<D> {}

/// Tokenize `text` into words with default options
pub fn word_tokenize<C: AnnotationClient>(
    client: C,
    text: &str,
) -> Result<Words<C::Document>, C::Error> {
    WordTokenizer::new(client, None).tokenize(text)
}

/// Tokenize `text` into sentences of words with default options
pub fn sent_tokenize<C: AnnotationClient>(
    client: C,
    text: &str,
) -> Result<Sentences<C::Document>, C::Error> {
    SentTokenizer::new(client, None).tokenize(text)
}
