//! Owned annotation document model
//!
//! Field names follow the server's document schema when the `serde` feature
//! is enabled, so a response decoded to JSON maps straight onto these types.
//! Fields the server sends that are not modelled here are ignored.

use crate::{AnnotationDocument, SentenceView, TokenView};

/// A single token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Token {
    /// Normalized token text
    pub word: String,
    /// Whitespace preceding the token
    pub before: String,
    /// Token text exactly as it appeared in the input; empty when unknown
    pub original_text: String,
}

impl Token {
    /// Create a token whose word is also its original text
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        Self {
            original_text: word.clone(),
            word,
            ..Self::default()
        }
    }

    /// Set the original text when the server normalized the word
    pub fn with_original_text(mut self, original_text: impl Into<String>) -> Self {
        self.original_text = original_text.into();
        self
    }

    /// Set the preceding whitespace
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = before.into();
        self
    }
}

impl TokenView for Token {
    fn word(&self) -> &str {
        &self.word
    }

    fn before(&self) -> &str {
        &self.before
    }

    fn original_text(&self) -> &str {
        if self.original_text.is_empty() {
            &self.word
        } else {
            &self.original_text
        }
    }
}

/// A sentence: an ordered run of tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Sentence {
    /// Tokens in token order
    #[cfg_attr(feature = "serde", serde(rename = "token"))]
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence from its tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl<W: Into<String>> FromIterator<W> for Sentence {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Token::new).collect())
    }
}

impl SentenceView for Sentence {
    type Token = Token;

    fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// An annotated document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Document {
    /// Tokens produced without sentence splitting
    #[cfg_attr(feature = "serde", serde(rename = "sentencelessToken"))]
    pub sentenceless_tokens: Vec<Token>,
    /// Sentences produced by sentence splitting
    #[cfg_attr(feature = "serde", serde(rename = "sentence"))]
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Create a document holding a flat token sequence
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            sentenceless_tokens: words.into_iter().map(Token::new).collect(),
            ..Self::default()
        }
    }

    /// Create a document holding sentence-grouped tokens
    pub fn from_sentences<I, S, W>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            sentences: sentences
                .into_iter()
                .map(|sentence| sentence.into_iter().collect())
                .collect(),
            ..Self::default()
        }
    }
}

impl AnnotationDocument for Document {
    type Token = Token;
    type Sentence = Sentence;

    fn sentenceless_tokens(&self) -> &[Token] {
        &self.sentenceless_tokens
    }

    fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }
}
