//! Word and sentence tokenizers backed by a CoreNLP annotation server
//!
//! This crate does no linguistic work of its own. Each tokenizer call builds
//! an annotation request (which annotators to run, which output format to
//! send back), passes it to an injected [`AnnotationClient`] and projects the
//! returned document into words or per-sentence word lists.
//!
//! ```
//! use corenlp_doc::Document;
//! use corenlp_tokenize::{AnnotationClient, AnnotationProperties, Tokenize, WordTokenizer};
//!
//! struct Canned;
//!
//! impl AnnotationClient for Canned {
//!     type Document = Document;
//!     type Error = std::convert::Infallible;
//!
//!     fn annotate(&self, _text: &str, _props: &AnnotationProperties) -> Result<Document, Self::Error> {
//!         Ok(Document::from_words(["Hello", "world"]))
//!     }
//! }
//!
//! let tokenizer = WordTokenizer::new(Canned, None);
//! let words: Vec<String> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(words, ["Hello", "world"]);
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod properties;
pub mod tokenizer;

// Re-export key types
pub use adapter::AnnotationRequestAdapter;
pub use client::AnnotationClient;
pub use config::{ConfigBuilder, TokenizerConfig};
pub use error::ConfigError;
pub use options::{OptionValue, TokenizeOptions};
pub use properties::AnnotationProperties;
pub use tokenizer::{
    sent_tokenize, word_tokenize, SentTokenizer, SentenceTexts, Sentences, Tokenize, WordTokenizer,
    Words,
};

pub use corenlp_doc::{AnnotationDocument, Document, Sentence, SentenceView, Token, TokenView};
