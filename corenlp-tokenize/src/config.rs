//! Tokenizer configuration
//!
//! Options can be assembled in code through [`ConfigBuilder`] or loaded from
//! a TOML file:
//!
//! ```toml
//! [options]
//! americanize = true
//! untokenizable = "noneKeep"
//! ```

use crate::client::AnnotationClient;
use crate::error::Result;
#[cfg(feature = "serde")]
use crate::options::OptionEntries;
use crate::options::{OptionValue, TokenizeOptions};
use crate::tokenizer::{SentTokenizer, WordTokenizer};

/// Configuration shared by the tokenizers
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenizerConfig {
    /// Options forwarded to the server's tokenizer
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: TokenizeOptions,
}

impl TokenizerConfig {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse configuration from TOML text
    ///
    /// Syntax errors surface as [`ConfigError::Toml`](crate::ConfigError::Toml);
    /// invalid options keep their own variants.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self {
            options: raw.options.into_options()?,
        })
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded {} tokenizer option(s) from {}",
            config.options.len(),
            path.display()
        );
        Ok(config)
    }

    fn options_ref(&self) -> Option<&TokenizeOptions> {
        Some(&self.options).filter(|options| !options.is_empty())
    }

    /// Create a word tokenizer using this configuration
    pub fn word_tokenizer<C: AnnotationClient>(&self, client: C) -> WordTokenizer<C> {
        WordTokenizer::new(client, self.options_ref())
    }

    /// Create a sentence tokenizer using this configuration
    pub fn sent_tokenizer<C: AnnotationClient>(&self, client: C) -> SentTokenizer<C> {
        SentTokenizer::new(client, self.options_ref())
    }
}

/// File layout before option validation
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    #[serde(default)]
    options: OptionEntries,
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: TokenizerConfig,
}

impl ConfigBuilder {
    /// Set one tokenizer option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Result<Self> {
        self.config.options.set(key, value)?;
        Ok(self)
    }

    /// Replace all tokenizer options
    pub fn options(mut self, options: TokenizeOptions) -> Self {
        self.config.options = options;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TokenizerConfig {
        self.config
    }
}
