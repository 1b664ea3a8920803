//! Tokenizer options and their wire rendering
//!
//! Options travel to the server as one `tokenize.options` property of the form
//! `key1=value1,key2=value2`. The format has no escaping, so `,` and `=` are
//! rejected in keys and rendered values.

use crate::error::{ConfigError, Result};
use std::fmt;

/// Characters that delimit the options string
const RESERVED: [char; 2] = [',', '='];

/// A single option value
///
/// Rendering is fixed per variant: text verbatim, booleans as lowercase
/// `true`/`false`, integers in decimal and floats in shortest round-trip form
/// with an exponent for very large or small magnitudes (`0.5`, `2.0`,
/// `1e300`). Only finite floats are accepted into [`TokenizeOptions`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    /// Boolean flag
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Free text
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(true) => f.write_str("true"),
            OptionValue::Bool(false) => f.write_str("false"),
            OptionValue::Int(value) => write!(f, "{value}"),
            OptionValue::Float(value) => write!(f, "{value:?}"),
            OptionValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

/// Insertion-ordered tokenizer options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizeOptions {
    entries: Vec<(String, OptionValue)>,
}

impl TokenizeOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from key/value pairs, keeping their order
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        let mut options = Self::new();
        for (key, value) in pairs {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Set an option
    ///
    /// Setting a key that is already present replaces its value in place, so
    /// the key keeps its original position.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Result<&mut Self> {
        let key = key.into();
        let value = value.into();
        validate(&key, &value)?;

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        Ok(self)
    }

    /// Chainable variant of [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Result<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Look up an option value
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no options are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over options in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Render the `key=value,...` options string; empty when no options are set
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TokenizeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

fn validate(key: &str, value: &OptionValue) -> Result<()> {
    if key.is_empty() {
        return Err(ConfigError::EmptyOptionKey);
    }
    if let OptionValue::Float(number) = value {
        if !number.is_finite() {
            return Err(ConfigError::NonFiniteFloat {
                key: key.to_string(),
            });
        }
    }

    let rendered = value.to_string();
    let found = key
        .chars()
        .chain(rendered.chars())
        .find(|c| RESERVED.contains(c));

    match found {
        Some(character) => Err(ConfigError::ReservedCharacter {
            key: key.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenizeOptions {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OptionValue {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct ValueVisitor;

        impl serde::de::Visitor<'_> for ValueVisitor {
            type Value = OptionValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a boolean, a 64-bit integer, a float or a string")
            }

            fn visit_bool<E: serde::de::Error>(
                self,
                value: bool,
            ) -> std::result::Result<OptionValue, E> {
                Ok(OptionValue::Bool(value))
            }

            fn visit_i64<E: serde::de::Error>(
                self,
                value: i64,
            ) -> std::result::Result<OptionValue, E> {
                Ok(OptionValue::Int(value))
            }

            fn visit_u64<E: serde::de::Error>(
                self,
                value: u64,
            ) -> std::result::Result<OptionValue, E> {
                i64::try_from(value)
                    .map(OptionValue::Int)
                    .map_err(|_| E::custom(format!("integer {value} is out of range for i64")))
            }

            fn visit_i128<E: serde::de::Error>(
                self,
                value: i128,
            ) -> std::result::Result<OptionValue, E> {
                i64::try_from(value)
                    .map(OptionValue::Int)
                    .map_err(|_| E::custom(format!("integer {value} is out of range for i64")))
            }

            fn visit_u128<E: serde::de::Error>(
                self,
                value: u128,
            ) -> std::result::Result<OptionValue, E> {
                i64::try_from(value)
                    .map(OptionValue::Int)
                    .map_err(|_| E::custom(format!("integer {value} is out of range for i64")))
            }

            fn visit_f64<E: serde::de::Error>(
                self,
                value: f64,
            ) -> std::result::Result<OptionValue, E> {
                Ok(OptionValue::Float(value))
            }

            fn visit_str<E: serde::de::Error>(
                self,
                value: &str,
            ) -> std::result::Result<OptionValue, E> {
                Ok(OptionValue::Text(value.to_string()))
            }

            fn visit_string<E: serde::de::Error>(
                self,
                value: String,
            ) -> std::result::Result<OptionValue, E> {
                Ok(OptionValue::Text(value))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Option entries in document order, not yet validated
#[cfg(feature = "serde")]
#[derive(Debug, Default)]
pub(crate) struct OptionEntries(Vec<(String, OptionValue)>);

#[cfg(feature = "serde")]
impl OptionEntries {
    /// Validate the entries into options
    pub(crate) fn into_options(self) -> Result<TokenizeOptions> {
        TokenizeOptions::from_pairs(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OptionEntries {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> serde::de::Visitor<'de> for EntriesVisitor {
            type Value = OptionEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of tokenizer options")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, OptionValue>()? {
                    entries.push(entry);
                }
                Ok(OptionEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TokenizeOptions {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        <OptionEntries as serde::Deserialize>::deserialize(deserializer)?
            .into_options()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_rendering() {
        assert_eq!(OptionValue::from(true).to_string(), "true");
        assert_eq!(OptionValue::from(false).to_string(), "false");
        assert_eq!(OptionValue::from(42i64).to_string(), "42");
        assert_eq!(OptionValue::from(-7i64).to_string(), "-7");
        assert_eq!(OptionValue::from(0.5).to_string(), "0.5");
        assert_eq!(OptionValue::from(2.0).to_string(), "2.0");
        assert_eq!(OptionValue::from(1e300).to_string(), "1e300");
        assert_eq!(OptionValue::from("noneKeep").to_string(), "noneKeep");
    }

    #[test]
    fn test_empty_options_render_empty() {
        assert_eq!(TokenizeOptions::new().render(), "");
    }

    #[test]
    fn test_render_keeps_insertion_order() {
        let options = TokenizeOptions::new()
            .with("untokenizable", "noneKeep")
            .unwrap()
            .with("americanize", true)
            .unwrap()
            .with("asciiQuotes", false)
            .unwrap();

        assert_eq!(
            options.render(),
            "untokenizable=noneKeep,americanize=true,asciiQuotes=false"
        );
    }

    #[test]
    fn test_reset_keeps_position() {
        let mut options = TokenizeOptions::from_pairs([("a", 1i64), ("b", 2)]).unwrap();
        options.set("a", 3i64).unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options.get("a"), Some(&OptionValue::Int(3)));
        assert_eq!(options.render(), "a=3,b=2");
    }

    #[test]
    fn test_rejects_empty_key() {
        let result = TokenizeOptions::new().with("", true);
        assert!(matches!(result, Err(ConfigError::EmptyOptionKey)));
    }

    #[test]
    fn test_rejects_reserved_characters() {
        let in_key = TokenizeOptions::new().with("a=b", true);
        assert!(matches!(
            in_key,
            Err(ConfigError::ReservedCharacter { character: '=', .. })
        ));

        let in_value = TokenizeOptions::new().with("quotes", "a,b");
        match in_value {
            Err(ConfigError::ReservedCharacter { key, character }) => {
                assert_eq!(key, "quotes");
                assert_eq!(character, ',');
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_finite_floats() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match TokenizeOptions::new().with("ratio", value) {
                Err(ConfigError::NonFiniteFloat { key }) => assert_eq!(key, "ratio"),
                other => panic!("unexpected result for {value}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_large_float_renders_compactly() {
        let options = TokenizeOptions::new().with("limit", 1e300).unwrap();
        assert_eq!(options.render(), "limit=1e300");
    }

    #[test]
    fn test_failed_set_leaves_options_untouched() {
        let mut options = TokenizeOptions::from_pairs([("a", true)]).unwrap();
        assert!(options.set("a", "x=y").is_err());
        assert_eq!(options.get("a"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_deserialize_preserves_order() {
        let options: TokenizeOptions =
            serde_json::from_str(r#"{"z": "last", "a": true, "m": 3}"#).unwrap();
        assert_eq!(options.render(), "z=last,a=true,m=3");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_deserialize_rejects_out_of_range_integer() {
        let result: std::result::Result<TokenizeOptions, _> =
            serde_json::from_str(r#"{"n": 18446744073709551615}"#);
        let error = result.unwrap_err();
        assert!(error.to_string().contains("out of range"), "{error}");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_deserialize_value_kinds() {
        let options: TokenizeOptions =
            serde_json::from_str(r#"{"b": false, "i": -3, "u": 7, "f": 0.25, "s": "x"}"#).unwrap();
        assert_eq!(options.get("b"), Some(&OptionValue::Bool(false)));
        assert_eq!(options.get("i"), Some(&OptionValue::Int(-3)));
        assert_eq!(options.get("u"), Some(&OptionValue::Int(7)));
        assert_eq!(options.get("f"), Some(&OptionValue::Float(0.25)));
        assert_eq!(options.get("s"), Some(&OptionValue::Text("x".to_string())));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_deserialize_validates() {
        let result: std::result::Result<TokenizeOptions, _> =
            serde_json::from_str(r#"{"bad": "a,b"}"#);
        assert!(result.is_err());
    }
}
