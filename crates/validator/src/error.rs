use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serialize};
use std::borrow::Cow;

pub struct MessageBuilder(Option<Vec<Cow<'static, str>>>);

// The inner option always holds a value until `build` takes it
#[allow(clippy::unwrap_used)]
impl MessageBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self(Some(Vec::new()))
    }

    pub fn insert(&mut self, message: impl Into<Cow<'static, str>>) -> &mut Self {
        self.0.as_mut().unwrap().push(message.into());
        self
    }

    #[must_use]
    pub fn build(&mut self) -> ValidateError {
        ValidateError::Messages(self.0.take().unwrap())
    }
}

pub struct FieldBuilder(Option<IndexMap<Cow<'static, str>, ValidateError>>);

// The inner option always holds a value until `build` takes it
#[allow(clippy::new_without_default)]
#[allow(clippy::unwrap_used)]
impl FieldBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(Some(IndexMap::default()))
    }

    /// Inserts a field entry. Empty errors are silently discarded so
    /// callers may insert unconditionally per field.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: ValidateError,
    ) -> &mut Self {
        if !value.is_empty() {
            self.0.as_mut().unwrap().insert(key.into(), value);
        }
        self
    }

    #[must_use]
    pub fn build(&mut self) -> ValidateError {
        ValidateError::Fields(self.0.take().unwrap())
    }
}

// ---------------------------------------------------- //

/// A tree of validation failures: either a map of field name to nested
/// errors, or a list of messages for one field.
#[derive(PartialEq, Eq)]
pub enum ValidateError {
    Fields(IndexMap<Cow<'static, str>, ValidateError>),
    Messages(Vec<Cow<'static, str>>),
}

impl std::fmt::Display for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid data occurred")
    }
}

impl std::error::Error for ValidateError {}

impl std::fmt::Debug for ValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidateError::Fields(n) => n.fmt(f),
            ValidateError::Messages(n) => f.debug_map().entry(&"_errors", &n).finish(),
        }
    }
}

impl ValidateError {
    #[must_use]
    pub fn field_builder() -> FieldBuilder {
        FieldBuilder::new()
    }

    #[must_use]
    pub fn msg_builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    #[must_use]
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        MessageBuilder::new().insert(message.into()).build()
    }
}

impl ValidateError {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ValidateError::Fields(n) => n.is_empty(),
            ValidateError::Messages(n) => n.is_empty(),
        }
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Serialize for ValidateError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ValidateError::Fields(n) => {
                let mut map = serializer.serialize_map(Some(n.len()))?;
                for (key, value) in n {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            ValidateError::Messages(n) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("_errors", &n)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validate;
    use serde_test::Token;

    #[derive(Debug)]
    struct Entry {
        name: &'static str,
        age: u32,
    }

    fn validate_name(name: &str) -> Result<(), ValidateError> {
        let mut msg = ValidateError::msg_builder();
        if name.is_empty() {
            msg.insert("Name is empty");
        }
        msg.build().into_result()
    }

    fn validate_age(age: u32) -> Result<(), ValidateError> {
        if age == 0 {
            return Err(ValidateError::message("Invalid age"));
        }
        if age > 202 {
            return Err(ValidateError::message("Too old"));
        }
        Ok(())
    }

    impl Validate for Entry {
        fn validate(&self) -> Result<(), ValidateError> {
            let mut fields = ValidateError::field_builder();
            if let Err(e) = validate_name(self.name) {
                fields.insert("name", e);
            }
            if let Err(e) = validate_age(self.age) {
                fields.insert("age", e);
            }
            fields.build().into_result()
        }
    }

    #[test]
    fn test_debug_fmt() {
        const EXPECTED_FMT_MSG: &str =
            r#"{"name": {"_errors": ["Name is empty"]}, "age": {"_errors": ["Invalid age"]}}"#;

        let error = Entry { name: "", age: 0 }.validate().unwrap_err();
        assert_eq!(EXPECTED_FMT_MSG, format!("{error:?}"));
    }

    #[test]
    fn test_serialize_impl() {
        let error = Entry { name: "", age: 0 }.validate().unwrap_err();

        serde_test::assert_ser_tokens(
            &error,
            &[
                Token::Map { len: Some(2) },
                Token::Str("name"),
                Token::Map { len: Some(1) },
                Token::Str("_errors"),
                Token::Seq { len: Some(1) },
                Token::Str("Name is empty"),
                Token::SeqEnd,
                Token::MapEnd,
                Token::Str("age"),
                Token::Map { len: Some(1) },
                Token::Str("_errors"),
                Token::Seq { len: Some(1) },
                Token::Str("Invalid age"),
                Token::SeqEnd,
                Token::MapEnd,
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn validate_error_is_empty() {
        assert!(MessageBuilder::new().build().is_empty());
        assert!(FieldBuilder::new().build().is_empty());

        let mut msg = MessageBuilder::new();
        msg.insert("Hello world!");
        assert!(!msg.build().is_empty());

        let mut msg = MessageBuilder::new();
        msg.insert("Hello world!");

        let mut err = FieldBuilder::new();
        err.insert("microbar", msg.build());
        assert!(!err.build().is_empty());

        // fields discard empty children entirely
        let mut err = FieldBuilder::new();
        err.insert("microbar", MessageBuilder::new().build());
        assert!(err.build().is_empty());
    }
}
