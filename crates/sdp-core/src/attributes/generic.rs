//! Generic attribute shapes
//!
//! Attributes that need no structured parsing are stored in one of four
//! shapes: a presence flag, a single string, a single number or a list of
//! strings. Unrecognized attributes use the flag shape when they carry no
//! value and the multi-string shape otherwise, so a repeated line is kept
//! whole; both carry their own name.

use crate::attributes::AttributeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

fn assert_other_name(name: &str) {
    assert!(
        crate::attributes::common::is_valid_token(name),
        "invalid attribute name {:?}",
        name
    );
    assert!(
        AttributeKind::from_name(name) == AttributeKind::Other,
        "{} is a known attribute and has its own kind",
        name
    );
}

/// Presence-only attribute, e.g. a=rtcp-mux
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagAttribute {
    kind: AttributeKind,
    raw_name: Option<String>,
}

impl FlagAttribute {
    /// # Panics
    ///
    /// Panics if `kind` is not stored as a flag.
    pub fn new(kind: AttributeKind) -> Self {
        assert!(kind.is_flag(), "{:?} is not a flag attribute", kind);
        FlagAttribute { kind, raw_name: None }
    }

    /// Unrecognized flag attribute
    pub fn other(name: impl Into<String>) -> Self {
        let name = name.into();
        assert_other_name(&name);
        FlagAttribute {
            kind: AttributeKind::Other,
            raw_name: Some(name),
        }
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.raw_name.as_deref().unwrap_or_else(|| self.kind.name())
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        write!(out, "a={}", self.name())?;
        out.write_str(terminator)
    }
}

/// Single text value, e.g. a=mid:audio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringAttribute {
    kind: AttributeKind,
    value: String,
}

impl StringAttribute {
    /// # Panics
    ///
    /// Panics if `kind` is not stored as a single string.
    pub fn new(kind: AttributeKind, value: impl Into<String>) -> Self {
        assert!(kind.is_text(), "{:?} is not a string attribute", kind);
        StringAttribute {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        write!(out, "a={}:{}", self.name(), self.value)?;
        out.write_str(terminator)
    }
}

/// Single unsigned number, e.g. a=ptime:20
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberAttribute {
    kind: AttributeKind,
    value: u32,
}

impl NumberAttribute {
    /// # Panics
    ///
    /// Panics if `kind` is not stored as a number.
    pub fn new(kind: AttributeKind, value: u32) -> Self {
        assert!(kind.is_number(), "{:?} is not a number attribute", kind);
        NumberAttribute { kind, value }
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        write!(out, "a={}:{}", self.kind, self.value)?;
        out.write_str(terminator)
    }
}

/// One text value per line, e.g. a=candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiStringAttribute {
    kind: AttributeKind,
    raw_name: Option<String>,
    values: Vec<String>,
}

impl MultiStringAttribute {
    /// # Panics
    ///
    /// Panics if `kind` is not stored as a list of strings.
    pub fn new(kind: AttributeKind) -> Self {
        assert!(kind.is_multi_text(), "{:?} is not a multi-string attribute", kind);
        MultiStringAttribute {
            kind,
            raw_name: None,
            values: Vec::new(),
        }
    }

    /// Unrecognized attribute that may repeat
    pub fn other(name: impl Into<String>) -> Self {
        let name = name.into();
        assert_other_name(&name);
        MultiStringAttribute {
            kind: AttributeKind::Other,
            raw_name: Some(name),
            values: Vec::new(),
        }
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.raw_name.as_deref().unwrap_or_else(|| self.kind.name())
    }

    pub fn push_entry(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub(crate) fn append(&mut self, other: MultiStringAttribute) {
        self.values.extend(other.values);
    }

    pub(crate) fn serialize(&self, out: &mut dyn fmt::Write, terminator: &str) -> fmt::Result {
        for value in &self.values {
            write!(out, "a={}:{}", self.name(), value)?;
            out.write_str(terminator)?;
        }
        Ok(())
    }
}
