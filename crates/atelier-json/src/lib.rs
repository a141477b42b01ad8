//! # atelier-json
//!
//! The hydration substrate shared by every Atelier wire record:
//! - JavaScript truthiness rules that decide field presence on both the
//!   inbound (hydration) and outbound (emission) side
//! - The `FromJson` / `ToJson` traits every record implements
//! - Per-kind extraction and emission helpers
//! - The [`dto!`] macro that generates each record from its field list
//!
//! Hydration never fails: missing keys, falsy values, and type-mismatched
//! values all leave the field unset, and unknown keys are ignored. The only
//! fallible surface is [`FromJson::from_json_str`], which can reject
//! syntactically invalid JSON text.

pub mod emit;
pub mod hydrate;
mod macros;
pub mod value;

use serde_json::Value;
use thiserror::Error;

// Re-exported for the expansion of `dto!` at call sites.
#[doc(hidden)]
pub use paste;
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;

/// A plain JSON object, the universal wire payload.
pub type JsonObject = serde_json::Map<String, Value>;

/// Errors raised when decoding a record from JSON text.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload was not syntactically valid JSON.
    #[error("malformed JSON payload: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Construction of a record from an untyped JSON value.
pub trait FromJson: Default {
    /// Hydrates a record from `value`, best-effort.
    ///
    /// Each declared field is assigned only when its key is present and the
    /// value is truthy; everything else stays at its default. Passing a
    /// non-object value yields a blank record.
    fn from_json(value: &Value) -> Self;

    /// Parses JSON text and hydrates a record from it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Syntax`] when `payload` is not valid JSON.
    /// Hydration itself never fails.
    fn from_json_str(payload: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(payload)?;
        Ok(Self::from_json(&value))
    }
}

/// Re-serialization of a record into an untyped JSON value.
pub trait ToJson {
    /// Emits every truthy field under its wire key.
    ///
    /// Unset and falsy scalars are omitted, including an explicitly set
    /// `false`, `0`, or `""`, and so are empty lists. Present nested
    /// records and maps are always written: objects are truthy.
    fn to_json(&self) -> Value;

    /// Compact JSON text of [`ToJson::to_json`].
    fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}
