use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;

/// Contract for any “choice enum”: a serde adjacently-tagged enum whose
/// variants carry a `*Params` struct.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// JSON Schema for the whole tagged enum.
    fn schema() -> Schema;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }
    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    /// Default `params` JSON for a given kind (usually from `*Params::default()`).
    fn default_params(kind: Self::Kind) -> Value;

    /// Optional hook to collect nested choices (method, function...). Default: none.
    fn subprompts<D: PromptDriver>(
        _driver: &D,
        _kind: Self::Kind,
    ) -> Result<Option<Map<String, Value>>> {
        Ok(None)
    }

    /// Build the typed enum from kind + params.
    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }
}

/// Serializes a params struct for [`UIChoice::default_params`].
pub(crate) fn params_of<T: Serialize>(params: T) -> Value {
    serde_json::to_value(params).unwrap_or_default()
}
