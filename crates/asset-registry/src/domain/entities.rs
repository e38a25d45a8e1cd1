//! # Domain Entities
//!
//! The asset record and the shapes produced by listing the world state.

use canonical_encoding::{ToCanonical, Value};
use serde::{Deserialize, Serialize};

/// Document type tag carried by catalog records.
pub const DOC_TYPE_INMUEBLE: &str = "inmueble";

/// Sale price. Any finite number is accepted, including zero.
pub type Price = f64;

/// A registered real-estate asset.
///
/// `catastro_id` is the world state key and never changes once written.
/// Owner and price are unset until the first sale and are always set
/// together by [`Asset::record_sale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "catastroID")]
    pub catastro_id: String,

    pub direccion: String,

    #[serde(rename = "constructoraCIF")]
    pub constructora_cif: String,

    #[serde(rename = "propietarioDNI", default)]
    pub propietario_dni: Option<String>,

    #[serde(rename = "ultimoPrecio", default)]
    pub ultimo_precio: Option<Price>,

    /// Only catalog records carry a document type.
    #[serde(rename = "docType", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
}

impl Asset {
    /// A freshly registered asset: no owner, no price, no document type.
    pub fn new(
        catastro_id: impl Into<String>,
        direccion: impl Into<String>,
        constructora_cif: impl Into<String>,
    ) -> Self {
        Self {
            catastro_id: catastro_id.into(),
            direccion: direccion.into(),
            constructora_cif: constructora_cif.into(),
            propietario_dni: None,
            ultimo_precio: None,
            doc_type: None,
        }
    }

    /// Overwrite owner and price, returning the previous owner.
    pub fn record_sale(&mut self, new_owner: impl Into<String>, price: Price) -> Option<String> {
        self.ultimo_precio = Some(price);
        self.propietario_dni.replace(new_owner.into())
    }

    /// Decode a stored document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl ToCanonical for Asset {
    fn to_value(&self) -> Value {
        let mut value = Value::object([
            ("catastroID", Value::from(self.catastro_id.as_str())),
            ("direccion", Value::from(self.direccion.as_str())),
            ("constructoraCIF", Value::from(self.constructora_cif.as_str())),
            ("propietarioDNI", Value::from(self.propietario_dni.clone())),
            ("ultimoPrecio", Value::from(self.ultimo_precio)),
        ]);
        if let Some(doc_type) = &self.doc_type {
            value.insert("docType", Value::from(doc_type.as_str()));
        }
        value
    }
}

/// One entry of a full world state listing.
///
/// Values that do not decode as an asset are kept as their raw text so a
/// single malformed entry never aborts the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListedEntry {
    Decoded(Asset),
    RawText(String),
}

impl ListedEntry {
    /// Classify a stored value.
    #[must_use]
    pub fn from_stored(bytes: &[u8]) -> Self {
        match Asset::from_slice(bytes) {
            Ok(asset) => ListedEntry::Decoded(asset),
            Err(_) => ListedEntry::RawText(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    #[must_use]
    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            ListedEntry::Decoded(asset) => Some(asset),
            ListedEntry::RawText(_) => None,
        }
    }
}

impl ToCanonical for ListedEntry {
    fn to_value(&self) -> Value {
        match self {
            ListedEntry::Decoded(asset) => asset.to_value(),
            ListedEntry::RawText(text) => Value::from(text.as_str()),
        }
    }
}
