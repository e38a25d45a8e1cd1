//! # Seed Catalog
//!
//! The sample records written by the seed operation. The catalog is data,
//! reproduced as published, so `I00004` keeps its owner with no price.

use super::entities::{Asset, Price, DOC_TYPE_INMUEBLE};

const CATALOG: [(&str, &str, &str, &str, Option<Price>); 6] = [
    (
        "I00000",
        "Av de la Paloma 81, 7B, 28021, Madrid, Espana",
        "C00000",
        "00000D",
        Some(603_000.0),
    ),
    (
        "I00001",
        "c/ Cienpies 23, 2A, 32021, Toledo, Espana",
        "C00001",
        "10000D",
        Some(125_000.0),
    ),
    (
        "I00002",
        "c/ Cava Alta 2, 45333, Alicante, Espana",
        "C00002",
        "Mercedes Jimenez Etxevarria",
        Some(230_000.0),
    ),
    (
        "I00003",
        "c/ Santa Clara 76, 4D, 12300, Zaragoza, Espana",
        "C00003",
        "30000D",
        Some(332_000.0),
    ),
    (
        "I00004",
        "Av de la Constitucion 40, 7F, 18006, Almeria, Espana",
        "C00004",
        "40000D",
        None,
    ),
    (
        "I00005",
        "c/ Borrell 17, 8A, 22090, Tarragona, Espana",
        "C00005",
        "50000D",
        Some(298_000.0),
    ),
];

/// Catalog records, each tagged `docType = "inmueble"`, in write order.
#[must_use]
pub fn seed_catalog() -> Vec<Asset> {
    CATALOG
        .iter()
        .map(|&(id, direccion, constructora, propietario, precio)| Asset {
            catastro_id: id.to_string(),
            direccion: direccion.to_string(),
            constructora_cif: constructora.to_string(),
            propietario_dni: Some(propietario.to_string()),
            ultimo_precio: precio,
            doc_type: Some(DOC_TYPE_INMUEBLE.to_string()),
        })
        .collect()
}
