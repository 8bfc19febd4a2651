use crate::models::lenient::{document_id, nullable};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A national team from the `paises` collection.
///
/// Matches reference teams by name, so `nombre` must equal the strings used in
/// `equipo_local` / `equipo_visitante`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CountryRecord {
    #[serde(rename = "_id", default, deserialize_with = "document_id")]
    pub doc_id: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1))]
    pub nombre: String,
    #[serde(default)]
    pub siglas: Option<String>,
    #[serde(default)]
    pub iso: Option<String>,
    /// FIFA-style ranking position
    #[serde(default)]
    pub rankin: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub puntos: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub poder: i64,
    #[serde(default)]
    pub federacion: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_country_with_sparse_fields() {
        let country: CountryRecord = serde_json::from_value(json!({
            "_id": "paises/12",
            "id": 12,
            "nombre": "Argentina",
            "siglas": "ARG",
            "puntos": null
        }))
        .unwrap();
        assert_eq!(country.doc_id, "paises/12");
        assert_eq!(country.siglas.as_deref(), Some("ARG"));
        assert_eq!(country.puntos, 0);
        assert_eq!(country.rankin, None);
        assert!(country.validate().is_ok());
    }
}
