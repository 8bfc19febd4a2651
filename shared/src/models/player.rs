use crate::models::lenient::{document_id, nullable, tag_list};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_skill() -> u32 {
    70
}

fn default_aggression() -> u32 {
    50
}

fn default_foot() -> String {
    "derecho".to_string()
}

/// A roster entry from the `jugadores` collection.
///
/// Skill attributes are 0-100 ratings; missing skills fall back to 70 and
/// aggression to 50, matching how the roster generator seeds new players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlayerRecord {
    /// Store document id
    #[serde(rename = "_id", default, deserialize_with = "document_id")]
    pub doc_id: String,

    /// Numeric roster id
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1))]
    pub nombre: String,

    #[serde(default)]
    pub posicion_id: Option<i64>,
    #[serde(default)]
    pub pais_id: Option<i64>,

    /// Country name, merged in by the store query when the roster entry lacks it
    #[serde(default)]
    pub pais: Option<String>,

    // Season totals and in-tournament counters
    #[serde(default, deserialize_with = "nullable")]
    pub goles: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub goles_temp: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub faltas: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub faltas_temp: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub amarilla: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub amarilla_temp: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub roja: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub roja_temp: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub lesiones: u32,

    #[serde(default, deserialize_with = "nullable")]
    pub overall: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub rendimiento: i64,

    // Technical
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub precision_tiro: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub precision_pase: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub regate: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub fuerza_disparo: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub vision_juego: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub anticipacion: u32,
    #[serde(default = "default_skill", alias = "control_balón")]
    #[validate(range(min = 0, max = 100))]
    pub control_balon: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub juego_aereo: u32,

    // Physical
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub velocidad: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub resistencia: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub fuerza_fisica: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub agilidad: u32,

    // Mental
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub compostura: u32,
    #[serde(default = "default_aggression")]
    #[validate(range(min = 0, max = 100))]
    pub agresividad: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub concentracion: u32,

    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub forma_actual: u32,
    #[serde(default = "default_skill")]
    #[validate(range(min = 0, max = 100))]
    pub moral: u32,

    #[serde(default, deserialize_with = "nullable")]
    pub especialista_tiros_libres: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub especialista_penales: bool,
    #[serde(default = "default_foot")]
    pub pie_habil: String,

    #[serde(default, deserialize_with = "tag_list")]
    pub bonificaciones: Vec<String>,
}

impl PlayerRecord {
    /// Team the player represents in match action logs.
    pub fn team(&self) -> &str {
        self.pais.as_deref().unwrap_or("")
    }

    /// Key used by the HTTP surface: the numeric id when present, else the document id.
    pub fn key(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => self.doc_id.clone(),
        }
    }
}
