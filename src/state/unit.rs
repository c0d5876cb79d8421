use serde::Deserialize;
use serde::Serialize;

/// Snapshot of a single agent already on the map.
///
/// Carried through requests for context only; no decision reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub health: f64,
    pub x: f64,
    pub y: f64,
}
