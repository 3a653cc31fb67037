use serde::{Deserialize, Serialize};
use std::fmt;

use super::Ring;
use crate::storage::coords::stored_ring;

/// Land-use kind of a parcel (`jenis`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LandUse {
    Agriculture,
    Settlement,
    Plantation,
    Forest,
    Industry,
    PublicFacility,
    Other,
    /// Value outside the known list, kept verbatim
    Unlisted(String),
}

impl LandUse {
    pub const ALL: [LandUse; 7] = [
        LandUse::Agriculture,
        LandUse::Settlement,
        LandUse::Plantation,
        LandUse::Forest,
        LandUse::Industry,
        LandUse::PublicFacility,
        LandUse::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            LandUse::Agriculture => "Pertanian",
            LandUse::Settlement => "Pemukiman",
            LandUse::Plantation => "Perkebunan",
            LandUse::Forest => "Hutan",
            LandUse::Industry => "Industri",
            LandUse::PublicFacility => "Fasilitas Umum",
            LandUse::Other => "Lainnya",
            LandUse::Unlisted(s) => s,
        }
    }
}

impl From<String> for LandUse {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pertanian" => LandUse::Agriculture,
            "Pemukiman" => LandUse::Settlement,
            "Perkebunan" => LandUse::Plantation,
            "Hutan" => LandUse::Forest,
            "Industri" => LandUse::Industry,
            "Fasilitas Umum" => LandUse::PublicFacility,
            "Lainnya" => LandUse::Other,
            _ => LandUse::Unlisted(value),
        }
    }
}

impl From<LandUse> for String {
    fn from(value: LandUse) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LandUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored land-parcel or administrative boundary.
///
/// `area_m2` (`luas`) is derived from `coordinates` and must be recomputed
/// whenever the ring changes; see [`crate::facade::boundary::save_boundary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "jenis")]
    pub land_use: LandUse,
    #[serde(with = "stored_ring", default)]
    pub coordinates: Ring,
    #[serde(rename = "warna", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(rename = "luas", default)]
    pub area_m2: Option<f64>,
    #[serde(rename = "nama_pemilik", default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(rename = "no_hp_pemilik", default, skip_serializing_if = "Option::is_none")]
    pub owner_phone: Option<String>,
    #[serde(rename = "alamat_pemilik", default, skip_serializing_if = "Option::is_none")]
    pub owner_address: Option<String>,
    #[serde(rename = "keterangan", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BoundaryRecord {
    pub fn new(name: impl Into<String>, land_use: LandUse, coordinates: Ring) -> Self {
        Self {
            id: None,
            name: name.into(),
            land_use,
            coordinates,
            color: None,
            opacity: None,
            area_m2: None,
            owner_name: None,
            owner_phone: None,
            owner_address: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;

    #[test]
    fn test_land_use_round_trip_names() {
        for kind in LandUse::ALL {
            assert_eq!(LandUse::from(kind.as_str().to_string()), kind);
        }
        assert_eq!(
            LandUse::from("Tambak".to_string()),
            LandUse::Unlisted("Tambak".to_string())
        );
    }

    #[test]
    fn test_record_reads_stored_json() {
        let json = r#"{
            "nama": "Sawah Pak Darmo",
            "jenis": "Pertanian",
            "coordinates": [[-6.6185, 110.654], [-6.6185, 110.655], [-6.6175, 110.655]],
            "luas": null,
            "nama_pemilik": "Darmo"
        }"#;
        let record: BoundaryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.land_use, LandUse::Agriculture);
        assert_eq!(record.coordinates.len(), 3);
        assert_eq!(record.coordinates[1], GeoPoint::new(-6.6185, 110.655));
        assert_eq!(record.owner_name.as_deref(), Some("Darmo"));
        assert!(record.area_m2.is_none());
    }
}
