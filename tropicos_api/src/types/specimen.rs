use serde::{Deserialize, Serialize};

/// Herbarium specimen metadata, from `/Name/{id}/Specimens`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Specimen {
    pub specimen_id: Option<u64>,
    pub collector_string: Option<String>,
    pub collection_number: Option<String>,
    pub institution: Option<String>,
    pub country_name: Option<String>,
    pub date_display: Option<String>,
    /// Decimal degrees.
    pub latitude: Option<f64>,
    pub latitude_display: Option<String>,
    /// Decimal degrees.
    pub longitude: Option<f64>,
    pub longitude_display: Option<String>,
    pub coordinate_source: Option<String>,
}

impl Specimen {
    /// Returns `(latitude, longitude)` when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
