use serde::{Deserialize, Serialize};

use super::Reference;

/// Hierarchical place naming: country within region within upper region.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    #[serde(rename = "LocationID")]
    pub location_id: Option<u64>,
    #[serde(rename = "CountryLocationID")]
    pub country_location_id: Option<u64>,
    pub country_name: Option<String>,
    #[serde(rename = "RegionLocationID")]
    pub region_location_id: Option<u64>,
    pub region_name: Option<String>,
    #[serde(rename = "UpperLocationID")]
    pub upper_location_id: Option<u64>,
    pub upper_name: Option<String>,
}

/// A place a name is recorded from, with its supporting reference.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Distribution {
    pub location: Option<Location>,
    pub reference: Option<Reference>,
}
