use serde::{Deserialize, Serialize};

use super::NameId;

/// Image metadata for a name or specimen, from `/Name/{id}/Images`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    pub image_id: Option<u64>,
    pub name_id: Option<NameId>,
    pub name_text: Option<String>,
    pub specimen_id: Option<u64>,
    pub specimen_text: Option<String>,
    pub barcode: Option<String>,
    pub image_kind_text: Option<String>,
    pub caption: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub photographer: Option<String>,
    pub copyright: Option<String>,
    pub copyright_url: Option<String>,
    pub license_name: Option<String>,
    pub license_url: Option<String>,
    pub detail_url: Option<String>,
    pub detail_jpg_url: Option<String>,
    pub thumbnail_url: Option<String>,
}
