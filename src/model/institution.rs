use serde::{Deserialize, Serialize};

use crate::model::Resource;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstitutionDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Resource for InstitutionDto {
    const NAME: &'static str = "institutions";
    const ENVELOPE: &'static str = "institutions";
}
