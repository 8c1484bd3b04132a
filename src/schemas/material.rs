use serde::Serialize;

use crate::domain::models::Material;
use crate::domain::types::MaterialKind;

#[derive(Debug, Serialize)]
pub(crate) struct MaterialResponse {
    pub(crate) title: String,
    pub(crate) link: String,
    #[serde(rename = "type")]
    pub(crate) kind: MaterialKind,
}

impl MaterialResponse {
    pub(crate) fn from_domain(material: Material) -> Self {
        Self { title: material.title, link: material.link, kind: material.kind }
    }
}
