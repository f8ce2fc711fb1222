use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationCreate {
    pub name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
}
