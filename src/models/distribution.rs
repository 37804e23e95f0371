use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DistributionPoint {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub end_rua: String,
    #[serde(default)]
    pub end_bairro: String,
    #[serde(default)]
    pub end_numero: Option<u32>,
    #[serde(default)]
    pub tipo: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterDistributionPointData {
    pub nome: String,
    pub end_rua: String,
    pub end_bairro: String,
    pub end_numero: u32,
    pub tipo: String,
}
