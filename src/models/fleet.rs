use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Vehicle {
    pub id: i64,
    #[serde(default)]
    pub modelo: String,
    #[serde(default)]
    pub placa: String,
    #[serde(default)]
    pub capacidade: f64,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub fk_id_motorista: Option<i64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Driver {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub habilitacao: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub end_rua: String,
    #[serde(default)]
    pub end_bairro: String,
    #[serde(default)]
    pub end_numero: Option<u32>,
    #[serde(default)]
    pub fk_id_veiculo: Option<i64>,
}

/// Payload de /create_driver
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterDriverData {
    pub nome: String,
    pub habilitacao: String,
    pub email: String,
    pub senha: String,
    pub end_rua: String,
    pub end_bairro: String,
    pub end_numero: u32,
}

/// Payload de /create_vehicle (con el motorista ya registrado)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterVehicleData {
    pub modelo: String,
    pub placa: String,
    pub capacidade: f64,
    pub fk_id_motorista: i64,
}
