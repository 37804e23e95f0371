use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Client {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub end_rua: String,
    #[serde(default)]
    pub end_bairro: String,
    #[serde(default)]
    pub end_numero: Option<u32>,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub fk_id_usuario: Option<i64>,
}

/// Payload de /create_clients
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterClientData {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub endereco: String,
    pub password: String,
}
