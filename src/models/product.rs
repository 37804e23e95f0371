use serde::{Deserialize, Serialize};
use crate::models::client::Client;
use crate::models::delivery::Delivery;
use crate::models::fleet::Driver;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub preco: f64,
    #[serde(default)]
    pub quantidade_estoque: i64,
    #[serde(default)]
    pub fk_id_cliente: Option<i64>,
    #[serde(default)]
    pub client: Option<Client>,
    #[serde(default)]
    pub driver: Option<Driver>,
    #[serde(default)]
    pub destino: Option<String>,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
}

impl Product {
    /// Estado de la entrega más reciente, si la hay
    pub fn latest_delivery(&self) -> Option<&Delivery> {
        self.deliveries.iter().max_by_key(|d| d.id)
    }

    pub fn driver_label(&self) -> &str {
        self.driver.as_ref().map(|d| d.nome.as_str()).unwrap_or("Não atribuído")
    }

    pub fn destination_label(&self) -> &str {
        self.destino.as_deref().filter(|d| !d.is_empty()).unwrap_or("Não definido")
    }

    pub fn formatted_price(&self) -> String {
        format!("R$ {:.2}", self.preco)
    }
}

/// Payload de /create_product
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterProductData {
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
    pub quantidade_estoque: i64,
    pub fk_id_cliente: i64,
    pub fk_id_ponto_distribuicao: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_uses_two_decimals() {
        let product: Product = serde_json::from_str(r#"{"id": 1, "nome": "Produto A", "preco": 99.9}"#).unwrap();
        assert_eq!(product.formatted_price(), "R$ 99.90");
        assert!(product.latest_delivery().is_none());
        assert_eq!(product.driver_label(), "Não atribuído");
        assert_eq!(product.destination_label(), "Não definido");
    }

    #[test]
    fn latest_delivery_is_highest_id() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "nome": "Produto A", "deliveries": [
                {"id": 3, "status": "Entregue", "is_delivered": true},
                {"id": 7, "status": "Em trânsito", "is_delivered": false}
            ]}"#,
        )
        .unwrap();
        assert_eq!(product.latest_delivery().map(|d| d.id), Some(7));
    }
}
