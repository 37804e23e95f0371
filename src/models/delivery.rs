use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::fleet::{Driver, Vehicle};
use crate::models::product::Product;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Delivery {
    pub id: i64,
    pub status: String,
    #[serde(default)]
    pub is_delivered: bool,
    #[serde(default)]
    pub data_criacao: Option<NaiveDateTime>,
    #[serde(default)]
    pub data_entrega: Option<NaiveDateTime>,
}

/// Estados conocidos de una entrega
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Other,
}

impl Delivery {
    pub fn status_kind(&self) -> DeliveryStatus {
        if self.is_delivered {
            return DeliveryStatus::Delivered;
        }
        match self.status.trim().to_lowercase().as_str() {
            "pendente" | "em processo" => DeliveryStatus::Pending,
            "em trânsito" | "em transito" => DeliveryStatus::InTransit,
            "entregue" | "delivered" => DeliveryStatus::Delivered,
            _ => DeliveryStatus::Other,
        }
    }

    /// Clase CSS del badge de estado
    pub fn badge_class(&self) -> &'static str {
        match self.status_kind() {
            DeliveryStatus::Delivered => "badge badge-success",
            DeliveryStatus::InTransit => "badge badge-warning",
            DeliveryStatus::Pending | DeliveryStatus::Other => "badge badge-secondary",
        }
    }

    pub fn delivered_at_label(&self) -> Option<String> {
        self.data_entrega.map(|d| d.format("%d/%m/%Y %H:%M").to_string())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RouteEndpoints {
    pub origin: String,
    pub destination: String,
}

/// Detalle completo que consume la vista de seguimiento
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DeliveryDetails {
    pub id: i64,
    pub vehicle: Vehicle,
    pub driver: Driver,
    pub product: Product,
    pub origem: String,
    pub destino: String,
    pub delivery: Delivery,
    pub rota: RouteEndpoints,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(status: &str, is_delivered: bool) -> Delivery {
        Delivery {
            id: 1,
            status: status.to_string(),
            is_delivered,
            data_criacao: None,
            data_entrega: None,
        }
    }

    #[test]
    fn status_mapping() {
        assert_eq!(delivery("Em trânsito", false).status_kind(), DeliveryStatus::InTransit);
        assert_eq!(delivery("Pendente", false).status_kind(), DeliveryStatus::Pending);
        assert_eq!(delivery("Entregue", false).status_kind(), DeliveryStatus::Delivered);
        assert_eq!(delivery("Pendente", true).status_kind(), DeliveryStatus::Delivered);
        assert_eq!(delivery("???", false).badge_class(), "badge badge-secondary");
    }

    #[test]
    fn parses_backend_naive_datetimes() {
        let delivery: Delivery = serde_json::from_str(
            r#"{"id": 2, "status": "delivered", "data_entrega": "2024-11-05T14:30:00"}"#,
        )
        .unwrap();
        assert_eq!(delivery.delivered_at_label().as_deref(), Some("05/11/2024 14:30"));
    }
}
