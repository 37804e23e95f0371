use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sugerencia de autocompletado devuelta por el proveedor de lugares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Identificador opaco del lugar (place_id)
    #[serde(alias = "place_id")]
    pub id: String,
    /// Texto a mostrar (description)
    #[serde(alias = "description")]
    pub label: String,
}

/// Token de sesión que agrupa predicciones + detalle en una unidad facturable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Componente de dirección tal como lo entrega el proveedor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Detalle de un lugar (address_components, formatted_address, geometry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaceDetails {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Dirección estructurada. Los campos ausentes quedan en None, nunca se rellenan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResolvedAddress {
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub street_number: Option<u32>,
}

impl ResolvedAddress {
    /// Descompone la lista de componentes según sus etiquetas de tipo
    pub fn from_components(components: &[AddressComponent]) -> Self {
        let mut address = Self::default();

        for component in components {
            if component.has_type("route") {
                address.street = Some(component.long_name.clone());
            }
            if component.has_type("sublocality") || component.has_type("administrative_area_level_2") {
                address.neighborhood = Some(component.long_name.clone());
            }
            if component.has_type("street_number") {
                // "42A" y similares no son un número válido para el backend
                address.street_number = component.long_name.trim().parse().ok();
            }
        }

        address
    }

    pub fn is_complete(&self) -> bool {
        self.street.is_some() && self.neighborhood.is_some() && self.street_number.is_some()
    }
}

/// Señal emitida al formulario anfitrión
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceSelection {
    Resolved {
        address: ResolvedAddress,
        formatted_address: String,
        location: Option<GeoPoint>,
    },
    /// "Ningún lugar": el formulario debe limpiar sus campos dependientes
    Cleared,
}
