// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP al backend de entregas
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::CONFIG;
use crate::models::{
    Client, DeliveryDetails, DistributionPoint, Driver, LoginResponse, Product, RegisterClientData,
    RegisterDistributionPointData, RegisterDriverData, RegisterProductData, RegisterVehicleData, Vehicle,
};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(CONFIG.backend_url.clone(), token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Añade `Authorization: Bearer` si hay sesión
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => {
                request.header("Authorization", &format!("Bearer {}", token))
            }
            _ => request,
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP {}: {}", status, error_text));
        }
        response.json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self.authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        Self::parse(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, String> {
        let response = self.authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        Self::parse(response).await
    }

    /// Login: credenciales como query params, sin cuerpo
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        log::info!("🔐 Iniciando sesión: {}", email);

        let response = Request::post(&self.url("/auth/login"))
            .query([("email", email), ("password", password)])
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        Self::parse(response).await
    }

    pub async fn register_client(&self, data: &RegisterClientData) -> Result<Client, String> {
        log::info!("📝 Registrando cliente: {}", data.nome);
        self.post_json("/create_clients", data).await
    }

    pub async fn fetch_clients(&self) -> Result<Vec<Client>, String> {
        self.get_json("/clients").await
    }

    pub async fn register_product(&self, data: &RegisterProductData) -> Result<Product, String> {
        log::info!("📝 Registrando producto: {}", data.nome);
        self.post_json("/create_product", data).await
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, String> {
        let products: Vec<Product> = self.get_json("/products").await?;
        log::info!("📦 {} productos obtenidos", products.len());
        Ok(products)
    }

    pub async fn register_distribution_point(
        &self,
        data: &RegisterDistributionPointData,
    ) -> Result<DistributionPoint, String> {
        log::info!("📝 Registrando punto de distribución: {}", data.nome);
        self.post_json("/create_distribution_point", data).await
    }

    pub async fn fetch_distribution_points(&self) -> Result<Vec<DistributionPoint>, String> {
        self.get_json("/distribution_points").await
    }

    pub async fn register_driver(&self, data: &RegisterDriverData) -> Result<Driver, String> {
        log::info!("📝 Registrando motorista: {}", data.nome);
        self.post_json("/create_driver", data).await
    }

    pub async fn fetch_drivers(&self) -> Result<Vec<Driver>, String> {
        self.get_json("/drivers").await
    }

    pub async fn register_vehicle(&self, data: &RegisterVehicleData) -> Result<Vehicle, String> {
        log::info!("📝 Registrando vehículo: {}", data.placa);
        self.post_json("/create_vehicle", data).await
    }

    pub async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, String> {
        self.get_json("/vehicles").await
    }

    /// Detalle de seguimiento de la entrega de un producto
    pub async fn fetch_delivery(&self, product_id: i64) -> Result<DeliveryDetails, String> {
        log::info!("🚚 Obteniendo entrega del producto {}", product_id);
        self.get_json(&format!("/delivery/{}", product_id)).await
    }
}
