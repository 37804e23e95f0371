use serde::{Deserialize, Serialize};

/// Texto + valor numérico (metros / segundos) de una distancia o duración
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: f64,
}

/// Tramo origen→waypoint o waypoint→destino
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RouteLeg {
    #[serde(default)]
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

/// Ruta alternativa devuelta por el proveedor (inmutable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Route {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelMode {
    Driving,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: String,
    pub stopover: bool,
}

/// Petición de direcciones tal como la espera DirectionsService.route()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
    pub waypoints: Vec<Waypoint>,
    pub travel_mode: TravelMode,
    pub provide_route_alternatives: bool,
}

impl DirectionsRequest {
    /// Siempre en coche, con alternativas y el waypoint fijo de paso (sin parada)
    pub fn driving(origin: &str, destination: &str, waypoint: &str) -> Self {
        let waypoints = if waypoint.trim().is_empty() {
            Vec::new()
        } else {
            vec![Waypoint {
                location: waypoint.to_string(),
                stopover: false,
            }]
        };

        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            waypoints,
            travel_mode: TravelMode::Driving,
            provide_route_alternatives: true,
        }
    }
}

/// Resumen para la UI: nombre, distancia y duración del primer tramo
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteSummary {
    pub summary: String,
    pub distance: String,
    pub duration: String,
    pub total_distance_meters: f64,
    pub total_duration_seconds: f64,
}

impl RouteSummary {
    pub fn from_route(route: &Route) -> Self {
        let first_leg = route.legs.first();

        Self {
            summary: route.summary.clone(),
            distance: first_leg
                .and_then(|leg| leg.distance.as_ref())
                .map(|d| d.text.clone())
                .unwrap_or_default(),
            duration: first_leg
                .and_then(|leg| leg.duration.as_ref())
                .map(|d| d.text.clone())
                .unwrap_or_default(),
            total_distance_meters: route
                .legs
                .iter()
                .filter_map(|leg| leg.distance.as_ref())
                .map(|d| d.value)
                .sum(),
            total_duration_seconds: route
                .legs
                .iter()
                .filter_map(|leg| leg.duration.as_ref())
                .map(|d| d.value)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driving_request_serializes_for_directions_service() {
        let request = DirectionsRequest::driving("São Paulo, SP", "Bauru, SP", "Piracicaba, SP");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["travelMode"], "DRIVING");
        assert_eq!(json["provideRouteAlternatives"], true);
        assert_eq!(json["waypoints"][0]["location"], "Piracicaba, SP");
        assert_eq!(json["waypoints"][0]["stopover"], false);
    }

    #[test]
    fn blank_waypoint_is_omitted() {
        let request = DirectionsRequest::driving("A", "B", "  ");
        assert!(request.waypoints.is_empty());
    }

    #[test]
    fn summary_uses_first_leg_text_and_sums_totals() {
        let route: Route = serde_json::from_str(
            r#"{
                "summary": "SP-300",
                "legs": [
                    {"distance": {"text": "160 km", "value": 160000}, "duration": {"text": "2 h", "value": 7200}},
                    {"distance": {"text": "170 km", "value": 170000}, "duration": {"text": "2 h 10 min", "value": 7800}}
                ]
            }"#,
        )
        .unwrap();

        let summary = RouteSummary::from_route(&route);

        assert_eq!(summary.summary, "SP-300");
        assert_eq!(summary.distance, "160 km");
        assert_eq!(summary.duration, "2 h");
        assert_eq!(summary.total_distance_meters, 330000.0);
        assert_eq!(summary.total_duration_seconds, 15000.0);
    }

    #[test]
    fn summary_of_route_without_legs_is_empty_text() {
        let summary = RouteSummary::from_route(&Route {
            summary: "Rod. Castello Branco".to_string(),
            legs: Vec::new(),
        });
        assert_eq!(summary.distance, "");
        assert_eq!(summary.duration, "");
    }
}
