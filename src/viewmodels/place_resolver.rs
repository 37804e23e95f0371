// ============================================================================
// PLACE RESOLVER - Autocompletado de direcciones (sin IO)
// ============================================================================
// Texto libre → lista de sugerencias → detalle → dirección estructurada.
// Cada petición sale con un ticket numerado; solo se aplica la respuesta del
// ticket vigente, así el orden de llegada de la red no importa.
// ============================================================================

use crate::maps::ProviderError;
use crate::models::{PlaceDetails, PlaceSelection, ResolvedAddress, SessionToken, Suggestion};

/// Petición de predicciones pendiente
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTicket {
    pub seq: u64,
    pub query: String,
    pub session: SessionToken,
}

/// Petición de detalle pendiente
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsTicket {
    pub seq: u64,
    pub place_id: String,
    pub session: SessionToken,
    /// Consulta vigente al elegir; si el usuario sigue escribiendo, el detalle ya no vale
    pub query_seq: u64,
}

/// Teclas que entiende la lista de sugerencias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Down,
    Up,
    Enter,
    Escape,
    Other,
}

impl NavigationKey {
    /// A partir de `KeyboardEvent.key`
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => NavigationKey::Down,
            "ArrowUp" | "Up" => NavigationKey::Up,
            "Enter" => NavigationKey::Enter,
            "Escape" | "Esc" => NavigationKey::Escape,
            _ => NavigationKey::Other,
        }
    }
}

/// Resultado de una pulsación: si hay que cancelar el comportamiento por defecto
/// del input y, con Enter, el detalle a pedir.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub details: Option<DetailsTicket>,
}

#[derive(Debug, Clone)]
pub struct PlaceResolver {
    input: String,
    suggestions: Vec<Suggestion>,
    highlighted: Option<usize>,
    session: SessionToken,
    query_seq: u64,
    details_seq: u64,
}

impl PlaceResolver {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            suggestions: Vec::new(),
            highlighted: None,
            session: SessionToken::new(),
            query_seq: 0,
            details_seq: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn session(&self) -> SessionToken {
        self.session
    }

    /// Nuevo texto en el input. Vacío: limpia la lista y no pide nada.
    pub fn on_query_change(&mut self, text: &str) -> Option<PredictionTicket> {
        self.input = text.to_string();
        self.highlighted = None;
        // Cualquier respuesta en vuelo queda obsoleta a partir de aquí
        self.query_seq += 1;

        if text.is_empty() {
            self.suggestions.clear();
            return None;
        }

        Some(PredictionTicket {
            seq: self.query_seq,
            query: text.to_string(),
            session: self.session,
        })
    }

    /// ¿Sigue siendo este ticket el último emitido?
    pub fn is_current(&self, ticket: &PredictionTicket) -> bool {
        ticket.seq == self.query_seq
    }

    /// Aplica la respuesta de predicciones. Devuelve `false` si era obsoleta.
    pub fn apply_predictions(
        &mut self,
        ticket: &PredictionTicket,
        result: Result<Vec<Suggestion>, ProviderError>,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "⏭️ [PLACES] Respuesta obsoleta descartada (seq {} < {})",
                ticket.seq,
                self.query_seq
            );
            return false;
        }

        match result {
            Ok(predictions) if !predictions.is_empty() => {
                self.suggestions = predictions;
            }
            Ok(_) => {
                self.suggestions.clear();
            }
            Err(e) => {
                log::warn!("⚠️ [PLACES] Predicciones fallidas para '{}': {}", ticket.query, e);
                self.suggestions.clear();
            }
        }
        self.highlighted = None;
        true
    }

    /// El usuario elige una sugerencia (click o Enter)
    pub fn on_suggestion_activate(&mut self, place_id: &str) -> DetailsTicket {
        self.details_seq += 1;
        DetailsTicket {
            seq: self.details_seq,
            place_id: place_id.to_string(),
            session: self.session,
            query_seq: self.query_seq,
        }
    }

    /// Aplica el detalle del lugar. Si falla, nada cambia.
    pub fn apply_details(
        &mut self,
        ticket: &DetailsTicket,
        result: Result<PlaceDetails, ProviderError>,
    ) -> Option<PlaceSelection> {
        if ticket.seq != self.details_seq
            || ticket.session != self.session
            || ticket.query_seq != self.query_seq
        {
            log::debug!("⏭️ [PLACES] Detalle obsoleto descartado ({})", ticket.place_id);
            return None;
        }

        let details = match result {
            Ok(details) => details,
            Err(e) => {
                log::warn!("⚠️ [PLACES] Detalle fallido para {}: {}", ticket.place_id, e);
                return None;
            }
        };

        let address = ResolvedAddress::from_components(&details.address_components);
        let formatted_address = details.formatted_address.unwrap_or_default();

        self.input = formatted_address.clone();
        self.suggestions.clear();
        self.highlighted = None;
        // El input cambió por programa: predicciones en vuelo ya no aplican
        self.query_seq += 1;
        self.session = SessionToken::new();

        log::info!("📍 [PLACES] Dirección resuelta: {}", formatted_address);

        Some(PlaceSelection::Resolved {
            address,
            formatted_address,
            location: details.location,
        })
    }

    /// Navegación por teclado sobre la lista
    pub fn on_key(&mut self, key: NavigationKey) -> KeyOutcome {
        let len = self.suggestions.len();

        match key {
            NavigationKey::Down => {
                if len > 0 {
                    self.highlighted = Some(match self.highlighted {
                        None => 0,
                        Some(i) => (i + 1).min(len - 1),
                    });
                }
                KeyOutcome {
                    prevent_default: true,
                    details: None,
                }
            }
            NavigationKey::Up => {
                if let Some(i) = self.highlighted {
                    self.highlighted = Some(i.saturating_sub(1));
                }
                KeyOutcome {
                    prevent_default: true,
                    details: None,
                }
            }
            NavigationKey::Enter => {
                let details = self
                    .highlighted
                    .and_then(|i| self.suggestions.get(i))
                    .map(|s| s.id.clone())
                    .map(|id| self.on_suggestion_activate(&id));
                KeyOutcome {
                    prevent_default: true,
                    details,
                }
            }
            NavigationKey::Escape => {
                self.suggestions.clear();
                self.highlighted = None;
                self.query_seq += 1;
                KeyOutcome::default()
            }
            NavigationKey::Other => KeyOutcome::default(),
        }
    }

    /// "Ningún lugar": vacía todo y avisa al formulario
    pub fn clear(&mut self) -> PlaceSelection {
        self.input.clear();
        self.suggestions.clear();
        self.highlighted = None;
        self.query_seq += 1;
        PlaceSelection::Cleared
    }
}

impl Default for PlaceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressComponent;

    fn suggestions(labels: &[&str]) -> Vec<Suggestion> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| Suggestion {
                id: format!("place-{}", i),
                label: label.to_string(),
            })
            .collect()
    }

    fn resolver_with(labels: &[&str]) -> PlaceResolver {
        let mut resolver = PlaceResolver::new();
        let ticket = resolver.on_query_change("Rua").unwrap();
        assert!(resolver.apply_predictions(&ticket, Ok(suggestions(labels))));
        resolver
    }

    fn details() -> PlaceDetails {
        let component = |name: &str, tag: &str| AddressComponent {
            long_name: name.to_string(),
            short_name: name.to_string(),
            types: vec![tag.to_string()],
        };
        PlaceDetails {
            address_components: vec![
                component("Rua A", "route"),
                component("42", "street_number"),
                component("Centro", "sublocality"),
            ],
            formatted_address: Some("Rua A, 42 - Centro, Bauru - SP".to_string()),
            location: None,
        }
    }

    #[test]
    fn newer_query_wins_over_late_older_response() {
        let mut resolver = PlaceResolver::new();
        let first = resolver.on_query_change("Rua").unwrap();
        let second = resolver.on_query_change("Rua A").unwrap();

        assert!(resolver.apply_predictions(&second, Ok(suggestions(&["Rua A, Bauru"]))));
        assert!(!resolver.apply_predictions(&first, Ok(suggestions(&["Rua B", "Rua C"]))));

        assert_eq!(resolver.suggestions(), suggestions(&["Rua A, Bauru"]).as_slice());
    }

    #[test]
    fn older_response_arriving_first_is_still_discarded() {
        let mut resolver = PlaceResolver::new();
        let first = resolver.on_query_change("Av").unwrap();
        let second = resolver.on_query_change("Av Nações").unwrap();

        assert!(!resolver.apply_predictions(&first, Ok(suggestions(&["Av Paulista"]))));
        assert!(resolver.suggestions().is_empty());

        assert!(resolver.apply_predictions(&second, Ok(suggestions(&["Av Nações Unidas"]))));
        assert_eq!(resolver.suggestions()[0].label, "Av Nações Unidas");
    }

    #[test]
    fn empty_query_clears_synchronously_and_invalidates_in_flight() {
        let mut resolver = resolver_with(&["Rua A", "Rua B"]);
        let pending = resolver.on_query_change("Rua C").unwrap();

        assert_eq!(resolver.on_query_change(""), None);
        assert!(resolver.suggestions().is_empty());

        assert!(!resolver.apply_predictions(&pending, Ok(suggestions(&["Rua C"]))));
        assert!(resolver.suggestions().is_empty());
    }

    #[test]
    fn non_ok_status_or_zero_results_clear_the_list() {
        let mut resolver = resolver_with(&["Rua A"]);
        let ticket = resolver.on_query_change("xyz").unwrap();
        assert!(resolver.apply_predictions(&ticket, Err(ProviderError::NoResults)));
        assert!(resolver.suggestions().is_empty());

        let mut resolver = resolver_with(&["Rua A"]);
        let ticket = resolver.on_query_change("xyz").unwrap();
        assert!(resolver.apply_predictions(&ticket, Ok(Vec::new())));
        assert!(resolver.suggestions().is_empty());
    }

    #[test]
    fn down_clamps_at_last_index() {
        for presses in 0..6 {
            let mut resolver = resolver_with(&["a", "b", "c"]);
            for _ in 0..presses {
                assert!(resolver.on_key(NavigationKey::Down).prevent_default);
            }
            let expected = if presses == 0 { None } else { Some((presses - 1).min(2)) };
            assert_eq!(resolver.highlighted(), expected, "after {} presses", presses);
        }
    }

    #[test]
    fn up_never_goes_below_zero() {
        let mut resolver = resolver_with(&["a", "b"]);
        resolver.on_key(NavigationKey::Down);
        assert_eq!(resolver.highlighted(), Some(0));

        assert!(resolver.on_key(NavigationKey::Up).prevent_default);
        assert_eq!(resolver.highlighted(), Some(0));
    }

    #[test]
    fn down_on_empty_list_highlights_nothing() {
        let mut resolver = PlaceResolver::new();
        resolver.on_key(NavigationKey::Down);
        assert_eq!(resolver.highlighted(), None);
    }

    #[test]
    fn enter_without_highlight_is_a_no_op() {
        let mut resolver = resolver_with(&["a", "b"]);
        let outcome = resolver.on_key(NavigationKey::Enter);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.details, None);
    }

    #[test]
    fn enter_activates_highlighted_suggestion() {
        let mut resolver = resolver_with(&["a", "b", "c"]);
        resolver.on_key(NavigationKey::Down);
        resolver.on_key(NavigationKey::Down);

        let ticket = resolver.on_key(NavigationKey::Enter).details.unwrap();
        assert_eq!(ticket.place_id, "place-1");
        assert_eq!(ticket.session, resolver.session());
    }

    #[test]
    fn successful_details_clear_list_set_text_and_rotate_session() {
        let mut resolver = resolver_with(&["Rua A, 42"]);
        let before = resolver.session();
        let ticket = resolver.on_suggestion_activate("place-0");

        let selection = resolver.apply_details(&ticket, Ok(details())).unwrap();

        assert!(resolver.suggestions().is_empty());
        assert_eq!(resolver.input(), "Rua A, 42 - Centro, Bauru - SP");
        assert_ne!(resolver.session(), before);
        assert_eq!(
            selection,
            PlaceSelection::Resolved {
                address: ResolvedAddress {
                    street: Some("Rua A".to_string()),
                    neighborhood: Some("Centro".to_string()),
                    street_number: Some(42),
                },
                formatted_address: "Rua A, 42 - Centro, Bauru - SP".to_string(),
                location: None,
            }
        );
    }

    #[test]
    fn session_is_never_reused_across_two_resolutions() {
        let mut resolver = PlaceResolver::new();
        let mut seen = vec![resolver.session()];

        for _ in 0..3 {
            let ticket = resolver.on_suggestion_activate("place-0");
            assert!(resolver.apply_details(&ticket, Ok(details())).is_some());
            assert!(!seen.contains(&resolver.session()));
            seen.push(resolver.session());
        }
    }

    #[test]
    fn failed_details_leave_state_untouched() {
        let mut resolver = resolver_with(&["Rua A"]);
        let session = resolver.session();
        let ticket = resolver.on_suggestion_activate("place-0");

        assert_eq!(resolver.apply_details(&ticket, Err(ProviderError::Status("UNKNOWN_ERROR".into()))), None);
        assert_eq!(resolver.suggestions().len(), 1);
        assert_eq!(resolver.input(), "Rua");
        assert_eq!(resolver.session(), session);
    }

    #[test]
    fn superseded_details_request_is_ignored() {
        let mut resolver = resolver_with(&["Rua A", "Rua B"]);
        let first = resolver.on_suggestion_activate("place-0");
        let second = resolver.on_suggestion_activate("place-1");

        assert_eq!(resolver.apply_details(&first, Ok(details())), None);
        assert!(resolver.apply_details(&second, Ok(details())).is_some());
    }

    #[test]
    fn details_arriving_after_new_typing_are_discarded() {
        let mut resolver = resolver_with(&["Rua A"]);
        let ticket = resolver.on_suggestion_activate("place-0");

        let query = resolver.on_query_change("Avenida Brasil").unwrap();
        assert!(resolver.apply_predictions(&query, Ok(suggestions(&["Avenida Brasil, Bauru"]))));

        assert_eq!(resolver.apply_details(&ticket, Ok(details())), None);
        assert_eq!(resolver.input(), "Avenida Brasil");
        assert_eq!(resolver.suggestions(), suggestions(&["Avenida Brasil, Bauru"]).as_slice());
    }

    #[test]
    fn predictions_in_flight_do_not_reopen_list_after_resolution() {
        let mut resolver = resolver_with(&["Rua A"]);
        let pending = resolver.on_query_change("Rua A, 4").unwrap();
        let ticket = resolver.on_suggestion_activate("place-0");
        resolver.apply_details(&ticket, Ok(details()));

        assert!(!resolver.apply_predictions(&pending, Ok(suggestions(&["Rua A, 40"]))));
        assert!(resolver.suggestions().is_empty());
    }

    #[test]
    fn clear_emits_cleared_signal() {
        let mut resolver = resolver_with(&["Rua A"]);
        assert_eq!(resolver.clear(), PlaceSelection::Cleared);
        assert_eq!(resolver.input(), "");
        assert!(resolver.suggestions().is_empty());
    }

    #[test]
    fn escape_closes_list() {
        let mut resolver = resolver_with(&["Rua A"]);
        resolver.on_key(NavigationKey::Down);
        let outcome = resolver.on_key(NavigationKey::Escape);
        assert!(!outcome.prevent_default);
        assert!(resolver.suggestions().is_empty());
        assert_eq!(resolver.highlighted(), None);
    }

    #[test]
    fn key_names_map_to_navigation() {
        assert_eq!(NavigationKey::from_key("ArrowDown"), NavigationKey::Down);
        assert_eq!(NavigationKey::from_key("ArrowUp"), NavigationKey::Up);
        assert_eq!(NavigationKey::from_key("Enter"), NavigationKey::Enter);
        assert_eq!(NavigationKey::from_key("a"), NavigationKey::Other);
    }
}
