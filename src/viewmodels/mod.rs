pub mod place_resolver;
pub mod route_selector;
pub mod form_validation;

pub use place_resolver::{DetailsTicket, KeyOutcome, NavigationKey, PlaceResolver, PredictionTicket};
pub use route_selector::{PendingRoute, RouteReport, RouteSelectionError, RouteSelector, RouteState};
pub use form_validation::FieldErrors;
