pub mod place;
pub mod route;
pub mod auth;
pub mod client;
pub mod product;
pub mod fleet;
pub mod distribution;
pub mod delivery;

pub use place::{AddressComponent, GeoPoint, PlaceDetails, PlaceSelection, ResolvedAddress, SessionToken, Suggestion};
pub use route::{DirectionsRequest, Route, RouteLeg, RouteSummary, TextValue, TravelMode, Waypoint};
pub use auth::{LoginResponse, Role, UserType};
pub use client::{Client, RegisterClientData};
pub use product::{Product, RegisterProductData};
pub use fleet::{Driver, RegisterDriverData, RegisterVehicleData, Vehicle};
pub use distribution::{DistributionPoint, RegisterDistributionPointData};
pub use delivery::{Delivery, DeliveryDetails, DeliveryStatus, RouteEndpoints};
