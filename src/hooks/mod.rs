pub mod use_session;
pub mod session_context;
pub mod use_navigator;
pub mod use_maps_ready;
pub mod use_place_resolver;
pub mod use_route_selector;

pub use use_session::{use_session, UseSessionHandle};
pub use session_context::{use_api_client, use_current_session, SessionContextProvider};
pub use use_navigator::{use_navigator, NavigatorProvider, UseNavigatorHandle};
pub use use_maps_ready::{use_maps_ready, MapsLibrary};
pub use use_place_resolver::{use_place_resolver, UsePlaceResolverHandle};
pub use use_route_selector::{use_route_selector, RouteStatus, UseRouteSelectorHandle};
