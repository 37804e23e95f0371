pub mod address_autocomplete;
pub mod delivery_map;
pub mod route_guard;
pub mod login_screen;
pub mod page_header;
pub mod field_error;

pub use address_autocomplete::AddressAutocomplete;
pub use delivery_map::DeliveryMap;
pub use route_guard::PrivateRoute;
pub use login_screen::LoginScreen;
pub use page_header::PageHeader;
pub use field_error::FieldError;
