// Páginas de la app (una por ruta)

pub mod login_view;
pub mod admin_view;
pub mod register_client_view;
pub mod register_vehicle_view;
pub mod register_product_view;
pub mod product_list_view;
pub mod track_delivery_view;

pub use login_view::LoginView;
pub use admin_view::AdminView;
pub use register_client_view::RegisterClientView;
pub use register_vehicle_view::RegisterVehicleView;
pub use register_product_view::RegisterProductView;
pub use product_list_view::ProductListView;
pub use track_delivery_view::TrackDeliveryView;
