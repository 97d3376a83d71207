mod client;
mod geocoder_error;
mod models;

pub use client::{decode_location, GeocoderClient, BASE_URL};
pub use geocoder_error::GeocodeError;
pub use models::{GeocodeRequest, Location};
