//! Offline core of the real estate manager: the local listing store, its
//! one-time initialization and seeding, the geocoding client and the static
//! map URL builder.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod geocoder;
pub mod staticmap;

#[cfg(test)]
mod tests;
