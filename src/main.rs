use real_estate_manager::config::Config;
use real_estate_manager::db::get_database;
use real_estate_manager::domain::Estate;
use real_estate_manager::geocoder::{GeocodeRequest, GeocoderClient};
use real_estate_manager::staticmap::{static_map_url, DEFAULT_LONLAT, THUMBNAIL_SIZE};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // 1️⃣ Open (and on first run, seed) the local store
    let db = match get_database(&config.context()) {
        Ok(db) => db,
        Err(e) => {
            error!("failed to open estate database: {e}");
            std::process::exit(1);
        }
    };
    info!(path = %db.path().display(), "estate database ready");

    // 2️⃣ The seed runs in the background; let it land before listing
    if let Err(e) = db.wait_for_pending_writes() {
        warn!("could not wait for background writes: {e}");
    }

    let estates = match db.estate_dao().get_all() {
        Ok(estates) => estates,
        Err(e) => {
            error!("failed to read estates: {e}");
            std::process::exit(1);
        }
    };

    for estate in &estates {
        println!(
            "#{:<3} {:<10} {:<14} {:>14}",
            estate.id,
            estate.estate_type,
            estate.district,
            estate.formatted_price()
        );
    }

    // 3️⃣ Detail of the first listing, with its map pin
    let Some(selected) = estates.first() else {
        println!("No estates stored.");
        return;
    };
    print_detail(selected);

    let lonlat = locate(&config, selected).unwrap_or_else(|| DEFAULT_LONLAT.to_string());
    println!(
        "Map: {}",
        static_map_url(THUMBNAIL_SIZE, THUMBNAIL_SIZE, &lonlat, &config.geoapify_key)
    );
}

fn print_detail(estate: &Estate) {
    println!();
    println!("{} in {}", estate.estate_type, estate.district);
    if let Some(thumbnail) = estate.thumbnail() {
        println!("Photo: {} ({})", thumbnail.caption, thumbnail.uri);
    }
    println!("{}", estate.description);
    println!("Surface: {}", estate.surface);
    println!("Number of rooms: {}", estate.number_of_rooms);
    println!("Number of bathrooms: {}", estate.number_of_bathrooms);
    println!("Number of bedrooms: {}", estate.number_of_bedrooms);
    println!("Location: {}", estate.address);
}

/// Resolves the listing's address to `"LON,LAT"` when a maps key is set.
fn locate(config: &Config, estate: &Estate) -> Option<String> {
    config.google_maps_key.as_ref()?;

    let client = match GeocoderClient::shared(config) {
        Ok(client) => client,
        Err(e) => {
            warn!("geocoder unavailable: {e}");
            return None;
        }
    };

    match client.geocode(&GeocodeRequest::address(estate.address.as_str())) {
        Ok(location) => location.lonlat(),
        Err(e) => {
            warn!("geocoding '{}' failed: {e}", estate.address);
            None
        }
    }
}
