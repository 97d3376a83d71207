use crate::config::AppContext;
use crate::domain::{Estate, EstateType, Picture};
use astra::{Body, ResponseBuilder, Server};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Fresh data directory; the store file is created on first open.
pub fn temp_context() -> (TempDir, AppContext) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let context = AppContext::new(dir.path());
    (dir, context)
}

/// Small seed so tests can count rows exactly.
pub fn test_seed() -> Vec<Estate> {
    ["Chelsea", "Midtown", "Flatiron"]
        .iter()
        .enumerate()
        .map(|(i, district)| Estate {
            district: district.to_string(),
            estate_type: EstateType::Flat,
            description: format!("Test listing {i}"),
            price: 1_000_000 + i as i64,
            surface: 80.0,
            number_of_rooms: 3,
            number_of_bathrooms: 1,
            number_of_bedrooms: 2,
            address: format!("{i} Test Street"),
            pictures: vec![Picture::new("Main", format!("https://img.example/{i}.jpg"))],
            ..Estate::default()
        })
        .collect()
}

/// An address nothing is listening on.
pub fn closed_port_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    listener.local_addr().expect("probe addr")
}

/// Serves `body` with `status` for every request on a local port. Returns the
/// base URL to point a client at and a receiver yielding each request URI.
pub fn spawn_geocode_server(status: u16, body: &str) -> (String, Receiver<String>) {
    let addr = closed_port_addr();
    let body = body.to_string();
    let (tx, rx) = mpsc::channel();
    let tx = Mutex::new(tx);

    thread::spawn(move || {
        let _ = Server::bind(&addr).serve(move |req: astra::Request, _info| {
            if let Ok(tx) = tx.lock() {
                let _ = tx.send(req.uri().to_string());
            }
            ResponseBuilder::new()
                .status(status)
                .header("Content-Type", "application/json")
                .body(Body::from(body.clone()))
                .unwrap()
        });
    });

    for _ in 0..100 {
        if TcpStream::connect(addr).is_ok() {
            break;
        }
        thread::sleep(Duration::from_millis(20));
    }

    (format!("http://{addr}/maps/"), rx)
}
