pub mod connection;
pub mod database;
pub mod estates;
pub mod executor;
pub mod seed;

pub use database::{
    get_database, DatabaseCallback, EstateDatabase, StoreInitializer, DATABASE_NAME,
    NUMBER_OF_THREADS,
};
pub use estates::EstateDao;
