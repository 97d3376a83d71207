use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tracing::{error, info};

use crate::config::AppContext;
use crate::db::connection::Database;
use crate::db::estates::EstateDao;
use crate::db::executor::WriteExecutor;
use crate::db::seed;
use crate::domain::Estate;
use crate::errors::StoreError;

/// File name of the local store inside the application's data directory.
pub const DATABASE_NAME: &str = "realEstateOffline.SQLite.db";

/// Size of the write executor owned by every store handle.
pub const NUMBER_OF_THREADS: usize = 4;

/// Hooks run while a database is being built.
pub trait DatabaseCallback: Send + Sync {
    /// Runs once, when the file did not hold a schema before this open.
    fn on_create(&self, _db: &Arc<EstateDatabase>) -> Result<(), StoreError> {
        Ok(())
    }

    /// Runs on every open, after `on_create`.
    fn on_open(&self, _db: &Arc<EstateDatabase>) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Handle to the local estate store: the shared connection plus the executor
/// used for background writes.
pub struct EstateDatabase {
    db: Database,
    executor: WriteExecutor,
}

impl EstateDatabase {
    pub fn builder(path: impl Into<PathBuf>) -> EstateDatabaseBuilder {
        EstateDatabaseBuilder {
            path: path.into(),
            callbacks: Vec::new(),
            write_threads: NUMBER_OF_THREADS,
        }
    }

    pub fn estate_dao(&self) -> EstateDao<'_> {
        EstateDao::new(&self.db)
    }

    pub fn write_executor(&self) -> &WriteExecutor {
        &self.executor
    }

    pub fn path(&self) -> &Path {
        self.db.path()
    }

    /// Queues an insert on the write executor and returns immediately.
    pub fn insert_in_background(self: &Arc<Self>, estates: Vec<Estate>) -> Result<(), StoreError> {
        let db = Arc::clone(self);
        self.executor.execute(move || match db.estate_dao().insert(&estates) {
            Ok(ids) => info!(count = ids.len(), "background insert finished"),
            Err(e) => error!("background insert failed: {e}"),
        })
    }

    /// Blocks until every background write queued so far has completed.
    pub fn wait_for_pending_writes(&self) -> Result<(), StoreError> {
        self.executor.wait_idle()
    }
}

pub struct EstateDatabaseBuilder {
    path: PathBuf,
    callbacks: Vec<Box<dyn DatabaseCallback>>,
    write_threads: usize,
}

impl EstateDatabaseBuilder {
    pub fn add_callback(mut self, callback: impl DatabaseCallback + 'static) -> Self {
        self.callbacks.push(Box::new(callback));
        self
    }

    pub fn write_threads(mut self, workers: usize) -> Self {
        self.write_threads = workers;
        self
    }

    pub fn build(self) -> Result<Arc<EstateDatabase>, StoreError> {
        let (db, created) = Database::open(self.path)?;
        let executor = WriteExecutor::new(self.write_threads)?;
        let database = Arc::new(EstateDatabase { db, executor });

        if created {
            for callback in &self.callbacks {
                callback.on_create(&database)?;
            }
        }
        for callback in &self.callbacks {
            callback.on_open(&database)?;
        }

        Ok(database)
    }
}

/// Queues the seed dataset when the database is created.
pub struct SeedOnCreate {
    estates: Vec<Estate>,
}

impl SeedOnCreate {
    pub fn new(estates: Vec<Estate>) -> Self {
        Self { estates }
    }
}

impl DatabaseCallback for SeedOnCreate {
    fn on_create(&self, db: &Arc<EstateDatabase>) -> Result<(), StoreError> {
        info!(count = self.estates.len(), path = %db.path().display(), "queueing seed dataset");
        db.insert_in_background(self.estates.clone())
    }
}

/// Lazily opens one store and hands the same handle to every caller.
///
/// The fast path reads the cell without locking; the first callers serialize
/// on the mutex and re-check before building, so only one store is ever
/// constructed. A failed build leaves the cell empty and the next caller
/// tries again from scratch.
pub struct StoreInitializer {
    instance: OnceLock<Arc<EstateDatabase>>,
    lock: Mutex<()>,
    seed: fn() -> Vec<Estate>,
}

impl StoreInitializer {
    pub const fn new() -> Self {
        Self::with_seed(seed::estate_list)
    }

    pub const fn with_seed(seed: fn() -> Vec<Estate>) -> Self {
        Self {
            instance: OnceLock::new(),
            lock: Mutex::new(()),
            seed,
        }
    }

    /// The handle, if a previous call already opened it.
    pub fn get(&self) -> Option<Arc<EstateDatabase>> {
        self.instance.get().cloned()
    }

    pub fn get_or_open(&self, context: &AppContext) -> Result<Arc<EstateDatabase>, StoreError> {
        if let Some(db) = self.instance.get() {
            return Ok(Arc::clone(db));
        }

        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        if let Some(db) = self.instance.get() {
            return Ok(Arc::clone(db));
        }

        let db = EstateDatabase::builder(context.database_path(DATABASE_NAME))
            .add_callback(SeedOnCreate::new((self.seed)()))
            .build()?;

        // Only the lock holder ever sets the cell.
        let _ = self.instance.set(Arc::clone(&db));
        Ok(db)
    }
}

impl Default for StoreInitializer {
    fn default() -> Self {
        Self::new()
    }
}

static INSTANCE: StoreInitializer = StoreInitializer::new();

/// Process-wide store handle. The first call opens (and, for a new file,
/// seeds) the database in `context`'s data directory; later calls return the
/// same handle regardless of the context passed.
pub fn get_database(context: &AppContext) -> Result<Arc<EstateDatabase>, StoreError> {
    INSTANCE.get_or_open(context)
}
