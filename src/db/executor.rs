use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use tracing::{debug, error};

use crate::errors::StoreError;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed pool of worker threads that runs database writes off the caller's
/// thread. Jobs are fire-and-forget; [`WriteExecutor::wait_idle`] lets a caller
/// block until everything queued so far has run.
pub struct WriteExecutor {
    sender: Mutex<Sender<Job>>,
    pending: Arc<Pending>,
    workers: usize,
}

#[derive(Default)]
struct Pending {
    count: Mutex<usize>,
    idle: Condvar,
}

impl Pending {
    fn finish(&self) {
        if let Ok(mut count) = self.count.lock() {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.idle.notify_all();
            }
        }
    }
}

impl WriteExecutor {
    pub fn new(workers: usize) -> Result<Self, StoreError> {
        if workers == 0 {
            return Err(StoreError::Executor("pool needs at least one worker".into()));
        }

        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));
        let pending = Arc::new(Pending::default());

        for i in 0..workers {
            let receiver = Arc::clone(&receiver);
            let pending = Arc::clone(&pending);
            thread::Builder::new()
                .name(format!("estate-writer-{i}"))
                .spawn(move || worker_loop(&receiver, &pending))
                .map_err(|e| StoreError::Executor(format!("spawn worker {i}: {e}")))?;
        }

        Ok(Self {
            sender: Mutex::new(sender),
            pending,
            workers,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Queues `job` for one of the workers.
    pub fn execute<F>(&self, job: F) -> Result<(), StoreError>
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut count = self.pending.count.lock().map_err(|_| StoreError::Poisoned)?;
            *count += 1;
        }

        let sent = self
            .sender
            .lock()
            .map_err(|_| StoreError::Poisoned)
            .and_then(|sender| {
                sender
                    .send(Box::new(job))
                    .map_err(|_| StoreError::Executor("all workers have stopped".into()))
            });

        if sent.is_err() {
            self.pending.finish();
        }
        sent
    }

    /// Blocks until every job queued before this call has finished.
    pub fn wait_idle(&self) -> Result<(), StoreError> {
        let mut count = self.pending.count.lock().map_err(|_| StoreError::Poisoned)?;
        while *count > 0 {
            count = self
                .pending
                .idle
                .wait(count)
                .map_err(|_| StoreError::Poisoned)?;
        }
        Ok(())
    }
}

fn worker_loop(receiver: &Mutex<Receiver<Job>>, pending: &Pending) {
    loop {
        // Hold the receiver lock only while waiting for the next job.
        let job = match receiver.lock() {
            Ok(rx) => rx.recv(),
            Err(_) => break,
        };

        let Ok(job) = job else {
            debug!("write executor channel closed, worker exiting");
            break;
        };

        if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
            error!("write job panicked");
        }
        pending.finish();
    }
}
