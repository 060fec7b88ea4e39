use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;

use log::{debug, error};

/// A basic thread pool with a constant number of threads.
pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: mpsc::Sender<Message>,
}

/// A job for a thread pool. The job may run on any thread, and will only be run once.
type Job = Box<dyn FnOnce() + Send + 'static>;

/// A message to a thread.
enum Message {
    /// A new job to run.
    NewJob(Job),
    /// Message to tell the thread to return.
    Terminate,
}

impl ThreadPool {
    /// Create a new ThreadPool.
    ///
    /// The size is the number of threads in the pool.
    ///
    /// # Panics
    ///
    /// The `new` function will panic if the size is zero.
    pub fn new(size: usize) -> ThreadPool {
        assert!(size > 0);

        let (sender, receiver) = mpsc::channel();

        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..size)
            .map(|id| new_worker(id, Arc::clone(&receiver)))
            .collect();

        ThreadPool { workers, sender }
    }

    /// Executes the given closure on a thread.
    /// Jobs queue up while every thread is busy.
    pub fn execute<F>(&self, f: F)
        where
            F: FnOnce() + Send + 'static,
    {
        if self.sender.send(Message::NewJob(Box::new(f))).is_err() {
            error!("thread pool has no live workers, dropping job");
        }
    }
}

impl Drop for ThreadPool {
    /// Sends the termination message to all threads in the thread pool and waits for them to return.
    /// Jobs already queued run before the threads see the termination message.
    fn drop(&mut self) {
        for _ in &self.workers {
            // a dead worker just means one fewer receiver
            let _ = self.sender.send(Message::Terminate);
        }

        for worker in &mut self.workers {
            if let Some(thread) = worker.take() {
                if thread.join().is_err() {
                    error!("worker thread panicked");
                }
            }
        }
    }
}

/// A worker, represented by a join handler if the thread is still running, or None.
type Worker = Option<thread::JoinHandle<()>>;

/// Creates a new worker with the given receiver end of an mpsc channel.
/// The worker will run until a Terminate message is sent to it through the channel.
fn new_worker(id: usize, receiver: Arc<Mutex<mpsc::Receiver<Message>>>) -> Worker {
    let thread = thread::spawn(move || loop {
        let message = match receiver.lock() {
            Ok(receiver) => receiver.recv(),
            Err(_) => break
        };

        match message {
            Ok(Message::NewJob(job)) => {
                // workers outlive panicking jobs
                if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                    error!("worker {} job panicked", id);
                }
            }
            Ok(Message::Terminate) | Err(_) => {
                debug!("worker {} stopping", id);
                break;
            }
        }
    });

    Some(thread)
}
