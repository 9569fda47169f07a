//! Example of draining heterogeneous callbacks through one queue. Producers
//! bind free functions, closures, and receiver methods into uniform handles
//! and push them onto a crossbeam `SegQueue`; a blocking consumer drains the
//! queue parked on a crossbeam `Parker`, then an async consumer does the
//! same woken by a tokio `Notify`. The producer drops its own reference to
//! the audit log right after binding, so the queued callbacks are what keep
//! the log alive until they run.

use callback_bind::{bind, bind_method, Callback, CallbackHandle};
use crossbeam::{queue::SegQueue, sync::Parker};
use std::{
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};
use tokio::{runtime::Runtime, sync::Notify};

#[derive(Default)]
struct AuditLog {
    lines: Mutex<Vec<String>>,
}

impl AuditLog {
    fn append(&self, line: String) {
        let mut lines = self.lines.lock().unwrap();
        lines.push(line);
        println!("audit entry {}: {}", lines.len(), lines.last().unwrap());
    }
}

fn announce(round: u32) {
    println!("announce: round {}", round);
}

fn main() {
    let queue = Arc::new(SegQueue::<CallbackHandle>::new());

    // blocking phase: a producer thread binds work while the main thread
    // drains it, parking whenever the queue runs dry
    let parker = Parker::new();
    let unparker = parker.unparker().clone();
    {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let log = Arc::new(AuditLog::default());
            for i in 0..5 {
                queue.push(bind(announce, (i,)));
                queue.push(bind_method(
                    Arc::clone(&log),
                    AuditLog::append,
                    (format!("blocking round {}", i),),
                ));
                unparker.unpark();
                thread::sleep(Duration::from_millis(50));
            }
            // `log` goes out of scope here; the queued callbacks keep it alive
        });
    }
    let mut drained = 0;
    while drained < 10 {
        match queue.pop() {
            Some(callback) => {
                callback.invoke();
                drained += 1;
            }
            None => parker.park(),
        }
    }

    println!("entering tokio runtime");
    Runtime::new().unwrap().block_on(async move {
        let notify_1 = Arc::new(Notify::new());
        {
            let queue = Arc::clone(&queue);
            let notify_2 = Arc::clone(&notify_1);
            tokio::spawn(async move {
                let log = Arc::new(AuditLog::default());
                for i in 0..5 {
                    queue.push(bind_method(
                        Arc::clone(&log),
                        AuditLog::append,
                        (format!("async round {}", i),),
                    ));
                    notify_2.notify_one();
                }
            });
        }
        let mut drained = 0;
        while drained < 5 {
            match queue.pop() {
                Some(callback) => {
                    callback.invoke();
                    drained += 1;
                }
                None => notify_1.notified().await,
            }
        }
    });
}
