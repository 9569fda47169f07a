
use crate::*;
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc, Mutex,
};

fn bump(counter: Arc<AtomicU32>, amount: u32) -> u32 {
    counter.fetch_add(amount, Ordering::Relaxed) + amount
}

#[derive(Default)]
struct Widget {
    pokes: AtomicU32,
    log: Mutex<Vec<String>>,
}

impl Widget {
    fn poke(&self) {
        self.pokes.fetch_add(1, Ordering::Relaxed);
    }

    fn record(&self, line: String) -> usize {
        let mut log = self.log.lock().unwrap();
        log.push(line);
        log.len()
    }

    fn adjust(&self, base: u32, scale: u32, offset: u32) {
        self.pokes.fetch_add(base * scale + offset, Ordering::Relaxed);
    }
}

#[test]
fn free_function_with_args() {
    let counter = Arc::new(AtomicU32::new(0));
    let cb = bind(bump, (Arc::clone(&counter), 5));
    assert_eq!(counter.load(Ordering::Relaxed), 0);
    cb.invoke();
    assert_eq!(counter.load(Ordering::Relaxed), 5);
    // replay: same bound values, independent second call
    cb.invoke();
    assert_eq!(counter.load(Ordering::Relaxed), 10);
}

#[test]
fn zero_argument_closure() {
    let counter = Arc::new(AtomicU32::new(0));
    let cb = bind(
        {
            let counter = Arc::clone(&counter);
            move || {
                counter.fetch_add(1, Ordering::Relaxed);
            }
        },
        (),
    );
    assert_eq!(counter.load(Ordering::Relaxed), 0);
    cb.invoke();
    assert_eq!(counter.load(Ordering::Relaxed), 1);
}

#[test]
fn member_replays_identical_args() {
    let widget = Arc::new(Widget::default());
    let cb = bind_method(
        Arc::clone(&widget),
        Widget::record,
        ("ping".to_string(),),
    );
    cb.invoke();
    cb.invoke();
    assert_eq!(
        *widget.log.lock().unwrap(),
        vec!["ping".to_string(), "ping".to_string()],
    );
}

#[test]
fn member_with_three_bound_args() {
    let widget = Arc::new(Widget::default());
    let cb = bind_method(Arc::clone(&widget), Widget::adjust, (2, 10, 1));
    cb.invoke();
    assert_eq!(widget.pokes.load(Ordering::Relaxed), 21);
}

#[test]
fn member_keeps_receiver_alive() {
    let widget = Arc::new(Widget::default());
    let weak = Arc::downgrade(&widget);
    let cb = bind_method(widget, Widget::poke, ());
    // the callback now holds the only strong reference
    cb.invoke();
    assert_eq!(weak.upgrade().unwrap().pokes.load(Ordering::Relaxed), 1);
    drop(cb);
    assert!(weak.upgrade().is_none());
}

#[test]
fn shape_selects_distinct_variants() {
    let free = bind(|| {}, ());
    let widget = Arc::new(Widget::default());
    let bound = bind_method(widget, Widget::poke, ());
    assert_eq!(format!("{:?}", free), "FnCallback");
    assert_eq!(format!("{:?}", bound), "MemberCallback");
}

#[test]
fn try_bind_method_checks_receiver_at_bind_time() {
    let widget = Arc::new(Widget::default());
    let cb = try_bind_method(Arc::downgrade(&widget), Widget::poke, ()).unwrap();
    cb.invoke();
    assert_eq!(widget.pokes.load(Ordering::Relaxed), 1);

    let weak = Arc::downgrade(&widget);
    drop(widget);
    drop(cb);
    let err = try_bind_method(weak, Widget::poke, ()).unwrap_err();
    assert!(matches!(err, BindError::ReceiverDropped));
}

#[test]
fn captured_state_drops_with_last_handle() {
    let counter = Arc::new(AtomicU32::new(0));
    let cb = bind(
        {
            struct DropGuardThing(Arc<AtomicU32>);
            impl Drop for DropGuardThing {
                fn drop(&mut self) {
                    self.0.fetch_add(100, Ordering::Relaxed);
                }
            }
            let dgt = DropGuardThing(Arc::clone(&counter));
            move || {
                dgt.0.fetch_add(1, Ordering::Relaxed);
            }
        },
        (),
    );
    let cb2 = Arc::clone(&cb);
    cb.invoke();
    cb2.invoke();
    assert_eq!(counter.load(Ordering::Relaxed), 2);
    drop(cb);
    assert_eq!(counter.load(Ordering::Relaxed), 2);
    drop(cb2);
    assert_eq!(counter.load(Ordering::Relaxed), 102);
}

#[test]
fn concurrent_invocations_share_one_receiver() {
    let widget = Arc::new(Widget::default());
    let cb = bind_method(Arc::clone(&widget), Widget::poke, ());
    crossbeam::thread::scope(|s| {
        for _ in 0..4 {
            let cb = Arc::clone(&cb);
            s.spawn(move |_| {
                for _ in 0..100 {
                    cb.invoke();
                }
            });
        }
    })
    .unwrap();
    assert_eq!(widget.pokes.load(Ordering::Relaxed), 400);
}
