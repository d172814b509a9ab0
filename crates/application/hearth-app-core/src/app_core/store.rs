use std::sync::{Arc, Mutex};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Snapshot store with synchronous change notification.
///
/// All propagation happens on the mutating caller's stack; there are no
/// background tasks and no buffering. Listeners are cloned out of their lock
/// before being invoked, so a listener may itself publish to another store.
pub struct Store<T> {
    value: Arc<Mutex<T>>,
    listeners: Arc<Mutex<Vec<Listener<T>>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T: Clone> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get(&self) -> T {
        self.value.lock().unwrap().clone()
    }

    pub fn set(&self, next: T) {
        let snapshot = {
            let mut guard = self.value.lock().unwrap();
            *guard = next;
            guard.clone()
        };
        self.notify(&snapshot);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut guard = self.value.lock().unwrap();
            f(&mut guard);
            guard.clone()
        };
        self.notify(&snapshot);
    }

    /// Re-deliver the current value unchanged.
    pub fn push_current(&self) {
        let snapshot = self.get();
        self.notify(&snapshot);
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) {
        self.listeners.lock().unwrap().push(Arc::new(listener));
    }

    fn notify(&self, snapshot: &T) {
        let listeners: Vec<Listener<T>> = self.listeners.lock().unwrap().clone();
        for listener in &listeners {
            listener(snapshot);
        }
    }
}

/// Derive a store from two upstream stores through a pure combination
/// function, re-invoked on every change to either input. The initial value is
/// computed eagerly at construction.
pub fn combine_latest<A, B, O>(
    a: &Store<A>,
    b: &Store<B>,
    combine: impl Fn(&A, &B) -> O + Send + Sync + 'static,
) -> Store<O>
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    O: Clone + Send + Sync + 'static,
{
    let combine = Arc::new(combine);
    let out = Store::new(combine(&a.get(), &b.get()));

    {
        let b = b.clone();
        let out = out.clone();
        let combine = Arc::clone(&combine);
        a.subscribe(move |a_value| out.set(combine(a_value, &b.get())));
    }
    {
        let a = a.clone();
        let out = out.clone();
        b.subscribe(move |b_value| out.set(combine(&a.get(), b_value)));
    }

    out
}
