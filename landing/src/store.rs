use sycamore::{
    prelude::*,
    reactive::{provide_context, use_context},
};

/// Starting value of a freshly created counter.
pub const DEFAULT_COUNT: i32 = 0;

/// Shared state container provided to every widget below a mount point.
///
/// One `Store` is created per `mount` call and lives exactly as long as the
/// mounted widget tree, it is never shared across mounts.
pub struct Store {
    counter: CounterStore,
}

impl Store {
    fn new() -> Self {
        Self {
            counter: CounterStore::new(),
        }
    }

    pub fn counter(&self) -> &CounterStore {
        &self.counter
    }
}

pub fn provide_store(cx: Scope) {
    provide_context(cx, Store::new());
}

pub fn use_store(cx: Scope) -> &Store {
    use_context::<Store>(cx)
}

/// Centralized, reactive counter state.
///
/// Clones are handles to the same underlying signal, reading [`count`]
/// inside a memo, effect or view registers the usual reactive dependency.
///
/// [`count`]: Self::count
#[derive(Clone)]
pub struct CounterStore {
    count: RcSignal<i32>,
}

impl CounterStore {
    fn new() -> Self {
        Self {
            count: create_rc_signal(DEFAULT_COUNT),
        }
    }

    pub fn count(&self) -> i32 {
        *self.count.get()
    }

    pub fn doubled(&self) -> i32 {
        self.count() * 2
    }

    pub fn increment(&self) {
        self.count.set(*self.count.get() + 1);
    }

    pub fn decrement(&self) {
        self.count.set(*self.count.get() - 1);
    }

    pub fn reset(&self) {
        self.count.set(DEFAULT_COUNT);
    }
}
