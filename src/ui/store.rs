//! State container that runs a reducer and notifies subscribers.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::mvi::{DecodeInstruction, Instruction, Reducer};

pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the state for one reducer.
///
/// A dispatch that [`Reducer::changes`] reports as a no-op leaves the state
/// alone and notifies nobody. Otherwise the state is replaced with the
/// reducer's output and every listener runs.
pub struct Store<R: Reducer> {
    state: Arc<R::State>,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_subscription: u64,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Arc::new(initial),
            listeners: Vec::new(),
            next_subscription: 0,
            _reducer: PhantomData,
        }
    }

    pub fn shared(self) -> SharedStore<R> {
        SharedStore {
            inner: Arc::new(Mutex::new(self)),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Runs the reducer and the listeners. Returns `true` if the state changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        if !self.transition(intent) {
            return false;
        }
        for (_, listener) in &self.listeners {
            listener(&*self.state);
        }
        true
    }

    /// Decodes and dispatches a raw instruction. Instructions the intent type
    /// cannot decode are dropped without touching the state.
    pub fn dispatch_instruction(
        &mut self,
        instruction: Instruction,
        context: &<R::Intent as DecodeInstruction>::Context,
    ) -> bool
    where
        R::Intent: DecodeInstruction,
    {
        match <R::Intent as DecodeInstruction>::decode(instruction, context) {
            Ok(intent) => self.dispatch(intent),
            Err(_) => false,
        }
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&R::State) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn transition(&mut self, intent: R::Intent) -> bool {
        if !R::changes(&self.state, &intent) {
            return false;
        }
        // Clones only while a snapshot handed out by `SharedStore` is alive.
        let current = Arc::unwrap_or_clone(std::mem::take(&mut self.state));
        self.state = Arc::new(R::reduce(current, intent));
        true
    }

    fn snapshot(&self) -> (Arc<R::State>, Vec<Listener<R::State>>) {
        let listeners = self.listeners.iter().map(|(_, l)| l.clone()).collect();
        (self.state.clone(), listeners)
    }
}

/// Store shared between several dispatching owners.
///
/// The lock is released before listeners run, so a listener may read from
/// or dispatch through its own handle. Listeners get the state produced by
/// the dispatch that triggered them.
pub struct SharedStore<R: Reducer> {
    inner: Arc<Mutex<Store<R>>>,
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: Reducer> SharedStore<R> {
    /// Current state. Holding the returned snapshot makes the next
    /// transition clone the state.
    pub fn state(&self) -> Arc<R::State> {
        self.inner.lock().state.clone()
    }

    pub fn dispatch(&self, intent: R::Intent) -> bool {
        let (state, listeners) = {
            let mut store = self.inner.lock();
            if !store.transition(intent) {
                return false;
            }
            store.snapshot()
        };
        for listener in &listeners {
            listener(&*state);
        }
        true
    }

    pub fn dispatch_instruction(
        &self,
        instruction: Instruction,
        context: &<R::Intent as DecodeInstruction>::Context,
    ) -> bool
    where
        R::Intent: DecodeInstruction,
    {
        match <R::Intent as DecodeInstruction>::decode(instruction, context) {
            Ok(intent) => self.dispatch(intent),
            Err(_) => false,
        }
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&R::State) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.inner.lock().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().unsubscribe(id)
    }
}
