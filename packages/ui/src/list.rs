//! # List state machine shared by the entity list components
//!
//! Every list view owns a [`ListState`] that moves between three states:
//!
//! | Status | Entered by | Renders |
//! |--------|-----------|---------|
//! | `Loading` | [`ListState::begin`] (mount or retry) | spinner + `Loading {noun}...` |
//! | `Failed` | [`ListState::settle`] with an error | fixed message + retry button |
//! | `Ready` | [`ListState::settle`] with a collection | cards, or `No {noun} found.` |
//!
//! `begin` hands out a [`FetchTicket`] stamped with a generation number. A result is
//! applied only if its ticket is still the latest one, so an older fetch that resolves
//! after a retry is discarded. Fetch tasks are spawned in the component's scope and are
//! dropped with it, which keeps results from landing after unmount.
//!
//! [`use_entity_list`] wires this into Dioxus: one fetch on mount, one more per retry.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Failed(String),
    Ready,
}

/// Identifies one fetch. Only the most recent ticket may settle the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// What a list should render right now.
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Items(&'a [T]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    status: LoadStatus,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: LoadStatus::Loading,
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Last successfully loaded collection, possibly stale while a reload is pending.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Enter `Loading` for a new fetch. Clears the error, keeps the previous items.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer fetch has started.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<T>, ApiError>,
        noun: &str,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match outcome {
            Ok(items) => {
                self.items = items;
                self.status = LoadStatus::Ready;
            }
            Err(_) => self.status = LoadStatus::Failed(failure_message(noun)),
        }
        true
    }

    pub fn view(&self) -> ListView<'_, T> {
        match &self.status {
            LoadStatus::Loading => ListView::Loading,
            LoadStatus::Failed(message) => ListView::Failed(message),
            LoadStatus::Ready if self.items.is_empty() => ListView::Empty,
            LoadStatus::Ready => ListView::Items(&self.items),
        }
    }
}

pub fn loading_message(noun: &str) -> String {
    format!("Loading {noun}...")
}

pub fn failure_message(noun: &str) -> String {
    format!("Failed to load {noun}. Make sure the backend is running.")
}

pub fn empty_message(noun: &str) -> String {
    format!("No {noun} found.")
}

/// Something that can produce a whole entity collection in one call.
///
/// Equality decides whether a re-rendered caller asked for a different listing.
pub trait EntitySource: Clone + PartialEq + 'static {
    type Item: Clone + PartialEq + 'static;

    /// Plural, lowercase noun used in user-facing messages.
    const NOUN: &'static str;

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Self::Item>, ApiError>>;
}

/// Fetch through `source`. Failures are logged here and only here.
pub async fn fetch_logged<S: EntitySource>(source: &S) -> Result<Vec<S::Item>, ApiError> {
    let outcome = source.fetch_all().await;
    match &outcome {
        Ok(items) => tracing::debug!(noun = S::NOUN, count = items.len(), "list loaded"),
        Err(e) => tracing::error!("Error loading {}: {}", S::NOUN, e),
    }
    outcome
}

/// Handle returned by [`use_entity_list`].
pub struct EntityList<T: 'static> {
    state: Signal<ListState<T>>,
    reload: Callback<()>,
}

impl<T: 'static> Clone for EntityList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for EntityList<T> {}

impl<T: 'static> EntityList<T> {
    pub fn state(&self) -> Signal<ListState<T>> {
        self.state
    }

    /// Start a new fetch. The state switches to `Loading` before this returns.
    pub fn retry(&self) {
        self.reload.call(());
    }
}

/// Own a [`ListState`] fed by `source`.
///
/// Fetches after mount, on every retry, and whenever a re-render passes a source that
/// compares unequal to the previous one (a new filter, another backend).
pub fn use_entity_list<S: EntitySource>(source: S) -> EntityList<S::Item> {
    let mut state = use_signal(ListState::<S::Item>::new);

    // Track the source in a signal so the effect below re-runs when the caller's query changes
    let mut current = use_signal(|| source.clone());
    if *current.peek() != source {
        current.set(source);
    }

    let reload = use_callback(move |()| {
        let source = current.peek().clone();
        let ticket = state.write().begin();
        spawn(async move {
            let outcome = fetch_logged(&source).await;
            if !state.write().settle(ticket, outcome, S::NOUN) {
                tracing::debug!(noun = S::NOUN, "discarded stale response");
            }
        });
    });

    use_effect(move || {
        current.read();
        reload.call(());
    });

    EntityList { state, reload }
}
