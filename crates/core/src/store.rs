// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The filter state authority.
//!
//! `FilterStore` owns the single current `FilterState`. Views read snapshots
//! and request changes through commands; the store applies them with
//! [`crate::apply`], installs the new snapshot and notifies subscribers before
//! returning. Mutations take `&mut self`, so they are serialized.

use crate::apply::apply;
use crate::command::{FacetToggle, FilterCommand, FilterUpdate};
use crate::state::{FilterChange, FilterState, FilterTransition};
use tracing::debug;

/// Receives every filter change synchronously.
pub trait FilterSubscriber {
    /// Called after a new state has been installed.
    ///
    /// # Arguments
    ///
    /// * `state` - The new current state
    /// * `change` - The change record for the transition
    fn on_change(&mut self, state: &FilterState, change: &FilterChange);
}

impl<F> FilterSubscriber for F
where
    F: FnMut(&FilterState, &FilterChange),
{
    fn on_change(&mut self, state: &FilterState, change: &FilterChange) {
        self(state, change);
    }
}

/// Handle returned by [`FilterStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the current filter state and serializes every change to it.
pub struct FilterStore {
    state: FilterState,
    revision: u64,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn FilterSubscriber>)>,
}

impl FilterStore {
    /// Creates a store holding the default filter state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(FilterState::default())
    }

    /// Creates a store holding the given initial state.
    #[must_use]
    pub const fn with_state(state: FilterState) -> Self {
        Self {
            state,
            revision: 0,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Returns a full copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> FilterState {
        self.state.clone()
    }

    /// Returns how many commands have been applied since creation.
    ///
    /// Callers that cache derived data can key their cache on this value.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a subscriber. Subscribers are notified in registration order.
    pub fn subscribe<S>(&mut self, subscriber: S) -> SubscriptionId
    where
        S: FilterSubscriber + 'static,
    {
        let id: SubscriptionId = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before: usize = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Applies a command, installs the resulting state and notifies subscribers.
    ///
    /// # Returns
    ///
    /// The change record of the applied command.
    pub fn dispatch(&mut self, command: FilterCommand) -> FilterChange {
        let transition: FilterTransition = apply(&self.state, command);
        self.state = transition.new_state;
        self.revision += 1;

        debug!(
            action = transition.change.action,
            revision = self.revision,
            details = %transition.change.details,
            after = %transition.change.after,
            "Filter state changed"
        );

        for (_, subscriber) in &mut self.subscribers {
            subscriber.on_change(&self.state, &transition.change);
        }

        transition.change
    }

    /// Replaces one field of the filter state.
    pub fn update_filter(&mut self, update: FilterUpdate) -> FilterChange {
        self.dispatch(FilterCommand::UpdateFilter(update))
    }

    /// Toggles one value of a set facet.
    pub fn toggle_array_filter(&mut self, toggle: FacetToggle) -> FilterChange {
        self.dispatch(FilterCommand::ToggleArrayFilter(toggle))
    }

    /// Resets the filter state to its defaults.
    pub fn clear_filters(&mut self) -> FilterChange {
        self.dispatch(FilterCommand::ClearFilters)
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
