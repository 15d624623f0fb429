// src/session.rs
use crate::core::comparator::compare_inputs;
use crate::core::store::InputStore;
use crate::error::InputError;
use crate::models::{ComparisonResult, PriceInput};

/// Where the comparator screen currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Idle,
    Validating,
    Invalid,
    ResultShown(ComparisonResult),
}

/// The comparator screen: two editable fields, an injected store and the
/// result overlay.
#[derive(Debug)]
pub struct Session<S> {
    ethanol: PriceInput,
    gasoline: PriceInput,
    store: S,
    state: SessionState,
}

impl<S: InputStore> Session<S> {
    /// Opens the screen, filling the fields from whatever the store holds.
    ///
    /// A failing store is treated as holding nothing.
    pub fn start(store: S) -> Self {
        let stored = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load stored inputs");
            Default::default()
        });

        Self {
            ethanol: PriceInput::new(stored.ethanol.unwrap_or_default()),
            gasoline: PriceInput::new(stored.gasoline.unwrap_or_default()),
            store,
            state: SessionState::Idle,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn ethanol(&self) -> &PriceInput {
        &self.ethanol
    }

    #[inline]
    #[must_use]
    pub const fn gasoline(&self) -> &PriceInput {
        &self.gasoline
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    pub fn set_ethanol(&mut self, raw: impl Into<String>) {
        self.ethanol.set(raw);
    }

    #[inline]
    pub fn set_gasoline(&mut self, raw: impl Into<String>) {
        self.gasoline.set(raw);
    }

    /// Runs the calculation for the current field contents.
    ///
    /// On success the raw texts are written to the store and the result
    /// overlay opens. A failed write is logged and otherwise ignored. On
    /// invalid input nothing is stored and the screen returns to idle.
    /// Calling this while a result is shown replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidInput`] if either field is not a number.
    pub fn calculate(&mut self) -> Result<ComparisonResult, InputError> {
        self.transition(SessionState::Validating);

        let result = match compare_inputs(&self.ethanol, &self.gasoline) {
            Ok(result) => result,
            Err(e) => {
                self.transition(SessionState::Invalid);
                self.transition(SessionState::Idle);
                return Err(e);
            }
        };

        if let Err(e) = self.store.save(self.ethanol.raw(), self.gasoline.raw()) {
            tracing::warn!(error = %e, "could not persist inputs");
        }

        self.transition(SessionState::ResultShown(result));
        Ok(result)
    }

    /// Closes the result overlay. Does nothing when no result is shown.
    pub fn dismiss(&mut self) {
        if matches!(self.state, SessionState::ResultShown(_)) {
            self.transition(SessionState::Idle);
        }
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = ?self.state, to = ?next, "session transition");
        self.state = next;
    }
}
