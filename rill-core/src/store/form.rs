//! Form Store
//!
//! Tracks editable fields alongside the copy last accepted by a submit. The
//! accepted copy is called the sediments: what has settled, as opposed to
//! what is currently being edited.
//!
//! # Lifecycle
//!
//! - `set_fields` edits the current fields in place.
//! - `submit` hands a snapshot of the fields to the submit operation; on
//!   success the fields as they stand at completion become the new
//!   sediments. On failure the sediments are untouched.
//! - `reset` restores the pristine initial fields and unconditionally clears
//!   the loading flag, so it doubles as an escape hatch for a stuck form.
//!
//! Submits are guarded by the same single-slot flag as the other stores.

use std::future::Future;

use parking_lot::Mutex;
use tracing::error;

use super::error::StoreError;

struct FormState<F> {
    loading: bool,
    fields: F,
    sediments: F,
}

/// Form container over a field block `F` and a submit operation `S`.
pub struct FormStore<F, S> {
    initial: F,
    submit: S,
    state: Mutex<FormState<F>>,
}

impl<F, S> FormStore<F, S>
where
    F: Clone,
{
    /// Create a store whose fields and sediments both start as `fields`.
    pub fn new(fields: F, submit: S) -> Self {
        Self {
            state: Mutex::new(FormState {
                loading: false,
                fields: fields.clone(),
                sediments: fields.clone(),
            }),
            initial: fields,
            submit,
        }
    }

    /// Edit the current fields in place.
    pub fn set_fields(&self, mutate: impl FnOnce(&mut F)) {
        mutate(&mut self.state.lock().fields);
    }

    /// Submit the current fields.
    ///
    /// The submit operation receives the fields as they stand when the
    /// submit starts. Edits made while the submit is in flight are kept and
    /// end up in the sediments if the submit succeeds.
    pub async fn submit<Fut, E>(&self) -> Result<(), StoreError<E>>
    where
        S: Fn(F) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: std::fmt::Display,
    {
        let snapshot = {
            let mut state = self.state.lock();
            if state.loading {
                return Err(StoreError::Busy);
            }
            state.loading = true;
            state.fields.clone()
        };

        match (self.submit)(snapshot).await {
            Ok(()) => {
                let mut state = self.state.lock();
                state.sediments = state.fields.clone();
                state.loading = false;
                Ok(())
            }
            Err(err) => {
                self.state.lock().loading = false;
                error!(error = %err, "form submit failed");
                Err(StoreError::Operation(err))
            }
        }
    }

    /// Restore the pristine initial fields and clear the loading flag.
    ///
    /// Sediments are kept; they describe what the backend last accepted,
    /// which a reset of the editor does not change.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.loading = false;
        state.fields = self.initial.clone();
    }

    /// Current fields, cloned out.
    pub fn fields(&self) -> F {
        self.state.lock().fields.clone()
    }

    /// Fields as of the last successful submit, cloned out.
    pub fn sediments(&self) -> F {
        self.state.lock().sediments.clone()
    }

    /// True while a submit is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }
}
