//! Modal visibility state.
//!
//! Visibility flag plus an optional payload handed over at show time. Fully
//! synchronous; no guard, no async involvement.

use parking_lot::Mutex;

struct Modal<P> {
    visible: bool,
    payload: Option<P>,
}

/// Modal container carrying a payload `P` while visible.
pub struct ModalState<P> {
    state: Mutex<Modal<P>>,
}

impl<P> ModalState<P> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Modal {
                visible: false,
                payload: None,
            }),
        }
    }

    /// Show the modal with `payload`.
    pub fn show(&self, payload: P) {
        let mut state = self.state.lock();
        state.payload = Some(payload);
        state.visible = true;
    }

    /// Hide the modal and drop its payload.
    pub fn hide(&self) {
        let mut state = self.state.lock();
        state.payload = None;
        state.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    /// Payload handed to the last `show`, cloned out. `None` while hidden.
    pub fn payload(&self) -> Option<P>
    where
        P: Clone,
    {
        self.state.lock().payload.clone()
    }
}

impl<P> Default for ModalState<P> {
    fn default() -> Self {
        Self::new()
    }
}
