//! Exit-intent popup state machine.
//!
//! The popup is shown at most once per browser: the "already shown" flag is
//! persisted through an injected [`KeyValueStore`] and checked at
//! construction, so a machine built after the popup fired starts `Disarmed`
//! and never rearms. The component owns the debounce `Timeout` handle; this
//! type only tracks whether one is pending.

use crate::config::POPUP_SHOWN_KEY;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not yet shown, watching for the pointer leaving the top edge.
    Armed,
    /// Popup visible.
    Showing,
    /// Shown once already; inert until the stored flag is cleared externally.
    Disarmed,
}

pub struct ExitIntent<S> {
    store: S,
    phase: Phase,
    debounce_pending: bool,
}

impl<S: KeyValueStore> ExitIntent<S> {
    pub fn new(store: S) -> Self {
        let phase = if store.get(POPUP_SHOWN_KEY).as_deref() == Some("true") {
            Phase::Disarmed
        } else {
            Phase::Armed
        };
        Self {
            store,
            phase,
            debounce_pending: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pointer left the document at viewport coordinate `client_y`.
    /// Returns `true` when the caller must arm the debounce timer.
    pub fn pointer_left(&mut self, client_y: i32) -> bool {
        if client_y > 0 || self.phase != Phase::Armed || self.debounce_pending {
            return false;
        }
        self.debounce_pending = true;
        true
    }

    /// Debounce timer fired. Returns `true` when the popup must be shown;
    /// the persisted flag is set at this point, never cleared by us.
    pub fn debounce_elapsed(&mut self) -> bool {
        self.debounce_pending = false;
        if self.phase != Phase::Armed {
            return false;
        }
        self.phase = Phase::Showing;
        self.store.set(POPUP_SHOWN_KEY, "true");
        true
    }

    /// Close button, overlay click or Escape. Returns `true` when the popup
    /// was actually showing and must be hidden.
    pub fn dismiss(&mut self) -> bool {
        self.debounce_pending = false;
        if self.phase != Phase::Showing {
            return false;
        }
        self.phase = Phase::Disarmed;
        true
    }

    /// Successful subscription while showing retires the popup for good.
    pub fn submit_succeeded(&mut self) {
        if self.phase == Phase::Showing {
            self.phase = Phase::Disarmed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn starts_armed_without_the_stored_flag() {
        let popup = ExitIntent::new(MemoryStore::new());
        assert_eq!(popup.phase(), Phase::Armed);
    }

    #[test]
    fn starts_disarmed_when_the_flag_is_already_set() {
        let store = MemoryStore::new();
        store.set(POPUP_SHOWN_KEY, "true");
        let popup = ExitIntent::new(store);
        assert_eq!(popup.phase(), Phase::Disarmed);
    }

    #[test]
    fn any_other_stored_value_means_not_shown() {
        let store = MemoryStore::new();
        store.set(POPUP_SHOWN_KEY, "yes");
        let popup = ExitIntent::new(store);
        assert_eq!(popup.phase(), Phase::Armed);
    }

    #[test]
    fn only_a_top_edge_exit_arms_the_debounce() {
        let mut popup = ExitIntent::new(MemoryStore::new());
        assert!(!popup.pointer_left(300));
        assert!(!popup.pointer_left(1));
        assert!(popup.pointer_left(0));
    }

    #[test]
    fn a_pending_debounce_is_not_rearmed() {
        let mut popup = ExitIntent::new(MemoryStore::new());
        assert!(popup.pointer_left(-5));
        assert!(!popup.pointer_left(-5));
    }

    #[test]
    fn shows_once_and_persists_the_flag() {
        let store = MemoryStore::new();
        let mut popup = ExitIntent::new(store.clone());
        assert!(popup.pointer_left(0));
        assert!(popup.debounce_elapsed());
        assert_eq!(popup.phase(), Phase::Showing);
        assert_eq!(store.get(POPUP_SHOWN_KEY).as_deref(), Some("true"));

        // Second gesture after dismissal must never reopen.
        assert!(popup.dismiss());
        assert!(!popup.pointer_left(0));
        assert_eq!(popup.phase(), Phase::Disarmed);

        // Nor in a fresh session with the same store.
        let mut reloaded = ExitIntent::new(store);
        assert_eq!(reloaded.phase(), Phase::Disarmed);
        assert!(!reloaded.pointer_left(0));
    }

    #[test]
    fn dismiss_while_armed_is_a_no_op_that_clears_the_debounce() {
        let mut popup = ExitIntent::new(MemoryStore::new());
        assert!(popup.pointer_left(0));
        assert!(!popup.dismiss());
        // The cleared debounce may be armed again.
        assert!(popup.pointer_left(0));
    }

    #[test]
    fn successful_submit_disarms() {
        let mut popup = ExitIntent::new(MemoryStore::new());
        popup.pointer_left(0);
        popup.debounce_elapsed();
        popup.submit_succeeded();
        assert_eq!(popup.phase(), Phase::Disarmed);
        assert!(!popup.pointer_left(0));
    }

    #[test]
    fn failed_submit_leaves_the_popup_showing() {
        let mut popup = ExitIntent::new(MemoryStore::new());
        popup.pointer_left(0);
        popup.debounce_elapsed();
        // Failure is reported to the user without touching the machine.
        assert_eq!(popup.phase(), Phase::Showing);
    }
}
