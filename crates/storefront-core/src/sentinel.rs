//! Load-more sentinel.
//!
//! Tracks which element (by identity `E`) currently marks the end of the
//! rendered list and turns raw visibility transitions into at most one
//! load-more signal per transition. The host wires the returned
//! [`ObserverCommand`]s to its viewport-intersection primitive.

use tracing::trace;

/// Instructions for the host's visibility observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverCommand<E> {
    Observe(E),
    Unobserve(E),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<E> {
    Unarmed,
    Observing {
        target: E,
        /// Already signalled for the current visibility transition.
        fired: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Sentinel<E> {
    state: State<E>,
    /// Page cursor seen by the last `sync`.
    cursor: usize,
}

impl<E: Clone + PartialEq> Default for Sentinel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + PartialEq> Sentinel<E> {
    pub fn new() -> Self {
        Self {
            state: State::Unarmed,
            cursor: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, State::Observing { .. })
    }

    pub fn target(&self) -> Option<&E> {
        match &self.state {
            State::Observing { target, .. } => Some(target),
            State::Unarmed => None,
        }
    }

    /// Start observing `target`, replacing any previous one.
    pub fn arm(&mut self, target: E) -> Vec<ObserverCommand<E>> {
        let mut commands = Vec::new();
        if let State::Observing { target: previous, .. } = &self.state {
            if *previous == target {
                return commands;
            }
            commands.push(ObserverCommand::Unobserve(previous.clone()));
        }
        commands.push(ObserverCommand::Observe(target.clone()));
        self.state = State::Observing {
            target,
            fired: false,
        };
        commands
    }

    /// Stop observing entirely.
    pub fn disarm(&mut self) -> Vec<ObserverCommand<E>> {
        match std::mem::replace(&mut self.state, State::Unarmed) {
            State::Observing { target, .. } => vec![ObserverCommand::Unobserve(target)],
            State::Unarmed => Vec::new(),
        }
    }

    /// Reconcile with the current list state.
    ///
    /// Observation is dropped while a fetch is in flight or when nothing more
    /// can load, and re-attached to `last` otherwise. When `cursor` advanced
    /// but `last` is still the target (a page added nothing visible), the
    /// target is observed afresh so a still-visible element fires again.
    pub fn sync(
        &mut self,
        last: Option<E>,
        cursor: usize,
        loading: bool,
        has_more: bool,
    ) -> Vec<ObserverCommand<E>> {
        let advanced = std::mem::replace(&mut self.cursor, cursor) != cursor;
        match last {
            Some(last) if !loading && has_more => {
                if advanced && self.target() == Some(&last) {
                    trace!(cursor, "page added no visible items, re-observing sentinel");
                    let mut commands = self.disarm();
                    commands.extend(self.arm(last));
                    return commands;
                }
                self.arm(last)
            }
            _ => self.disarm(),
        }
    }

    /// Feed a visibility transition for `element`.
    ///
    /// Returns `true` when the caller should fetch the next page. Events for
    /// anything other than the current target are ignored.
    pub fn on_visibility(&mut self, element: &E, visible: bool) -> bool {
        let State::Observing { target, fired } = &mut self.state else {
            return false;
        };
        if target != element {
            trace!("ignoring visibility event for a previous sentinel target");
            return false;
        }
        if !visible {
            *fired = false;
            return false;
        }
        if *fired {
            return false;
        }
        *fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ObserverCommand::{Observe, Unobserve};

    #[test]
    fn test_fires_once_per_transition() {
        let mut s = Sentinel::new();
        assert_eq!(s.sync(Some(8), 1, false, true), vec![Observe(8)]);
        assert!(s.on_visibility(&8, true));
        assert!(!s.on_visibility(&8, true));
        assert!(!s.on_visibility(&8, false));
        assert!(s.on_visibility(&8, true));
    }

    #[test]
    fn test_unarmed_never_fires() {
        let mut s: Sentinel<u32> = Sentinel::new();
        assert!(!s.on_visibility(&1, true));
        assert!(s.disarm().is_empty());
    }

    #[test]
    fn test_disarms_while_loading_and_when_exhausted() {
        let mut s = Sentinel::new();
        s.sync(Some(8), 1, false, true);
        assert_eq!(s.sync(Some(8), 1, true, true), vec![Unobserve(8)]);
        assert!(!s.is_armed());
        assert!(!s.on_visibility(&8, true));

        s.sync(Some(16), 2, false, true);
        assert_eq!(s.sync(Some(16), 3, false, false), vec![Unobserve(16)]);
        assert!(s.sync(None, 3, false, true).is_empty());
    }

    #[test]
    fn test_rearm_moves_to_new_last_element() {
        let mut s = Sentinel::new();
        s.sync(Some(8), 1, false, true);
        assert!(s.on_visibility(&8, true));

        // Page loads: loading disarms, completion re-arms on the new last item.
        s.sync(Some(8), 1, true, true);
        assert_eq!(s.sync(Some(16), 2, false, true), vec![Observe(16)]);
        assert_eq!(s.target(), Some(&16));

        // A late event for the old element does not double-fire.
        assert!(!s.on_visibility(&8, true));
        assert!(s.on_visibility(&16, true));
        assert!(!s.on_visibility(&16, true));
    }

    #[test]
    fn test_arm_replaces_target_directly() {
        let mut s = Sentinel::new();
        s.arm("a");
        assert_eq!(s.arm("b"), vec![Unobserve("a"), Observe("b")]);
        assert!(s.arm("b").is_empty());
    }

    #[test]
    fn test_same_target_refires_after_empty_page() {
        let mut s = Sentinel::new();
        s.sync(Some(3), 1, false, true);
        assert!(s.on_visibility(&3, true));

        // Page 2 is served without a loading phase and adds no visible item.
        assert_eq!(s.sync(Some(3), 2, false, true), vec![Unobserve(3), Observe(3)]);
        assert!(s.on_visibility(&3, true));

        // Re-rendering at the same cursor leaves the observer alone.
        assert!(s.sync(Some(3), 2, false, true).is_empty());
        assert!(!s.on_visibility(&3, true));
    }
}
