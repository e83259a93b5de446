//! Per-element hover state keyed by element identity.
//!
//! Enter/leave drive each element's flag; the document-level pointer button is
//! tracked once. The cursor follower reads the aggregate views (`any_hovered`,
//! `pointer_down`).

use fnv::FnvHashMap;

pub type ElementId = u32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
    pub hovered: bool,
    /// Set once the element has been forced to clip its ripples.
    pub contained: bool,
}

/// Visual state of the synthetic cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    pub hover: bool,
    pub clicking: bool,
}

#[derive(Debug, Default)]
pub struct InteractionRegistry {
    states: FnvHashMap<ElementId, ElementState>,
    next_id: ElementId,
    hovered: usize,
    pointer_down: bool,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        self.states.insert(id, ElementState::default());
        id
    }

    #[inline]
    pub fn state(&self, id: ElementId) -> Option<ElementState> {
        self.states.get(&id).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns `true` on an idle -> hovered transition.
    pub fn enter(&mut self, id: ElementId) -> bool {
        match self.states.get_mut(&id) {
            Some(s) if !s.hovered => {
                s.hovered = true;
                self.hovered += 1;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` on a hovered -> idle transition.
    pub fn leave(&mut self, id: ElementId) -> bool {
        match self.states.get_mut(&id) {
            Some(s) if s.hovered => {
                s.hovered = false;
                self.hovered -= 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_hovered(&self, id: ElementId) -> bool {
        self.states.get(&id).map_or(false, |s| s.hovered)
    }

    /// True exactly once per element: the caller then forces relative
    /// positioning and overflow clipping on it.
    pub fn claim_containment(&mut self, id: ElementId) -> bool {
        match self.states.get_mut(&id) {
            Some(s) if !s.contained => {
                s.contained = true;
                true
            }
            _ => false,
        }
    }

    /// Document-level button state.
    #[inline]
    pub fn set_pointer_down(&mut self, down: bool) {
        self.pointer_down = down;
    }

    #[inline]
    pub fn any_hovered(&self) -> bool {
        self.hovered > 0
    }

    #[inline]
    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn cursor(&self) -> CursorState {
        CursorState {
            hover: self.any_hovered(),
            clicking: self.pointer_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_transitions_are_reported_once() {
        let mut reg = InteractionRegistry::new();
        let a = reg.register();
        assert!(reg.enter(a));
        assert!(!reg.enter(a));
        assert!(reg.leave(a));
        assert!(!reg.leave(a));
        assert!(!reg.state(a).unwrap().hovered);
        assert!(!reg.enter(99));
    }

    #[test]
    fn nested_hover_keeps_cursor_state_until_last_leave() {
        let mut reg = InteractionRegistry::new();
        let outer = reg.register();
        let inner = reg.register();
        reg.enter(outer);
        reg.enter(inner);
        assert!(!reg.enter(inner));
        reg.leave(inner);
        assert!(reg.cursor().hover);
        reg.leave(outer);
        assert!(!reg.cursor().hover);
    }

    #[test]
    fn containment_is_claimed_once() {
        let mut reg = InteractionRegistry::new();
        let b = reg.register();
        assert!(reg.claim_containment(b));
        assert!(!reg.claim_containment(b));
        assert!(!reg.claim_containment(99));
    }

    #[test]
    fn pointer_button_is_independent_of_hover() {
        let mut reg = InteractionRegistry::new();
        let a = reg.register();
        reg.set_pointer_down(true);
        assert_eq!(reg.cursor(), CursorState { hover: false, clicking: true });
        reg.enter(a);
        reg.set_pointer_down(false);
        assert_eq!(reg.cursor(), CursorState { hover: true, clicking: false });
        assert!(reg.state(a).unwrap().hovered);
    }
}
