//! One-shot "fade in when first seen" bookkeeping for the intersection observer.

pub const REVEAL_SELECTORS: &str =
    ".about-content, .skill-category, .project-card, .contact-content, .highlight-item";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEALED_CLASS: &str = "fade-in";
/// Attribute carrying an element's slot in the [`RevealTracker`].
pub const REVEAL_INDEX_ATTRIBUTE: &str = "data-reveal-index";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unobserved,
    Observed,
    Revealed,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> usize {
        self.states.push(RevealState::Unobserved);
        self.states.len() - 1
    }

    pub fn observe(&mut self, index: usize) {
        if let Some(state @ RevealState::Unobserved) = self.states.get_mut(index) {
            *state = RevealState::Observed;
        }
    }

    #[cfg(test)]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Handles one observer report. `true` means: reveal the element and stop observing it.
    pub fn on_entry(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Observed) if is_intersecting => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Revealed)
            .count()
    }
}
