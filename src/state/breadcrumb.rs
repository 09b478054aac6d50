//! Where the operator is, shown above every redrawn form

use std::fmt;

/// Chain of screens leading to the current one, outermost first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    states: Vec<String>,
}

impl Breadcrumb {
    /// This trail with one more screen appended
    pub fn child(&self, state: impl Into<String>) -> Self {
        let mut states = self.states.clone();
        states.push(state.into());
        Self { states }
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.states.join(" >> "))
    }
}
