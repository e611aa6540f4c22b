//! Progressive disclosure ("show more" / "show less") for long lists.
//!
//! The button state is a pure function of three counts: how many items the
//! list holds, how many are currently shown and how many were shown before
//! any expansion. Callers recompute it after every change to any of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which button, if any, a disclosable list should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisclosureState {
    /// Nothing to disclose or collapse.
    NoButton,
    /// Some items are hidden.
    ShowMore,
    /// Everything is shown and the list was truncated initially.
    ShowLess,
}

impl DisclosureState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoButton => "no-button",
            Self::ShowMore => "show-more",
            Self::ShowLess => "show-less",
        }
    }

    pub fn has_button(&self) -> bool {
        !matches!(self, Self::NoButton)
    }
}

impl fmt::Display for DisclosureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the disclosure state for one list.
///
/// An empty list never gets a button. `shown` above `total` counts as
/// showing everything.
pub fn compute_state(total: usize, shown: usize, initial_cap: usize) -> DisclosureState {
    if total == 0 {
        DisclosureState::NoButton
    } else if shown < total {
        DisclosureState::ShowMore
    } else if initial_cap < total {
        DisclosureState::ShowLess
    } else {
        DisclosureState::NoButton
    }
}

/// Identifies one disclosable list; equal to the snapshot field holding it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    pub const USERS: &'static str = "users";
    pub const INTERFACES: &'static str = "interfaces";
    pub const VOLUMES: &'static str = "volumes";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn users() -> Self {
        Self::new(Self::USERS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Counts backing one disclosable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureCounts {
    pub total: usize,
    pub shown: usize,
    pub initial_cap: usize,
}

impl DisclosureCounts {
    /// Starts collapsed: `shown` equals the initial cap.
    pub fn new(total: usize, initial_cap: usize) -> Self {
        Self {
            total,
            shown: initial_cap,
            initial_cap,
        }
    }

    pub fn state(&self) -> DisclosureState {
        compute_state(self.total, self.shown, self.initial_cap)
    }

    /// Number of items actually rendered.
    pub fn visible(&self) -> usize {
        self.shown.min(self.total)
    }

    pub fn is_expanded(&self) -> bool {
        self.state() == DisclosureState::ShowLess
    }

    /// Expands on `ShowMore`, collapses on `ShowLess`, otherwise leaves the
    /// counts alone. Returns the state after the toggle.
    pub fn toggle(&mut self) -> DisclosureState {
        match self.state() {
            DisclosureState::ShowMore => self.shown = self.total,
            DisclosureState::ShowLess => self.shown = self.initial_cap,
            DisclosureState::NoButton => {}
        }
        self.state()
    }

    /// Replaces the total, keeping the current `shown` count.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }
}
