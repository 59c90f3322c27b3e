//! Navigation guards and hooks.
//!
//! A guard receives the target location, the current location and a [`Next`]
//! continuation. The guard must hand back a [`GuardOutcome`], and the only way
//! to obtain one is to consume `Next`, so every guard invocation resolves its
//! continuation exactly once.

use crate::location::RouteLocation;

/// What a guard decided for the navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the navigation continue.
    Proceed,
    /// Cancel the navigation.
    Abort,
    /// Restart the navigation at another path.
    Redirect(String),
}

/// Result of consuming a [`Next`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct GuardOutcome(Decision);

impl GuardOutcome {
    /// The decision carried by this outcome.
    pub fn decision(&self) -> &Decision {
        &self.0
    }

    pub(crate) fn into_decision(self) -> Decision {
        self.0
    }
}

/// Continuation handed to each guard invocation.
#[derive(Debug)]
pub struct Next {
    _private: (),
}

impl Next {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    /// Allow the navigation to proceed.
    pub fn proceed(self) -> GuardOutcome {
        GuardOutcome(Decision::Proceed)
    }

    /// Cancel the navigation; nothing is committed.
    pub fn abort(self) -> GuardOutcome {
        GuardOutcome(Decision::Abort)
    }

    /// Navigate somewhere else instead.
    pub fn redirect(self, path: impl Into<String>) -> GuardOutcome {
        GuardOutcome(Decision::Redirect(path.into()))
    }
}

/// Hook run before every navigation attempt.
pub type NavigationGuard = Box<dyn Fn(&RouteLocation, &RouteLocation, Next) -> GuardOutcome>;

/// Hook run after every committed navigation.
pub type AfterHook = Box<dyn Fn(&RouteLocation, &RouteLocation)>;
