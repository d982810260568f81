//! View lifetime scoping for in-flight async work.
//!
//! There is no cancellation: a load, augmentation or reconciliation started
//! by a view keeps running if the view is torn down. What must not happen is
//! its result being applied to whatever view replaced it. Each activation
//! bumps an epoch; work captures a [`LoadTicket`] when it starts and the
//! view only applies results whose ticket is still current.

use super::view::ViewState;

/// Proof of which view activation a piece of async work was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// One view's activation epoch plus its ephemeral [`ViewState`].
///
/// Single-threaded by design: the hosting view owns the session and every
/// interaction goes through `&mut self` between await points, matching the
/// cooperative scheduling of the front end. State is passed in explicitly;
/// there are no ambient singletons to leak across views.
#[derive(Debug, Default)]
pub struct ViewSession {
    epoch: u64,
    pub state: ViewState,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the view: reset the state to defaults and invalidate every
    /// ticket issued before.
    pub fn activate(&mut self) {
        self.activate_with(ViewState::default());
    }

    /// Enter the view with a screen-specific initial state.
    pub fn activate_with(&mut self, state: ViewState) {
        self.epoch += 1;
        self.state = state;
    }

    /// Leave the view. The state resets and outstanding tickets go stale,
    /// so results of still-running work get dropped instead of applied.
    pub fn deactivate(&mut self) {
        self.epoch += 1;
        self.state = ViewState::default();
    }

    /// Capture the current epoch before starting async work.
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket { epoch: self.epoch }
    }

    /// Is a result produced under `ticket` still for this view?
    pub fn accepts(&self, ticket: LoadTicket) -> bool {
        ticket.epoch == self.epoch
    }
}
