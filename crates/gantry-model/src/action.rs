use serde::{Deserialize, Serialize};

use crate::timing::TimerSchedule;

/// A unit of executable behavior attached to a state or transition.
///
/// `Block` is the only structural variant; everything else is a leaf the
/// composition algebra treats as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Ordered sequential composition. Child order is execution order.
    Block { actions: Vec<Action> },
    /// Assign a value expression to a variable.
    Assign { target: String, value: String },
    /// Raise an event through a port, optionally with an argument expression.
    Raise {
        port: String,
        event: String,
        #[serde(default)]
        argument: Option<String>,
    },
    /// Schedule a timer per the runtime timer contract.
    StartTimer { schedule: TimerSchedule },
    /// Cancel a previously scheduled timer by its event id.
    StopTimer { event_id: i64 },
}

impl Action {
    pub fn block(actions: Vec<Action>) -> Self {
        Action::Block { actions }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Action::Block { .. })
    }
}

/// Merge two optional behavior fragments into one.
///
/// Either side absent yields the other unchanged. When `original` is
/// already a `Block`, `addition` is appended as its new last child and the
/// block itself is returned, without re-wrapping or re-ordering. Otherwise a
/// fresh two-child block `[original, addition]` is allocated.
pub fn extend(original: Option<Action>, addition: Option<Action>) -> Option<Action> {
    match (original, addition) {
        (None, addition) => addition,
        (original, None) => original,
        (Some(Action::Block { mut actions }), Some(addition)) => {
            actions.push(addition);
            Some(Action::Block { actions })
        }
        (Some(original), Some(addition)) => Some(Action::Block {
            actions: vec![original, addition],
        }),
    }
}

/// Left fold of [`extend`] over a sequence of additions, preserving order.
///
/// An empty sequence returns `original` unchanged.
pub fn extend_all(
    original: Option<Action>,
    additions: impl IntoIterator<Item = Action>,
) -> Option<Action> {
    additions
        .into_iter()
        .fold(original, |acc, addition| extend(acc, Some(addition)))
}
