use serde::{Deserialize, Serialize};

/// A named event token, optionally carrying one opaque value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventToken {
    pub name: String,
    #[serde(default)]
    pub value: Option<i64>,
}

/// Units accepted by elapsed-time queries in the runtime contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

/// Shape of a timer registration: which event fires, after how long, and
/// whether it repeats. Cancellation is keyed by `event_id` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSchedule {
    pub event_id: i64,
    pub duration: u64,
    pub unit: TimeUnit,
    pub periodic: bool,
}
