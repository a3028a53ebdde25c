//! Naming-convention queries over port declarations.
//!
//! A "turned-out" port is the reversed side of a connected channel; it
//! exists only as a composition-wiring artifact and is derived purely from
//! a name suffix. Nothing here holds state; every fact is recomputed from
//! the declared name on demand.

/// Suffix marking a reversed (turned-out) port.
pub const TURNED_OUT_SUFFIX: &str = "Reversed";

/// State name marking a cold scenario violation (permissive drop-out).
pub const COLD_VIOLATION_STATE: &str = "ColdViolation";
/// State name marking a hot scenario violation (mandatory step missed).
pub const HOT_VIOLATION_STATE: &str = "HotViolation";
/// State name marking scenario acceptance.
pub const ACCEPT_STATE: &str = "AcceptState";
/// State name marking the scenario's initial state.
pub const INITIAL_STATE: &str = "Initial";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PortNameError {
    /// The base name itself ends with the reversal suffix, so toggling is
    /// ambiguous: the name could be a reversed port or a plain port that
    /// happens to end in the suffix.
    #[error("Port name '{name}' is ambiguous: base name ends with the '{TURNED_OUT_SUFFIX}' suffix")]
    AmbiguousSuffix { name: String },
}

/// Whether the declared name marks a turned-out port.
pub fn is_turned_out(name: &str) -> bool {
    name.ends_with(TURNED_OUT_SUFFIX)
}

/// Toggle the reversal suffix: append it if absent, strip it if present.
pub fn turned_out_name(name: &str) -> String {
    match name.strip_suffix(TURNED_OUT_SUFFIX) {
        Some(base) => base.to_string(),
        None => format!("{name}{TURNED_OUT_SUFFIX}"),
    }
}

/// Resolve a turned-out name back to its canonical (non-reversed) form.
///
/// Unlike [`turned_out_name`] this refuses to guess: if stripping one
/// suffix layer leaves a name that still ends with the suffix, the original
/// declaration was ambiguous and the caller must resolve it.
pub fn canonical_port_name(name: &str) -> Result<&str, PortNameError> {
    match name.strip_suffix(TURNED_OUT_SUFFIX) {
        Some(base) if base.ends_with(TURNED_OUT_SUFFIX) => {
            Err(PortNameError::AmbiguousSuffix {
                name: name.to_string(),
            })
        }
        Some(base) => Ok(base),
        None => Ok(name),
    }
}

/// Well-known labels for scenario-trace annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioMarker {
    ColdViolation,
    HotViolation,
    Accept,
    Initial,
}

/// Map a state name onto its scenario marker, if it is one.
pub fn marker_for(state_name: &str) -> Option<ScenarioMarker> {
    match state_name {
        COLD_VIOLATION_STATE => Some(ScenarioMarker::ColdViolation),
        HOT_VIOLATION_STATE => Some(ScenarioMarker::HotViolation),
        ACCEPT_STATE => Some(ScenarioMarker::Accept),
        INITIAL_STATE => Some(ScenarioMarker::Initial),
        _ => None,
    }
}
