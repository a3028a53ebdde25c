use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::timing::EventToken;

/// Top-level statechart model — packages and the components they own.
///
/// The model is read-only from the verification core's point of view; it is
/// produced by an external design tool and queried here for structural facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatechartModel {
    pub packages: HashMap<String, Package>,
    pub components: HashMap<String, Component>,
}

impl StatechartModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }
}

// ── Packages ─────────────────────────────────────────────────────────

/// A package owning component definitions.
///
/// The `unfolded` flag marks packages holding a flattened view of a
/// composite, which is the form the query compiler requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub unfolded: bool,
}

// ── Components ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// A leaf statechart definition.
    Statechart,
    /// A composition of subcomponent instances wired through ports.
    Composite,
}

/// A component definition: a statechart or a composition of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// Name of the owning package. Dangling links are a model error,
    /// surfaced by the derived-feature queries.
    pub package: String,
    pub kind: ComponentKind,
    pub ports: HashMap<String, Port>,
    pub states: HashMap<String, State>,
    pub transitions: Vec<Transition>,
    pub variables: Vec<String>,
}

impl Component {
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.get(name)
    }

    pub fn transition(&self, id: u32) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    /// Event tokens this port can carry.
    #[serde(default)]
    pub events: Vec<EventToken>,
}

impl Port {
    pub fn event(&self, name: &str) -> Option<&EventToken> {
        self.events.iter().find(|e| e.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    /// Whether this state contains nested regions.
    pub composite: bool,
    #[serde(default)]
    pub entry_action: Option<Action>,
    #[serde(default)]
    pub exit_action: Option<Action>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
    /// Stable id within the owning component.
    pub id: u32,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub trigger: Option<Trigger>,
    #[serde(default)]
    pub guard: Option<String>,
    #[serde(default)]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub port: String,
    pub event: String,
}

// ── Instances ────────────────────────────────────────────────────────

/// A named instance of a component, the thing a property is stated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatechartInstance {
    pub name: String,
    /// Name of the instantiated component definition.
    pub component: String,
}

impl StatechartInstance {
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component: component.into(),
        }
    }
}

// ── Element references ───────────────────────────────────────────────

/// Stable reference to a source-model element.
///
/// Trace steps carry these instead of formal-model identities, so a trace
/// stays meaningful against the model the engineer wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementRef {
    State { component: String, state: String },
    Transition { component: String, id: u32 },
    Event { port: String, event: String },
    TimerElapsed { event_id: i64 },
}
