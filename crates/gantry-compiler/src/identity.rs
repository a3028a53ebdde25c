use std::collections::HashMap;

use gantry_model::statechart::{Component, ElementRef, StatechartInstance};

/// Correspondence between formal-model identities and source-model elements.
///
/// Built while lowering a single query and owned by that query alone; it is
/// never shared between queries and never mutated once compilation
/// completes. The result interpreter reads it to translate witness steps
/// back onto the model the engineer wrote.
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    entries: HashMap<String, ElementRef>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a formal identity for a source element.
    pub fn record(&mut self, formal_id: impl Into<String>, element: ElementRef) {
        self.entries.insert(formal_id.into(), element);
    }

    /// Resolve a formal identity back to its source element.
    ///
    /// `None` means the formal state is synthetic: introduced by the
    /// lowering, with no counterpart in the source model.
    pub fn resolve(&self, formal_id: &str) -> Option<&ElementRef> {
        self.entries.get(formal_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register the full structural vocabulary of an instance: every state,
    /// transition, and port event under its formal rendering.
    pub fn register_instance(&mut self, instance: &StatechartInstance, component: &Component) {
        for state in component.states.values() {
            self.record(
                format!("{}.{}", instance.name, state.name),
                ElementRef::State {
                    component: component.name.clone(),
                    state: state.name.clone(),
                },
            );
        }
        for transition in &component.transitions {
            self.record(
                format!("{}.t{}", instance.name, transition.id),
                ElementRef::Transition {
                    component: component.name.clone(),
                    id: transition.id,
                },
            );
            if let Some(trigger) = &transition.trigger {
                self.record(
                    format!("{}_{}", trigger.port, trigger.event),
                    ElementRef::Event {
                        port: trigger.port.clone(),
                        event: trigger.event.clone(),
                    },
                );
            }
        }
    }
}
