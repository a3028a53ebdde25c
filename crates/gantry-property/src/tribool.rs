use serde::{Deserialize, Serialize};

/// Three-valued verification verdict.
///
/// `Undef` means the checker could not determine truth (timeout, resource
/// exhaustion, unsupported construct). It is a legitimate terminal answer
/// and is never coerced to `False`. Only equality and [`opposite`] are
/// defined; there is no ordering and no numeric meaning.
///
/// [`opposite`]: ThreeValued::opposite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreeValued {
    True,
    False,
    Undef,
}

impl ThreeValued {
    /// Logical negation lifted to three values: `True↔False`, `Undef↦Undef`.
    pub fn opposite(self) -> Self {
        match self {
            ThreeValued::True => ThreeValued::False,
            ThreeValued::False => ThreeValued::True,
            ThreeValued::Undef => ThreeValued::Undef,
        }
    }

    /// The definite boolean, if there is one.
    pub fn to_bool(self) -> Option<bool> {
        match self {
            ThreeValued::True => Some(true),
            ThreeValued::False => Some(false),
            ThreeValued::Undef => None,
        }
    }

    pub fn is_definite(self) -> bool {
        self != ThreeValued::Undef
    }
}

impl From<bool> for ThreeValued {
    fn from(b: bool) -> Self {
        if b {
            ThreeValued::True
        } else {
            ThreeValued::False
        }
    }
}
