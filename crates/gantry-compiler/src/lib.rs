pub mod compile;
pub mod identity;
pub mod lower;

pub use compile::{compile, compile_batch, CompileError, VerificationQuery};
pub use identity::IdentityMap;
pub use lower::{FlattenError, Flattener, LoweringError, PredicateLowering, StructuralLowering};
