pub mod interpret;
pub mod oracle;
pub mod suite;

pub use interpret::{interpret, Trace, TraceStep, VerificationResult};
pub use oracle::{Oracle, OracleAnswer, OracleOutcome, RawStep, UndefReason};
pub use suite::{run_suite, SuiteOutcome};
