//! Command implementations.

pub mod defaults;
pub mod gate;
pub mod light;
pub mod review;
pub mod sources;

pub use self::defaults::execute_defaults;
pub use self::gate::execute_gate;
pub use self::light::execute_light;
pub use self::review::execute_review;
pub use self::sources::execute_sources;

/// How a command finished when it did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command succeeded; exit code 0
    Success,
    /// The gate or a policy blocked the run; exit code 2
    Blocked,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Blocked => 2,
        }
    }
}
