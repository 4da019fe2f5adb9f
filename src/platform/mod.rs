//! Platform layer
//!
//! Everything between the outside world and the simulation:
//! - Input sources (scripted replays, the autopilot)
//! - Wall-clock pacing for the fixed-step tick
//! - The session loop that honours restart and quit

pub mod clock;
pub mod input;
pub mod session;

pub use clock::FixedStep;
pub use input::{Autopilot, InputSource, ScriptedInput};
pub use session::{Session, SessionStatus, SessionSummary};
