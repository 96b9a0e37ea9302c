mod driver;
mod error;
mod simulated;

pub use driver::{SessionDriver, SessionHandle};
pub use error::{JoinError, LeaveError};
pub use simulated::{SimulatedDriver, SimulatedDriverConfig};
