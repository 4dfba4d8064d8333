pub mod allocation_error;

pub use allocation_error::{AllocationError, Result};
