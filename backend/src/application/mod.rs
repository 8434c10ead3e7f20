// Application layer - use cases and the ports they drive
// Orchestrates domain logic, depends on domain layer only

pub mod ports;
pub mod registration;
