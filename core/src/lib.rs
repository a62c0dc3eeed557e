//! Interface inspection and address changes for `machange`.
//!
//! * **[`system`]**: The OS adapter behind [`InterfaceRepository`](machange_common::system::InterfaceRepository).
//! * **[`query`]**: Reads the current and permanent addresses.
//! * **[`mutator`]**: Takes the interface down, reassigns its address and brings it back up.
//! * **[`controller`]**: Runs one validated intent end to end.

pub mod controller;
pub mod mutator;
pub mod query;
pub mod system;
