//! End-to-end runs of the controller against a simulated interface.

#[cfg(test)]
mod util;
