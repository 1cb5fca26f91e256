//! Infrastructure: ports, adapters, clock, security.

pub mod clock;
pub mod ports;
pub mod security;
pub mod sqlite;
