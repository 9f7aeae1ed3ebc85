//! Wire contracts shared between the scoreboard client and the fixture server.

pub mod domain;
pub mod shared;
