//! Wire types shared between the EcoClean admin dashboard and its backend.

pub mod domain;
pub mod system;
