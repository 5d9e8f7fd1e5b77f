//! Route paths outside the feature catalogue.

pub const LOGIN: &str = "/login";
/// Landing screen of every signed-in user; also where denied navigation ends up.
pub const DASHBOARD: &str = "/dashboard";
