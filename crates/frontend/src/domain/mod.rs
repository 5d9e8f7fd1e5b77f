//! Back-office records managed from the dashboard.

pub mod record;
pub mod resource;
pub mod ui;
