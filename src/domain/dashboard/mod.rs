//! Dashboard domain — per-session aggregate state.

pub mod state;

pub use state::DashboardState;
