mod app;
mod session;

pub use app::{Action, App, Flow, PatternEntry, PatternSource, Screen, SettingsDraft};
pub use session::{RANDOM_DENSITY, Session};
