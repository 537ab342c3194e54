// Domain layer - Core business logic
pub mod domain;

// Application layer - Sessions and screen transitions
pub mod application;

// Infrastructure layer - persistence, config, UI, rendering, input
pub mod persistence;
pub mod config;
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::{App, Action, Flow, Screen, Session};
pub use config::{Config, ColorSettings};
