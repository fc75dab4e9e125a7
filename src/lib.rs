/*
 * Planet Simulation - Module Definitions
 *
 * This file defines the module structure for the gravity sandbox.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use app::Model;
pub use body::{Body, BodyKind};
pub use camera::Viewport;
pub use debug::DebugInfo;
pub use params::SimulationParams;
pub use physics::{NudgeInput, Simulation};
pub use starfield::StarField;

// Define modules
pub mod app;
pub mod body;
pub mod camera;
pub mod debug;
pub mod input;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod starfield;
