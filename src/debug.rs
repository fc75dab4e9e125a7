/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds the per-frame
 * metrics shown by the optional on-screen overlay: FPS, frame time and
 * the current body count.
 */

use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub body_count: usize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            body_count: 0,
        }
    }
}
