// DOM element ids used by the page.
pub const CANVAS_ID: &str = "viz-canvas";
pub const CONFIG_SCRIPT_ID: &str = "viz-config";
pub const PLAY_BUTTON_ID: &str = "play";
pub const NEXT_BUTTON_ID: &str = "next";
pub const PREV_BUTTON_ID: &str = "prev";
pub const TRACK_LABEL_ID: &str = "track-name";
pub const HINT_OVERLAY_ID: &str = "hint-overlay";

// Scene
pub const CAMERA_TARGET_Y: f32 = 2.0; // look slightly above the ground plane
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Brightness added to an instance per unit of mapped height (shader side)
pub const HEIGHT_GLOW: f32 = 0.12;
