use serde::{Deserialize, Serialize};

/// Base colors forwarded untouched to the presentation surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStyles {
    pub outline: String,
    pub background: String,
    pub foreground: String,
}

impl Default for TimelineStyles {
    fn default() -> Self {
        Self {
            outline: "#dfdfdf".to_owned(),
            background: "#f8f8f8".to_owned(),
            foreground: "#323232".to_owned(),
        }
    }
}

/// Spring parameters for surface-driven motion.
///
/// The host never animates anything itself; these values ride along on the
/// frame for the surface to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionTuning {
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            stiffness: 150.0,
            damping: 25.0,
        }
    }
}
