//! Process-wide writer settings.
//!
//! These are the defaults every render starts from. A render reads them once,
//! through [`snapshot`], when its context is created, so changing a setting
//! never affects a render that is already running.
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Font used when neither the document nor a style names one.
pub const DEFAULT_FONT_NAME: &str = "Arial";

/// Font size in points used when neither the document nor a style sets one.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Snapshot of the process-wide settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Whether text written into markup is HTML-escaped
    pub output_escaping_enabled: bool,
    /// Default font family name
    pub default_font_name: String,
    /// Default font size in points
    pub default_font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_escaping_enabled: false,
            default_font_name: DEFAULT_FONT_NAME.to_string(),
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::default()));

/// Copy of the current settings.
pub fn snapshot() -> Settings {
    SETTINGS.read().clone()
}

/// Whether output escaping is enabled.
pub fn is_output_escaping_enabled() -> bool {
    SETTINGS.read().output_escaping_enabled
}

/// Enable or disable escaping of text content.
pub fn set_output_escaping_enabled(enabled: bool) {
    SETTINGS.write().output_escaping_enabled = enabled;
}

/// Set the default font name; blank names are ignored.
pub fn set_default_font_name(name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    SETTINGS.write().default_font_name = name.to_string();
    true
}

/// Set the default font size in points; non-positive sizes are ignored.
pub fn set_default_font_size(size: f32) -> bool {
    if !(size > 0.0) {
        return false;
    }
    SETTINGS.write().default_font_size = size;
    true
}
