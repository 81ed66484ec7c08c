//! Fixed values for the placeholder asset run
//!
//! Everything the generator run needs lives here; nothing is read at runtime.

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: [u8; 3] = [0x6B, 0x46, 0xC1]; // #6B46C1 brand purple
pub const TEXT_COLOR: [u8; 3] = [0xFF, 0xFF, 0xFF]; // #FFFFFF

// =============================================================================
// PATHS
// =============================================================================

/// Directory the images are written to (relative to the working directory)
pub const ASSETS_DIR: &str = "assets";

/// Font files probed in order; the first one that exists and parses wins.
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "arial.ttf",
    "Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    r"C:\Windows\Fonts\arial.ttf",
];

// =============================================================================
// ASSETS
// =============================================================================

pub const APP_NAME: &str = "LoanSnap";

/// (filename, width, height, font size)
pub const DEFAULT_ASSETS: [(&str, u32, u32, f32); 3] = [
    ("icon.png", 1024, 1024, 150.0),
    ("splash.png", 1242, 2436, 180.0),
    ("adaptive-icon.png", 1024, 1024, 150.0),
];
