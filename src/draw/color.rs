//! RGBA color type and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let ink = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
/// let faded = ink.with_alpha(0.5);
/// assert_eq!(faded.a, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with its alpha multiplied by `factor`.
    ///
    /// Used for the translucent hover preview.
    pub fn with_alpha(self, factor: f64) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Fully transparent; clearing to this leaves the surface empty.
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
/// Names are case-insensitive: red, green, blue, yellow, orange, pink, white,
/// black, transparent.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}
