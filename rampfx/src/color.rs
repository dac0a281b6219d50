use serde::{Deserialize, Serialize};

/// Channel difference under which two colors compare equal.
pub const EQUALS_TOLERANCE: f64 = 0.0001;

fn opaque() -> f64 {
    1.0
}

/// An RGBA color with channels ranging from 0.0 to 1.0.
///
/// Equality is approximate: red, green and blue must each lie within
/// [`EQUALS_TOLERANCE`] of one another, and alpha is not compared at all.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl PartialEq for Rgba {
    fn eq(&self, other: &Self) -> bool {
        (self.r - other.r).abs() <= EQUALS_TOLERANCE
            && (self.g - other.g).abs() <= EQUALS_TOLERANCE
            && (self.b - other.b).abs() <= EQUALS_TOLERANCE
    }
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(142.0 / 255.0, 142.0 / 255.0, 142.0 / 255.0);
    pub const RED: Self = Self::rgb(1.0, 58.0 / 255.0, 48.0 / 255.0);
    pub const GREEN: Self = Self::rgb(52.0 / 255.0, 199.0 / 255.0, 89.0 / 255.0);
    pub const BLUE: Self = Self::rgb(0.0, 122.0 / 255.0, 1.0);
    pub const ORANGE: Self = Self::rgb(1.0, 149.0 / 255.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 204.0 / 255.0, 1.0 / 255.0);
    pub const PINK: Self = Self::rgb(1.0, 44.0 / 255.0, 85.0 / 255.0);
    pub const PURPLE: Self = Self::rgb(175.0 / 255.0, 82.0 / 255.0, 222.0 / 255.0);
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const PURE_RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const PURE_GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const PURE_BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const PURE_YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const PURE_MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    pub const PURE_ORANGE: Self = Self::rgb(1.0, 0.5, 0.0);
    pub const PURE_PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Produces an opaque color with given RGB values.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_red(self, r: f64) -> Self {
        Self { r, ..self }
    }

    pub fn with_green(self, g: f64) -> Self {
        Self { g, ..self }
    }

    pub fn with_blue(self, b: f64) -> Self {
        Self { b, ..self }
    }

    pub fn with_opacity(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Returns a color which is a linear interpolation between self and the
    /// other provided color, alpha included. A fraction of 0.0 yields self and
    /// 1.0 yields other. The fraction is not clamped, so values outside of
    /// that range extrapolate.
    pub fn interpolate(self, to: &Self, fraction: f64) -> Self {
        Self {
            r: interpolate_value(self.r, to.r, fraction),
            g: interpolate_value(self.g, to.g, fraction),
            b: interpolate_value(self.b, to.b, fraction),
            a: interpolate_value(self.a, to.a, fraction),
        }
    }

    /// Produces an instance of Rgba from a hex color code. The code can start
    /// with a hash symbol. 3-digit, 6-digit and 8-digit (with alpha) codes are
    /// accepted.
    ///
    /// In case of an invalid hex code, the function will return `None`.
    pub fn from_hex_str(code: &str) -> Option<Self> {
        let code = code.trim().trim_start_matches('#');
        if !code.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let x = u32::from_str_radix(code, 16).ok()?;
        let (r, g, b, a) = match code.len() {
            3 => (
                ((x & 0xF00) >> 8) * 0x11,
                ((x & 0x0F0) >> 4) * 0x11,
                (x & 0x00F) * 0x11,
                0xFF,
            ),
            6 => ((x & 0xFF0000) >> 16, (x & 0x00FF00) >> 8, x & 0x0000FF, 0xFF),
            8 => (
                (x & 0xFF000000) >> 24,
                (x & 0x00FF0000) >> 16,
                (x & 0x0000FF00) >> 8,
                x & 0x000000FF,
            ),
            _ => return None,
        };

        let unit = |c: u32| c as f64 / 255.0;
        Some(Self::new(unit(r), unit(g), unit(b), unit(a)))
    }

    /// Converts to 8-bit channels, clamping each channel to [0.0, 1.0] first.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// Produces a hex code with a hash symbol at the beginning. Opaque colors
    /// get 6 digits, translucent ones get 8.
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 0xFF {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Linear interpolation of a single channel.
pub fn interpolate_value(from: f64, to: f64, fraction: f64) -> f64 {
    from + (to - from) * fraction
}
