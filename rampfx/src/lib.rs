mod color;
mod error;
mod gradient;

pub use color::{interpolate_value, Rgba, EQUALS_TOLERANCE};
pub use error::GradientError;
pub use gradient::{
    build_gradient_map, calculate_stops, find_bracket, interpolation_colors, Bracket, GradientMap,
};
