use log::debug;

use crate::{GradientError, Rgba};

/// Places the colors at evenly spaced stops along [0.0, 1.0], so that stop
/// `i` lies at `i / (n - 1)`.
pub fn calculate_stops(colors: &[Rgba]) -> Result<Vec<f64>, GradientError> {
    if colors.len() < 2 {
        return Err(GradientError::TooFewColors {
            count: colors.len(),
        });
    }

    let last = (colors.len() - 1) as f64;
    Ok((0..colors.len()).map(|i| i as f64 / last).collect())
}

/// A pair of stops enclosing a query fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub start: usize,
    pub end: usize,
    /// Position of the query between the two stops, 0.0 at `start` and 1.0
    /// at `end`.
    pub fraction: f64,
}

/// Finds the stops enclosing `fraction`.
///
/// Stops are scanned from the second one onward. The start advances while the
/// stop is strictly less than the query, and the end is the first stop that
/// is not. A query landing exactly on a stop therefore ends the bracket
/// there, with a relative fraction of 1.0 against the preceding stop.
///
/// Queries above 1.0 leave `start == end`, whose relative fraction is NaN.
/// Returns `None` if there are fewer than two stops.
pub fn find_bracket(stops: &[f64], fraction: f64) -> Option<Bracket> {
    if stops.len() < 2 {
        return None;
    }
    Some(bracket(stops, fraction))
}

fn bracket(stops: &[f64], fraction: f64) -> Bracket {
    let mut start = 0;
    let mut end = stops.len() - 1;

    for (i, &stop) in stops.iter().enumerate().skip(1) {
        if stop < fraction {
            start = i;
        } else {
            end = i;
            break;
        }
    }

    Bracket {
        start,
        end,
        fraction: (fraction - stops[start]) / (stops[end] - stops[start]),
    }
}

/// Resolves `fraction` into the two colors to blend and the relative fraction
/// between them. `colors` and `stops` must be of equal length.
pub fn interpolation_colors(
    colors: &[Rgba],
    stops: &[f64],
    fraction: f64,
) -> Option<(Rgba, Rgba, f64)> {
    if colors.len() != stops.len() {
        return None;
    }
    let Bracket {
        start,
        end,
        fraction,
    } = find_bracket(stops, fraction)?;
    Some((colors[start], colors[end], fraction))
}

/// Builds a ramp of `resolution` colors. The first and last entries are the
/// first and last anchors unchanged, and entry `k` in between is the gradient
/// sampled at `k / resolution`.
///
/// Resolutions whose table cannot be allocated are rejected with
/// [`GradientError::ResolutionTooHigh`].
pub fn build_gradient_map(colors: &[Rgba], resolution: usize) -> Result<Vec<Rgba>, GradientError> {
    let stops = calculate_stops(colors)?;
    if resolution < 2 {
        return Err(GradientError::ResolutionTooLow { resolution });
    }

    let mut map: Vec<Rgba> = Vec::new();
    map.try_reserve_exact(resolution)
        .map_err(|_| GradientError::ResolutionTooHigh { resolution })?;
    map.push(colors[0]);
    map.extend((1..resolution - 1).map(|point| {
        let Bracket {
            start,
            end,
            fraction,
        } = bracket(&stops, point as f64 / resolution as f64);
        colors[start].interpolate(&colors[end], fraction)
    }));
    map.push(colors[colors.len() - 1]);

    Ok(map)
}

/// A precomputed color ramp, read by index or by fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientMap {
    anchors: Vec<Rgba>,
    lut: Vec<Rgba>,
}

impl GradientMap {
    /// Resolution used when building from an array of colors.
    pub const DEFAULT_RESOLUTION: usize = 256;

    pub fn new(colors: &[Rgba], resolution: usize) -> Result<Self, GradientError> {
        debug!(
            "Building gradient map from {} colors at resolution {}",
            colors.len(),
            resolution
        );
        let lut = build_gradient_map(colors, resolution)?;
        Ok(Self {
            anchors: colors.to_vec(),
            lut,
        })
    }

    pub fn len(&self) -> usize {
        self.lut.len()
    }

    /// Always false, a map holds at least two colors.
    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    pub fn anchors(&self) -> &[Rgba] {
        &self.anchors
    }

    pub fn as_slice(&self) -> &[Rgba] {
        &self.lut
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rgba> {
        self.lut.iter()
    }

    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.lut.get(index).copied()
    }

    pub fn get_or(&self, index: usize, default: Rgba) -> Rgba {
        self.get(index).unwrap_or(default)
    }

    /// Looks up the entry nearest to `fraction`, i.e. index
    /// `round(fraction * (len - 1))`. Fractions outside [0.0, 1.0] that do not
    /// round back into the map yield `None`.
    pub fn color_at(&self, fraction: f64) -> Option<Rgba> {
        self.fraction_as_index(fraction)
            .and_then(|index| self.get(index))
    }

    pub fn color_at_or(&self, fraction: f64, default: Rgba) -> Rgba {
        self.color_at(fraction).unwrap_or(default)
    }

    fn fraction_as_index(&self, fraction: f64) -> Option<usize> {
        let index = (fraction * (self.lut.len() - 1) as f64).round();
        if index.is_finite() && index >= 0.0 {
            Some(index as usize)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a GradientMap {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.lut.iter()
    }
}

impl<const N: usize> TryFrom<[Rgba; N]> for GradientMap {
    type Error = GradientError;

    fn try_from(colors: [Rgba; N]) -> Result<Self, Self::Error> {
        Self::new(&colors, Self::DEFAULT_RESOLUTION)
    }
}
