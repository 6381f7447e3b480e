use crate::color::Color;
use crate::error::StyleValueError;
use crate::number::Number;
use palette::{Mix, Srgba};
use serde::{Deserialize, Serialize};

/// A gradient stop, serialized as the plotly pair `[position, color]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop(pub Number, pub Color);

impl ColorStop {
    pub fn new(position: Number, color: Color) -> Self {
        Self(position, color)
    }

    pub fn position(&self) -> f64 {
        self.0.as_f64()
    }

    pub fn color(&self) -> &Color {
        &self.1
    }
}

/// An ordered list of gradient stops covering the unit interval.
///
/// Deserialization does not check the stop ordering so that a document loader can report
/// the violation against the preset it belongs to; call [`Colorscale::validate`] after
/// loading, or build through [`Colorscale::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colorscale(Vec<ColorStop>);

impl Colorscale {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, StyleValueError> {
        let scale = Self(stops);
        scale.validate()?;
        Ok(scale)
    }

    /// Check that stops lie in [0, 1], ascend, and span exactly 0.0 to 1.0
    pub fn validate(&self) -> Result<(), StyleValueError> {
        let (first, last) = match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => (first.position(), last.position()),
            _ => return Err(StyleValueError::EmptyColorscale),
        };

        if let Some(stop) = self.0.iter().find(|s| !(0.0..=1.0).contains(&s.position())) {
            return Err(StyleValueError::StopOutOfRange(stop.position()));
        }

        if self.0.windows(2).any(|w| w[1].position() < w[0].position()) {
            return Err(StyleValueError::StopsNotAscending(self.positions()));
        }

        if first != 0.0 || last != 1.0 {
            return Err(StyleValueError::OpenEndedColorscale { first, last });
        }
        Ok(())
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.0
    }

    pub fn positions(&self) -> Vec<f64> {
        self.0.iter().map(ColorStop::position).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpolate the gradient at `t` in sRGB space.
    ///
    /// `t` is clamped to [0, 1], and NaN is treated as 0. A scale that fails
    /// [`Colorscale::validate`] is reported as an error.
    pub fn sample(&self, t: f64) -> Result<Color, StyleValueError> {
        self.validate()?;
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        // First stop at or beyond t, the lower neighbour is the one before it
        let upper_index = self
            .0
            .iter()
            .position(|s| s.position() >= t)
            .unwrap_or(self.0.len() - 1);
        if upper_index == 0 {
            return Ok(Color::from_rgba8(self.0[0].1.to_rgba8()));
        }

        let lower = &self.0[upper_index - 1];
        let upper = &self.0[upper_index];
        let span = upper.position() - lower.position();
        let factor = if span > 0.0 {
            (t - lower.position()) / span
        } else {
            1.0
        };

        let mixed = to_srgba(&lower.1).mix(to_srgba(&upper.1), factor as f32);
        Ok(Color::from_rgba8(from_srgba(mixed)))
    }
}

fn to_srgba(color: &Color) -> Srgba {
    let [r, g, b, a] = color.to_rgba8();
    Srgba::from_components((
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ))
}

fn from_srgba(color: Srgba) -> [u8; 4] {
    let (r, g, b, a) = color.into_components();
    [r, g, b, a].map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(stops: &[(f64, &str)]) -> Colorscale {
        Colorscale(
            stops
                .iter()
                .map(|(p, c)| ColorStop(Number::from_f64(*p).unwrap(), Color::parse(c).unwrap()))
                .collect(),
        )
    }

    #[test]
    fn test_validate() {
        assert!(scale(&[(0.0, "#0d7002"), (0.5, "#c1ffba"), (1.0, "#ffffff")])
            .validate()
            .is_ok());

        // Repeated positions are allowed
        assert!(scale(&[(0.0, "#000000"), (0.5, "#111111"), (0.5, "#222222"), (1.0, "#ffffff")])
            .validate()
            .is_ok());

        assert!(matches!(
            Colorscale(vec![]).validate(),
            Err(StyleValueError::EmptyColorscale)
        ));
        assert!(matches!(
            scale(&[(0.0, "#000000"), (1.5, "#ffffff")]).validate(),
            Err(StyleValueError::StopOutOfRange(p)) if p == 1.5
        ));
        assert!(matches!(
            scale(&[(0.0, "#000000"), (0.7, "#111111"), (0.3, "#222222"), (1.0, "#ffffff")])
                .validate(),
            Err(StyleValueError::StopsNotAscending(_))
        ));
        assert!(matches!(
            scale(&[(0.1, "#000000"), (1.0, "#ffffff")]).validate(),
            Err(StyleValueError::OpenEndedColorscale { .. })
        ));
    }

    #[test]
    fn test_sample_endpoints_and_stops() -> Result<(), StyleValueError> {
        let s = scale(&[(0.0, "#0d7002"), (0.5, "#c1ffba"), (1.0, "#ffffff")]);
        assert_eq!(s.sample(0.0)?.as_str(), "#0d7002");
        assert_eq!(s.sample(0.5)?.as_str(), "#c1ffba");
        assert_eq!(s.sample(1.0)?.as_str(), "#ffffff");

        // Out of range values clamp to the ends
        assert_eq!(s.sample(-3.0)?.as_str(), "#0d7002");
        assert_eq!(s.sample(7.0)?.as_str(), "#ffffff");
        assert_eq!(s.sample(f64::NAN)?.as_str(), "#0d7002");
        Ok(())
    }

    #[test]
    fn test_sample_interpolates_between_stops() -> Result<(), StyleValueError> {
        let s = scale(&[(0.0, "#000000"), (1.0, "#cc0000")]);
        assert_eq!(s.sample(0.5)?.as_str(), "#660000");

        // Uneven stop spacing uses the local segment
        let s = scale(&[(0.0, "#000000"), (0.25, "#cc0000"), (1.0, "#cc0000")]);
        assert_eq!(s.sample(0.125)?.as_str(), "#660000");
        assert_eq!(s.sample(0.6)?.as_str(), "#cc0000");
        Ok(())
    }

    #[test]
    fn test_sample_rejects_invalid_scale() {
        let descending: Colorscale =
            serde_json::from_str(r##"[[1.0, "#000000"], [0.0, "#ffffff"]]"##).unwrap();
        assert!(matches!(
            descending.sample(0.5),
            Err(StyleValueError::StopsNotAscending(_))
        ));
        assert!(matches!(
            Colorscale(vec![]).sample(0.5),
            Err(StyleValueError::EmptyColorscale)
        ));
        assert!(scale(&[(0.2, "#000000"), (0.8, "#ffffff")]).sample(0.5).is_err());
    }

    #[test]
    fn test_integer_positions_keep_spelling() {
        let src = r##"[[0,"#000000"],[0.5,"#c1ffba"],[1,"#ffffff"]]"##;
        let s: Colorscale = serde_json::from_str(src).unwrap();
        assert!(s.validate().is_ok());
        assert_eq!(s.positions(), vec![0.0, 0.5, 1.0]);
        assert_eq!(serde_json::to_string(&s).unwrap(), src);
    }

    #[test]
    fn test_serde_pairs() {
        let s: Colorscale =
            serde_json::from_str(r##"[[0.0, "#0d7002"], [0.5, "#c1ffba"], [1.0, "#ffffff"]]"##)
                .unwrap();
        assert_eq!(s.positions(), vec![0.0, 0.5, 1.0]);
        assert_eq!(s.stops()[1].color().as_str(), "#c1ffba");
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r##"[[0.0,"#0d7002"],[0.5,"#c1ffba"],[1.0,"#ffffff"]]"##
        );
    }
}
