//! Likert scales and triangular fuzzy numbers.

use crate::data::mean;
use crate::error::DelphiError;

/// A triangular fuzzy number `(m1, m2, m3)` with `m1 <= m2 <= m3`.
///
/// `m1` and `m3` are the lower and upper bounds of the support, `m2` is the
/// mode where membership reaches 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangularFuzzyNumber {
    pub m1: f64,
    pub m2: f64,
    pub m3: f64,
}

impl TriangularFuzzyNumber {
    /// Creates a fuzzy number from its three vertices.
    ///
    /// Returns `InvalidParameter` if the vertices are not finite or not
    /// ordered.
    pub fn new(m1: f64, m2: f64, m3: f64) -> Result<Self, DelphiError> {
        if !(m1.is_finite() && m2.is_finite() && m3.is_finite()) {
            return Err(DelphiError::invalid_parameter(
                "vertices",
                format!("must be finite, got ({m1}, {m2}, {m3})"),
            ));
        }
        if m1 > m2 || m2 > m3 {
            return Err(DelphiError::invalid_parameter(
                "vertices",
                format!("must satisfy m1 <= m2 <= m3, got ({m1}, {m2}, {m3})"),
            ));
        }
        Ok(Self { m1, m2, m3 })
    }

    pub(crate) const fn from_table(m1: f64, m2: f64, m3: f64) -> Self {
        Self { m1, m2, m3 }
    }

    /// Vertex-average centroid `(m1 + m2 + m3) / 3`.
    pub fn centroid(&self) -> f64 {
        (self.m1 + self.m2 + self.m3) / 3.0
    }

    /// Root-mean-square vertex distance to `other`.
    ///
    /// `d = sqrt(((a1-b1)^2 + (a2-b2)^2 + (a3-b3)^2) / 3)`
    pub fn distance(&self, other: &Self) -> f64 {
        let d1 = other.m1 - self.m1;
        let d2 = other.m2 - self.m2;
        let d3 = other.m3 - self.m3;
        ((d1 * d1 + d2 * d2 + d3 * d3) / 3.0).sqrt()
    }

    /// Vertex-wise mean of the present numbers in `cells`.
    ///
    /// Missing cells are skipped. Returns `None` when no cell is present.
    pub fn mean<'a, I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Option<TriangularFuzzyNumber>>,
    {
        let present: Vec<&TriangularFuzzyNumber> = cells.into_iter().flatten().collect();
        let vertex = |f: fn(&TriangularFuzzyNumber) -> f64| {
            let values: Vec<f64> = present.iter().map(|t| f(t)).collect();
            mean(&values)
        };
        Some(Self {
            m1: vertex(|t| t.m1)?,
            m2: vertex(|t| t.m2)?,
            m3: vertex(|t| t.m3)?,
        })
    }
}

const SCALE_5: [TriangularFuzzyNumber; 5] = [
    TriangularFuzzyNumber::from_table(0.0, 0.0, 0.2),
    TriangularFuzzyNumber::from_table(0.0, 0.2, 0.4),
    TriangularFuzzyNumber::from_table(0.2, 0.4, 0.6),
    TriangularFuzzyNumber::from_table(0.4, 0.6, 0.8),
    TriangularFuzzyNumber::from_table(0.6, 0.8, 1.0),
];

const SCALE_7: [TriangularFuzzyNumber; 7] = [
    TriangularFuzzyNumber::from_table(0.0, 0.0, 0.2),
    TriangularFuzzyNumber::from_table(0.0, 0.2, 0.4),
    TriangularFuzzyNumber::from_table(0.0, 0.4, 0.6),
    TriangularFuzzyNumber::from_table(0.2, 0.6, 0.8),
    TriangularFuzzyNumber::from_table(0.4, 0.8, 1.0),
    TriangularFuzzyNumber::from_table(0.6, 1.0, 1.0),
    TriangularFuzzyNumber::from_table(0.8, 1.0, 1.0),
];

/// Supported Likert scale cardinalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LikertScale {
    /// Ratings 1..=5.
    #[default]
    Five,
    /// Ratings 1..=7.
    Seven,
}

impl LikertScale {
    /// Resolves a scale from its number of points.
    ///
    /// Only 5 and 7 are supported; anything else is `InvalidParameter`.
    pub fn from_points(points: u32) -> Result<Self, DelphiError> {
        match points {
            5 => Ok(Self::Five),
            7 => Ok(Self::Seven),
            other => Err(DelphiError::invalid_parameter(
                "scale",
                format!("must be 5 or 7, got {other}"),
            )),
        }
    }

    /// Number of points on the scale.
    pub fn points(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Seven => 7,
        }
    }

    /// The fixed lookup table, indexed by `rating - 1`.
    pub fn table(self) -> &'static [TriangularFuzzyNumber] {
        match self {
            Self::Five => &SCALE_5,
            Self::Seven => &SCALE_7,
        }
    }

    /// Returns the fuzzy number for `rating`, or `None` outside `1..=points`.
    pub fn lookup(self, rating: i32) -> Option<TriangularFuzzyNumber> {
        let idx = usize::try_from(rating).ok()?.checked_sub(1)?;
        self.table().get(idx).copied()
    }

    /// Whether `rating` lies in the scale's domain.
    pub fn contains(self, rating: i32) -> bool {
        rating >= 1 && rating <= self.points() as i32
    }
}

impl TryFrom<u32> for LikertScale {
    type Error = DelphiError;

    fn try_from(points: u32) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl std::fmt::Display for LikertScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-point", self.points())
    }
}
