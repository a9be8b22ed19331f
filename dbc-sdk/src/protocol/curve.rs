use crate::{core::CurveError, state::CurvePoint};

/// A price range with constant liquidity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub lower_sqrt_price: u128,
    pub upper_sqrt_price: u128,
    pub liquidity: u128,
}

impl Segment {
    pub fn contains(&self, sqrt_price: u128) -> bool {
        (self.lower_sqrt_price..self.upper_sqrt_price).contains(&sqrt_price)
    }
}

/// Validated piecewise liquidity curve
///
/// Built from the pool's curve points with zero-price slots removed. Each
/// pair of consecutive points forms a segment that carries the liquidity of
/// its lower point, so the top point only marks the upper boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn new(points: &[CurvePoint]) -> Result<Self, CurveError> {
        let points: Vec<CurvePoint> = points
            .iter()
            .copied()
            .filter(|point| point.sqrt_price != 0)
            .collect();

        if points.len() < 2 {
            return Err(CurveError::Empty {
                valid_points: points.len(),
            });
        }

        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].sqrt_price <= pair[0].sqrt_price)
        {
            return Err(CurveError::NonMonotonic { index: index + 1 });
        }

        Ok(Self { points })
    }

    /// Segments in ascending price order. Calling again restarts from the bottom.
    pub fn segments(
        &self,
    ) -> impl DoubleEndedIterator<Item = Segment> + ExactSizeIterator + Clone + '_ {
        self.points.windows(2).map(|pair| Segment {
            lower_sqrt_price: pair[0].sqrt_price,
            upper_sqrt_price: pair[1].sqrt_price,
            liquidity: pair[0].liquidity,
        })
    }

    pub fn segment(&self, index: usize) -> Option<Segment> {
        self.segments().nth(index)
    }

    /// Number of segments, always at least one
    pub fn len(&self) -> usize {
        self.points.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn min_sqrt_price(&self) -> u128 {
        self.points[0].sqrt_price
    }

    pub fn max_sqrt_price(&self) -> u128 {
        self.points[self.points.len() - 1].sqrt_price
    }

    pub fn clamp(&self, sqrt_price: u128) -> u128 {
        sqrt_price.clamp(self.min_sqrt_price(), self.max_sqrt_price())
    }

    /// Index of the segment with `lower <= sqrt_price < upper`.
    ///
    /// Prices below the curve map to the first segment; prices at or above
    /// the top boundary map to the last one.
    pub fn locate(&self, sqrt_price: u128) -> usize {
        let at_or_below = self
            .points
            .partition_point(|point| point.sqrt_price <= sqrt_price);
        at_or_below.saturating_sub(1).min(self.len() - 1)
    }
}
