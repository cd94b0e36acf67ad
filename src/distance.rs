use crate::error::ConfigError;
use crate::rect::Rect;
use crate::termite::TermiteId;

/*------------------------------------------------------------------------------
DistanceCalculator struct
------------------------------------------------------------------------------*/

/// Pairwise Euclidean distance between box origins, converted from pixels to
/// physical units by the configured scale and rounded to two decimals for
/// reporting. Symmetric and non-negative by construction. Origins rather
/// than centers so reported values line up with the raw trail coordinates;
/// center adjustment is a post-processing concern.
#[derive(Debug, Clone, Copy)]
pub struct DistanceCalculator {
    scale: f32,
}

impl DistanceCalculator {
    pub fn new(scale: f32) -> Result<Self, ConfigError> {
        if scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(scale));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Per input entity, the distance to every other entity in input order.
    pub fn pairwise(
        &self,
        regions: &[(TermiteId, Rect<f32>)],
    ) -> Vec<Vec<(TermiteId, f32)>> {
        let origins: Vec<(TermiteId, (f32, f32))> = regions
            .iter()
            .map(|(id, rect)| (*id, (rect.x(), rect.y())))
            .collect();

        let mut result = Vec::with_capacity(origins.len());
        for (i, &(_, (xi, yi))) in origins.iter().enumerate() {
            let mut row = Vec::with_capacity(origins.len() - 1);
            for (j, &(other, (xj, yj))) in origins.iter().enumerate() {
                if i == j {
                    continue;
                }
                let d = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt()
                    / self.scale;
                row.push((other, round2(d)));
            }
            result.push(row);
        }
        result
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
