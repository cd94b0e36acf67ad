use crate::rect::Rect;
use crate::termite::TermiteId;
use std::collections::BTreeSet;

/*------------------------------------------------------------------------------
InteractionKind enum
------------------------------------------------------------------------------*/

/// Which pairwise relation counts as an interaction. `BoxOverlap` is the
/// collision test of the classic experiment; `Proximity` marks encounters
/// whenever the scaled center distance falls strictly below the threshold
/// (used for e.g. trophallaxis labeling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionKind {
    BoxOverlap,
    Proximity { threshold: f32, scale: f32 },
}

/*------------------------------------------------------------------------------
InteractionDetector struct
------------------------------------------------------------------------------*/

/// Stateless pairwise detector. O(N²) over the current regions; N stays in
/// the low tens so no spatial index is warranted. Symmetric by construction:
/// the same predicate is evaluated for (a, b) and (b, a) on the same inputs.
#[derive(Debug, Clone, Copy)]
pub struct InteractionDetector {
    kind: InteractionKind,
}

impl InteractionDetector {
    pub fn new(kind: InteractionKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Per input entity, the identities of every other entity it currently
    /// interacts with, in input order. Self-pairs are excluded.
    pub fn detect(
        &self,
        regions: &[(TermiteId, Rect<f32>)],
    ) -> Vec<BTreeSet<TermiteId>> {
        let mut result = vec![BTreeSet::new(); regions.len()];
        for i in 0..regions.len() {
            for j in 0..regions.len() {
                if i == j {
                    continue;
                }
                if self.matches(&regions[i].1, &regions[j].1) {
                    result[i].insert(regions[j].0);
                }
            }
        }
        result
    }

    fn matches(&self, a: &Rect<f32>, b: &Rect<f32>) -> bool {
        match self.kind {
            InteractionKind::BoxOverlap => a.overlaps(b),
            InteractionKind::Proximity { threshold, scale } => {
                let (ax, ay) = a.center();
                let (bx, by) = b.center();
                let d = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt() / scale;
                d < threshold
            }
        }
    }
}
