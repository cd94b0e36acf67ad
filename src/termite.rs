use crate::rect::Rect;
use crate::trail::Trail;
use std::collections::BTreeSet;

/*------------------------------------------------------------------------------
Termite identity and color
------------------------------------------------------------------------------*/

pub type TermiteId = usize;

pub type Color = (u8, u8, u8);

const PALETTE: [Color; 12] = [
    (230, 25, 75),
    (60, 180, 75),
    (255, 225, 25),
    (0, 130, 200),
    (245, 130, 48),
    (145, 30, 180),
    (70, 240, 240),
    (240, 50, 230),
    (210, 245, 60),
    (250, 190, 190),
    (0, 128, 128),
    (170, 110, 40),
];

/// Colors are a pure function of identity so that runs are reproducible.
pub fn color_for(identity: TermiteId) -> Color {
    PALETTE[(identity.wrapping_sub(1)) % PALETTE.len()]
}

/*------------------------------------------------------------------------------
Termite struct
------------------------------------------------------------------------------*/

/// One tracked individual. Owns its single-object tracker handle exclusively;
/// on restart the handle is replaced wholesale, never aliased.
#[derive(Debug)]
pub struct Termite<H> {
    identity: TermiteId,
    region: Rect<f32>,
    color: Color,
    interacting_with: BTreeSet<TermiteId>,
    distances: Vec<(TermiteId, f32)>,
    trail: Trail,
    tracker: Option<H>,
    lost: bool,
}

impl<H> Termite<H> {
    pub fn new(identity: TermiteId, region: Rect<f32>) -> Self {
        Self {
            identity,
            region,
            color: color_for(identity),
            interacting_with: BTreeSet::new(),
            distances: Vec::new(),
            trail: Trail::new(),
            tracker: None,
            lost: false,
        }
    }

    pub fn identity(&self) -> TermiteId {
        self.identity
    }

    /// Display label, e.g. `t3`.
    pub fn label(&self) -> String {
        format!("t{}", self.identity)
    }

    pub fn region(&self) -> &Rect<f32> {
        &self.region
    }

    pub fn set_region(&mut self, region: Rect<f32>) {
        self.region = region;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn interacting_with(&self) -> &BTreeSet<TermiteId> {
        &self.interacting_with
    }

    pub fn set_interacting_with(&mut self, set: BTreeSet<TermiteId>) {
        self.interacting_with = set;
    }

    pub fn distances(&self) -> &[(TermiteId, f32)] {
        &self.distances
    }

    pub fn set_distances(&mut self, distances: Vec<(TermiteId, f32)>) {
        self.distances = distances;
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn trail_mut(&mut self) -> &mut Trail {
        &mut self.trail
    }

    pub fn tracker(&self) -> Option<&H> {
        self.tracker.as_ref()
    }

    pub fn tracker_mut(&mut self) -> Option<&mut H> {
        self.tracker.as_mut()
    }

    pub fn replace_tracker(&mut self, handle: H) {
        self.tracker = Some(handle);
    }

    pub fn drop_tracker(&mut self) {
        self.tracker = None;
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn mark_as_lost(&mut self) {
        self.lost = true;
    }

    pub fn mark_as_tracked(&mut self) {
        self.lost = false;
    }
}

impl<H> PartialEq for Termite<H> {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}
