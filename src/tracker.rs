use crate::error::SessionError;
use crate::rect::Rect;

/*------------------------------------------------------------------------------
TrackerAdapter trait
------------------------------------------------------------------------------*/

/// Boundary to the single-object visual tracker (CSRT, KCF, ...). The session
/// treats the algorithm as opaque: it hands over a frame and a region and gets
/// back a handle, then feeds frames to the handle once per step.
///
/// `update` reports `found = false` when the tracker lost its target; it must
/// not fail for a well-formed frame. The returned region is meaningful only
/// when `found` is true.
pub trait TrackerAdapter<F> {
    type Handle;

    fn init(
        &mut self,
        frame: &F,
        region: &Rect<f32>,
    ) -> Result<Self::Handle, SessionError>;

    fn update(&mut self, handle: &mut Self::Handle, frame: &F)
        -> (bool, Rect<f32>);
}
