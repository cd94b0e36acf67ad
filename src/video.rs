use crate::error::SessionError;

/*------------------------------------------------------------------------------
VideoSource trait
------------------------------------------------------------------------------*/

/// Sequential frame supplier. Frames are indexed from zero in the order they
/// are yielded; `seek` repositions the source so the next `next_frame` call
/// returns the frame at `frame_index`. Rewind depends on `seek` going
/// backwards, so sources that cannot seek should buffer.
pub trait VideoSource {
    type Frame;

    fn next_frame(&mut self) -> Option<Self::Frame>;

    fn seek(&mut self, frame_index: usize) -> Result<(), SessionError>;
}
