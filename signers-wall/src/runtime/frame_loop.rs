/// Identifies one requested animation frame.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FrameId(u64);

/// Holds at most one pending frame request.
///
/// `H` is whatever the host hands back for a request. On wasm that is a
/// `gloo` `AnimationFrame`, which cancels the browser callback when dropped,
/// so [`FrameLoop::cancel`] leaves nothing scheduled.
#[derive(Debug)]
pub struct FrameLoop<H> {
    pending: Option<(FrameId, H)>,
    next_id: u64,
    frame_count: u64,
}

impl<H> Default for FrameLoop<H> {
    fn default() -> Self {
        Self {
            pending: None,
            next_id: 0,
            frame_count: 0,
        }
    }
}

impl<H> FrameLoop<H> {
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_id(&self) -> Option<FrameId> {
        self.pending.as_ref().map(|(id, _)| *id)
    }

    /// Ticks that actually ran since creation.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Requests a frame unless one is already pending.
    pub fn schedule(&mut self, request: impl FnOnce(FrameId) -> H) -> FrameId {
        if let Some(id) = self.pending_id() {
            return id;
        }

        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.pending = Some((id, request(id)));
        id
    }

    /// Called when frame `id` fires. Returns false for a frame that was
    /// cancelled or superseded, in which case the tick must do nothing.
    pub fn begin_tick(&mut self, id: FrameId) -> bool {
        match self.pending_id() {
            Some(pending) if pending == id => {
                self.pending = None;
                self.frame_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take().map(|(_, handle)| handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedules_one_frame_at_a_time() {
        let mut frames = FrameLoop::default();
        let mut requests = 0;

        let first = frames.schedule(|_| requests += 1);
        let again = frames.schedule(|_| requests += 1);

        assert_eq!(first, again);
        assert_eq!(requests, 1);
        assert!(frames.is_scheduled());
    }

    #[test]
    fn tick_consumes_the_pending_frame() {
        let mut frames = FrameLoop::default();
        let id = frames.schedule(|_| ());

        assert!(frames.begin_tick(id));
        assert!(!frames.is_scheduled());
        assert_eq!(frames.frame_count(), 1);
        assert!(!frames.begin_tick(id));
    }

    #[test]
    fn cancelled_frames_are_stale() {
        let mut frames = FrameLoop::default();
        let old = frames.schedule(|id| id);

        assert_eq!(frames.cancel(), Some(old));
        assert!(!frames.begin_tick(old));

        let new = frames.schedule(|id| id);
        assert_ne!(old, new);
        assert!(!frames.begin_tick(old));
        assert!(frames.begin_tick(new));
        assert_eq!(frames.frame_count(), 1);
    }
}
