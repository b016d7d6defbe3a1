/// Token for one requested display-refresh callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Cancellable single-slot frame request, in the manner of a browser's
/// animation-frame queue: request, then either the refresh consumes it or
/// the owner cancels it.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<FrameRequest>,
    next: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the next frame. Replaces any request already pending.
    pub fn request(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next);
        self.next += 1;
        self.pending = Some(request);
        request
    }

    /// Cancel the pending request. Returns it if there was one.
    pub fn cancel(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    /// Consume the pending request at a refresh tick.
    pub fn take(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
