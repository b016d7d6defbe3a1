use lanedash_kernel::Cue;

/// Receives audio cues. Playback failures stay inside the sink.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Logs each cue at debug level. Used by headless runs.
#[derive(Debug, Default)]
pub struct TracingAudio;

impl AudioSink for TracingAudio {
    fn play(&mut self, cue: Cue) {
        tracing::debug!(?cue, "audio cue");
    }
}

/// Remembers every cue it receives.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<Cue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}

/// Wraps a sink with a mute switch.
#[derive(Debug, Default)]
pub struct MutableAudio<S> {
    inner: S,
    muted: bool,
}

impl<S: AudioSink> MutableAudio<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            muted: false,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip mute. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        tracing::info!(muted = self.muted, "audio mute toggled");
        self.muted
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: AudioSink> AudioSink for MutableAudio<S> {
    fn play(&mut self, cue: Cue) {
        if !self.muted {
            self.inner.play(cue);
        }
    }
}
