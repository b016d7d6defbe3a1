use std::time::{Duration, Instant};

use lanedash_common::{GameConfig, Phase};
use lanedash_input::Action;
use lanedash_kernel::{Game, GameEvent};

use crate::audio::{AudioSink, MutableAudio};
use crate::clock::{FixedTimestep, FrameTimer};
use crate::scheduler::FrameScheduler;

/// Counters from one [`Session::pump`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Display frames shown.
    pub frames: u32,
    /// Frames that ran a simulation step.
    pub steps: u32,
}

/// One player's run of the game, driven by refresh ticks.
///
/// Actions go straight to the kernel. Each display frame ticks the cosmetic
/// clock and, if a frame request is pending, steps the game and re-requests
/// while still playing. Cues from the event log are forwarded to the audio
/// sink; the events themselves are kept until drained.
pub struct Session<S: AudioSink> {
    game: Game,
    scheduler: FrameScheduler,
    timestep: FixedTimestep,
    audio: MutableAudio<S>,
    timer: FrameTimer,
    events: Vec<GameEvent>,
}

impl<S: AudioSink> Session<S> {
    pub fn new(config: GameConfig, audio: S) -> Self {
        Self::with_game(Game::new(config), audio)
    }

    pub fn with_game(game: Game, audio: S) -> Self {
        Self {
            game,
            scheduler: FrameScheduler::new(),
            timestep: FixedTimestep::default(),
            audio: MutableAudio::new(audio),
            timer: FrameTimer::new(120),
            events: Vec::new(),
        }
    }

    /// Replace the default 60 Hz timestep.
    pub fn with_timestep(mut self, timestep: FixedTimestep) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn audio(&self) -> &MutableAudio<S> {
        &self.audio
    }

    pub fn frame_timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Whether a frame request is pending.
    pub fn running(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Report a new play-area height from the presentation layer.
    pub fn resize(&mut self, play_height: f32) {
        self.game.resize(play_height);
    }

    /// Apply one input action.
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::MoveLeft | Action::MoveRight => {
                if let Some(direction) = action.direction() {
                    self.game.move_player(direction);
                }
            }
            Action::Start => {
                if self.game.start() {
                    self.scheduler.request();
                }
            }
            Action::Replay => {
                if self.game.phase().is_terminal() {
                    self.game.reset();
                    self.scheduler.request();
                }
            }
            Action::ToggleMute => {
                self.audio.toggle();
            }
            Action::Noop => {}
        }
        self.flush_events();
    }

    /// Feed elapsed wall-clock time; runs as many frames as the timestep allows.
    pub fn pump(&mut self, elapsed: Duration) -> PumpStats {
        let _span = tracing::trace_span!("pump", ?elapsed).entered();
        let frames = self.timestep.advance(elapsed);
        let mut stats = PumpStats { frames, steps: 0 };
        for _ in 0..frames {
            if self.frame() {
                stats.steps += 1;
            }
        }
        stats
    }

    /// Show one display frame. Returns true if the simulation stepped.
    pub fn frame(&mut self) -> bool {
        let started = Instant::now();
        self.game.tick_cosmetics();

        let mut stepped = false;
        if let Some(request) = self.scheduler.take() {
            stepped = self.game.advance().is_some();
            if self.game.phase() == Phase::Playing {
                self.scheduler.request();
            } else {
                self.scheduler.cancel();
                tracing::debug!(
                    request = request.0,
                    phase = %self.game.phase(),
                    "frame loop stopped"
                );
            }
        }

        self.flush_events();
        self.timer.record(started.elapsed());
        stepped
    }

    /// Drain the events collected since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn flush_events(&mut self) {
        for event in self.game.drain_events() {
            if let Some(cue) = event.cue() {
                self.audio.play(cue);
            }
            self.events.push(event);
        }
    }
}
