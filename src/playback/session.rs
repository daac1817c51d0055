//! Playback session for one embedded clip.
//! All four event sources (visibility, the delayed start, pointer input and
//! the element's `ended` event) go through `PlaybackSession::apply`, which
//! mutates the session and returns the element commands to run, in order.

use std::time::Duration;

use tracing::{debug, warn};

use super::error::MediaError;
use super::modality::{InputModality, Interaction, InteractionStrategy, SoundIntent};

/// Tag for one visible episode. Timers and play results carry the
/// generation they were issued under so late arrivals can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipPhase {
    Dormant,
    Armed,
    PlayingMuted,
    PlayingUnmuted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundGlyph {
    Muted,
    Unmuted,
}

impl SoundGlyph {
    /// Nothing is shown until the first autoplay attempt.
    pub fn for_state(has_started: bool, muted: bool) -> Option<Self> {
        match (has_started, muted) {
            (false, _) => None,
            (true, true) => Some(Self::Muted),
            (true, false) => Some(Self::Unmuted),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayWhen {
    Always,
    IfPaused,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    VisibilityChanged(bool),
    StartTimerFired(Generation),
    Interaction(Interaction),
    Ended,
    PlaySettled {
        generation: Generation,
        outcome: Result<(), MediaError>,
    },
    Unmounted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    ScheduleStart {
        generation: Generation,
        delay: Duration,
    },
    CancelStart,
    SeekToStart,
    SetMuted(bool),
    Play {
        generation: Generation,
        when: PlayWhen,
    },
    Pause,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    label: String,
    strategy: InteractionStrategy,
    stagger: Duration,
    generation: Generation,
    visible: bool,
    has_started: bool,
    muted: bool,
    interaction_active: bool,
    pending_start: Option<Generation>,
    unmounted: bool,
}

impl PlaybackSession {
    pub fn new(modality: InputModality, stagger: Duration) -> Self {
        Self {
            label: String::new(),
            strategy: modality.into(),
            stagger,
            generation: Generation::default(),
            visible: false,
            has_started: false,
            muted: true,
            interaction_active: false,
            pending_start: None,
            unmounted: false,
        }
    }

    /// Name used in log lines, usually the element id.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn interaction_active(&self) -> bool {
        self.interaction_active
    }

    pub fn pending_start(&self) -> Option<Generation> {
        self.pending_start
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn strategy(&self) -> InteractionStrategy {
        self.strategy
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    pub fn phase(&self) -> ClipPhase {
        match (self.visible, self.has_started, self.muted) {
            (false, _, _) => ClipPhase::Dormant,
            (true, false, _) => ClipPhase::Armed,
            (true, true, true) => ClipPhase::PlayingMuted,
            (true, true, false) => ClipPhase::PlayingUnmuted,
        }
    }

    /// What the sound indicator should show. Reflects intended state, so a
    /// blocked autoplay still shows the muted glyph.
    pub fn indicator(&self) -> Option<SoundGlyph> {
        SoundGlyph::for_state(self.has_started, self.muted)
    }

    pub fn apply(&mut self, event: MediaEvent) -> Vec<MediaCommand> {
        if self.unmounted {
            return Vec::new();
        }

        match event {
            MediaEvent::VisibilityChanged(true) => self.enter_view(),
            MediaEvent::VisibilityChanged(false) => self.leave_view(),
            MediaEvent::StartTimerFired(generation) => self.start(generation),
            MediaEvent::Interaction(interaction) => self.interact(interaction),
            MediaEvent::Ended => self.restart(),
            MediaEvent::PlaySettled {
                generation,
                outcome,
            } => self.settle(generation, outcome),
            MediaEvent::Unmounted => self.unmount(),
        }
    }

    fn enter_view(&mut self) -> Vec<MediaCommand> {
        if self.visible {
            return Vec::new();
        }
        self.visible = true;
        self.generation = self.generation.next();
        self.pending_start = Some(self.generation);
        debug!(
            clip = %self.label,
            generation = self.generation.value(),
            delay_ms = self.stagger.as_millis() as u64,
            "clip armed"
        );

        vec![
            MediaCommand::SeekToStart,
            MediaCommand::SetMuted(true),
            MediaCommand::ScheduleStart {
                generation: self.generation,
                delay: self.stagger,
            },
        ]
    }

    fn leave_view(&mut self) -> Vec<MediaCommand> {
        if !self.visible {
            return Vec::new();
        }
        let mut commands = Vec::with_capacity(4);
        if self.pending_start.take().is_some() {
            commands.push(MediaCommand::CancelStart);
        }
        self.visible = false;
        self.has_started = false;
        self.muted = true;
        self.interaction_active = false;
        self.generation = self.generation.next();
        debug!(clip = %self.label, generation = self.generation.value(), "clip dormant");

        commands.extend([
            MediaCommand::Pause,
            MediaCommand::SeekToStart,
            MediaCommand::SetMuted(true),
        ]);
        commands
    }

    fn start(&mut self, generation: Generation) -> Vec<MediaCommand> {
        if !self.visible || self.pending_start != Some(generation) {
            debug!(
                clip = %self.label,
                generation = generation.value(),
                "ignoring stale start timer"
            );
            return Vec::new();
        }
        self.pending_start = None;
        // Counts as started once play() is attempted, confirmed or not.
        self.has_started = true;
        self.muted = true;

        vec![
            MediaCommand::SeekToStart,
            MediaCommand::SetMuted(true),
            MediaCommand::Play {
                generation,
                when: PlayWhen::Always,
            },
        ]
    }

    fn interact(&mut self, interaction: Interaction) -> Vec<MediaCommand> {
        if !self.has_started {
            return Vec::new();
        }
        let muted = match self.strategy.intent(interaction, self.muted) {
            SoundIntent::Unmute => false,
            SoundIntent::Mute => true,
            SoundIntent::Ignore => return Vec::new(),
        };
        self.muted = muted;
        self.interaction_active = !muted;

        vec![
            MediaCommand::SetMuted(muted),
            MediaCommand::Play {
                generation: self.generation,
                when: PlayWhen::IfPaused,
            },
        ]
    }

    fn restart(&mut self) -> Vec<MediaCommand> {
        if !self.visible || !self.has_started {
            return Vec::new();
        }
        self.muted = true;
        self.interaction_active = false;
        debug!(clip = %self.label, generation = self.generation.value(), "clip looping");

        vec![
            MediaCommand::SeekToStart,
            MediaCommand::SetMuted(true),
            MediaCommand::Play {
                generation: self.generation,
                when: PlayWhen::Always,
            },
        ]
    }

    fn settle(
        &mut self,
        generation: Generation,
        outcome: Result<(), MediaError>,
    ) -> Vec<MediaCommand> {
        if generation != self.generation {
            match outcome {
                // A play() from an earlier episode resolved after teardown;
                // re-assert the dormant element state.
                Ok(()) if !self.visible => {
                    debug!(clip = %self.label, generation = generation.value(), "stale play resolved while dormant");
                    return vec![MediaCommand::Pause, MediaCommand::SeekToStart];
                }
                _ => return Vec::new(),
            }
        }

        if let Err(err) = outcome {
            if err.is_blocked() {
                warn!(clip = %self.label, phase = ?self.phase(), %err, "autoplay prevented");
            } else {
                warn!(clip = %self.label, phase = ?self.phase(), %err, "play failed");
            }
        }
        Vec::new()
    }

    fn unmount(&mut self) -> Vec<MediaCommand> {
        self.unmounted = true;
        self.generation = self.generation.next();
        if self.pending_start.take().is_some() {
            return vec![MediaCommand::CancelStart];
        }
        Vec::new()
    }
}
