// Glue between a clip's `PlaybackSession` and its `<video>` element.
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;

use super::media_bridge;
use crate::playback::{Generation, InputModality, MediaCommand, MediaEvent, PlaybackSession};

/// Copyable handle handed to every event source of a clip. Each event goes
/// through the session reducer and the returned commands run in order.
#[derive(Clone, Copy)]
pub(super) struct ClipDriver {
    element_id: CopyValue<String>,
    session: Signal<PlaybackSession>,
    start_task: Signal<Option<Task>>,
}

impl ClipDriver {
    pub(super) fn new(
        element_id: CopyValue<String>,
        session: Signal<PlaybackSession>,
        start_task: Signal<Option<Task>>,
    ) -> Self {
        Self {
            element_id,
            session,
            start_task,
        }
    }

    pub(super) fn session(self) -> Signal<PlaybackSession> {
        self.session
    }

    #[cfg(test)]
    pub(super) fn start_pending(self) -> bool {
        self.start_task.with_peek(|task| task.is_some())
    }

    pub(super) fn dispatch(self, event: MediaEvent) {
        let mut session = self.session;
        let commands = session.write().apply(event);
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(self, command: MediaCommand) {
        let id = self.element_id.read().clone();
        let result = match command {
            MediaCommand::ScheduleStart { generation, delay } => {
                self.schedule_start(generation, delay);
                Ok(())
            }
            MediaCommand::CancelStart => {
                self.cancel_start();
                Ok(())
            }
            MediaCommand::SeekToStart => media_bridge::seek_to_start(&id),
            MediaCommand::SetMuted(muted) => media_bridge::set_muted(&id, muted),
            MediaCommand::Pause => media_bridge::pause(&id),
            MediaCommand::Play { generation, when } => {
                // Not awaited: later events may overtake the promise.
                let id = id.clone();
                spawn(async move {
                    let outcome = media_bridge::play(id, when).await;
                    self.dispatch(MediaEvent::PlaySettled {
                        generation,
                        outcome,
                    });
                });
                Ok(())
            }
        };

        if let Err(err) = result {
            debug!(clip = %id, %err, "media command skipped");
        }
    }

    fn schedule_start(self, generation: Generation, delay: Duration) {
        self.cancel_start();
        let task = spawn(async move {
            media_bridge::sleep(delay).await;
            let mut start_task = self.start_task;
            start_task.set(None);
            self.dispatch(MediaEvent::StartTimerFired(generation));
        });
        let mut start_task = self.start_task;
        start_task.set(Some(task));
    }

    fn cancel_start(self) {
        let mut start_task = self.start_task;
        if let Some(task) = start_task.take() {
            task.cancel();
        }
    }
}

/// Owns the session for one mounted clip. Visibility changes are forwarded
/// as they happen and the component's teardown dispatches `Unmounted`.
pub(super) fn use_clip_driver(
    id: &str,
    modality: InputModality,
    stagger_ms: u32,
    visible: ReadSignal<bool>,
) -> ClipDriver {
    let session = use_signal(|| {
        PlaybackSession::new(modality, Duration::from_millis(u64::from(stagger_ms)))
            .with_label(id)
    });
    let start_task = use_signal(|| None::<Task>);
    let element_id = use_hook(|| CopyValue::new(id.to_string()));
    let driver = ClipDriver::new(element_id, session, start_task);

    use_effect(move || {
        let in_view = visible();
        driver.dispatch(MediaEvent::VisibilityChanged(in_view));
    });

    use_drop(move || driver.dispatch(MediaEvent::Unmounted));

    driver
}
