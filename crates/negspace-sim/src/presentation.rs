//! Outbound presentation queue.
//!
//! Systems describe what the host should draw and play; the engine drains
//! the queue into each snapshot.

use negspace_core::events::*;
use negspace_core::types::Position;

/// Events collected during one tick.
#[derive(Debug, Default)]
pub struct PresentationFrame {
    pub visual_events: Vec<VisualEvent>,
    pub audio_events: Vec<AudioEvent>,
    pub events: Vec<GameEvent>,
}

/// Handle allocator and event buffer for the renderer, mixer and HUD.
#[derive(Debug, Default)]
pub struct Presentation {
    next_visual: u32,
    next_audio: u32,
    frame: PresentationFrame,
}

impl Presentation {
    pub fn spawn_visual(
        &mut self,
        kind: VisualKind,
        position: Position,
        style: VisualStyle,
    ) -> VisualHandle {
        let handle = VisualHandle(self.next_visual);
        self.next_visual += 1;
        self.frame.visual_events.push(VisualEvent::Spawn {
            handle,
            kind,
            position,
            style,
        });
        handle
    }

    pub fn destroy_visual(&mut self, handle: VisualHandle) {
        self.frame
            .visual_events
            .push(VisualEvent::Destroy { handle });
    }

    pub fn set_transform(&mut self, handle: VisualHandle, transform: VisualTransform) {
        self.frame
            .visual_events
            .push(VisualEvent::SetTransform { handle, transform });
    }

    pub fn play_one_shot(&mut self, sound: SoundId, volume: f64) {
        self.frame
            .audio_events
            .push(AudioEvent::PlayOneShot { sound, volume });
    }

    pub fn play_loop(&mut self, music: MusicId, volume: f64) -> AudioHandle {
        let handle = AudioHandle(self.next_audio);
        self.next_audio += 1;
        self.frame.audio_events.push(AudioEvent::PlayLoop {
            music,
            volume,
            handle,
        });
        handle
    }

    pub fn stop(&mut self, handle: AudioHandle) {
        self.frame.audio_events.push(AudioEvent::Stop { handle });
    }

    /// Queue a HUD notification.
    pub fn notify(&mut self, event: GameEvent) {
        self.frame.events.push(event);
    }

    /// Take everything queued since the last drain.
    pub fn drain(&mut self) -> PresentationFrame {
        std::mem::take(&mut self.frame)
    }
}
