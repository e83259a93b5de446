//! Procedural UI tones.
//!
//! Cues are planned here as plain [`Note`] lists; an [`AudioBackend`] turns a
//! note into an oscillator/gain pair. [`ToneSynth`] owns the one shared audio
//! context, creating it on the first cue and keeping it for the page lifetime.

use crate::constants::*;
use crate::error::Result;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToneCue {
    Hover,
    Click,
    Success,
}

/// One oscillator/gain pair. Offsets are seconds relative to the cue's "now".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub peak_gain: f32,
    pub start_offset_sec: f64,
    /// End of the exponential decay to [`ENVELOPE_FLOOR`].
    pub decay_end_sec: f64,
    pub stop_offset_sec: f64,
}

pub type CueNotes = SmallVec<[Note; 4]>;

impl ToneCue {
    pub fn notes(self) -> CueNotes {
        match self {
            ToneCue::Hover => smallvec::smallvec![Note {
                frequency_hz: HOVER_FREQ_HZ,
                waveform: Waveform::Sine,
                peak_gain: HOVER_GAIN,
                start_offset_sec: 0.0,
                decay_end_sec: HOVER_DECAY_SEC,
                stop_offset_sec: HOVER_DECAY_SEC,
            }],
            ToneCue::Click => smallvec::smallvec![Note {
                frequency_hz: CLICK_FREQ_HZ,
                waveform: Waveform::Triangle,
                peak_gain: CLICK_GAIN,
                start_offset_sec: 0.0,
                decay_end_sec: CLICK_DECAY_SEC,
                stop_offset_sec: CLICK_DECAY_SEC,
            }],
            ToneCue::Success => SUCCESS_FREQS_HZ
                .iter()
                .enumerate()
                .map(|(i, &freq)| {
                    let offset = i as f64 * SUCCESS_STEP_SEC;
                    Note {
                        frequency_hz: freq,
                        waveform: Waveform::Sine,
                        peak_gain: SUCCESS_GAIN,
                        start_offset_sec: offset,
                        decay_end_sec: offset + SUCCESS_DECAY_SEC,
                        stop_offset_sec: offset + SUCCESS_STOP_SEC,
                    }
                })
                .collect(),
        }
    }
}

/// Platform audio seam. The browser implementation wraps `AudioContext`.
pub trait AudioBackend {
    type Context;

    fn create(&mut self) -> Result<Self::Context>;
    fn is_suspended(&self, ctx: &Self::Context) -> bool;
    fn resume(&self, ctx: &Self::Context) -> Result<()>;
    fn current_time(&self, ctx: &Self::Context) -> f64;
    /// Allocate, connect, start and schedule the stop of one note at `now + offsets`.
    fn play(&self, ctx: &Self::Context, note: &Note, now: f64) -> Result<()>;
}

pub struct ToneSynth<B: AudioBackend> {
    backend: B,
    ctx: Option<B::Context>,
}

impl<B: AudioBackend> ToneSynth<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, ctx: None }
    }

    /// Whether the shared context has been created.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.ctx.is_some()
    }

    /// Play a cue. Every failure is swallowed; the return value is the number
    /// of notes that actually started.
    pub fn play(&mut self, cue: ToneCue) -> usize {
        if self.ctx.is_none() {
            match self.backend.create() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    log::debug!("[tone] context unavailable: {}", e);
                    return 0;
                }
            }
        }
        let Some(ctx) = self.ctx.as_ref() else {
            return 0;
        };
        if self.backend.is_suspended(ctx) {
            if let Err(e) = self.backend.resume(ctx) {
                log::debug!("[tone] resume failed: {}", e);
            }
        }
        let now = self.backend.current_time(ctx);
        let mut started = 0;
        for note in cue.notes() {
            match self.backend.play(ctx, &note, now) {
                Ok(()) => started += 1,
                Err(e) => log::debug!("[tone] {:?} note {}Hz dropped: {}", cue, note.frequency_hz, e),
            }
        }
        started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_an_ascending_four_note_arpeggio() {
        let notes = ToneCue::Success.notes();
        assert_eq!(notes.len(), 4);
        for (i, n) in notes.iter().enumerate() {
            assert!((n.start_offset_sec - i as f64 * 0.08).abs() < 1e-9);
            assert!(n.decay_end_sec >= n.start_offset_sec + 0.25 - 1e-9);
            assert!(n.stop_offset_sec >= n.decay_end_sec);
        }
        assert!(notes.windows(2).all(|w| w[1].frequency_hz > w[0].frequency_hz));
    }

    #[test]
    fn hover_and_click_use_distinct_shapes() {
        let hover = ToneCue::Hover.notes();
        let click = ToneCue::Click.notes();
        assert_eq!(hover[0].waveform, Waveform::Sine);
        assert_eq!(click[0].waveform, Waveform::Triangle);
        assert_ne!(hover[0].frequency_hz, click[0].frequency_hz);
        assert!(click[0].stop_offset_sec > hover[0].stop_offset_sec);
    }
}
