// Host-side tests for the tone synthesizer against a scripted audio backend.

use motion_core::error::{MotionError, Result};
use motion_core::tone::{AudioBackend, Note, ToneCue, ToneSynth, Waveform};
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct ScriptedAudio {
    fail_create: Cell<u32>,
    created: Cell<u32>,
    suspended: Cell<bool>,
    resumes: Cell<u32>,
    fail_freq: Option<f32>,
    played: RefCell<Vec<(Note, f64)>>,
}

// Borrowed so each test keeps reading the script after handing it to the synth.
impl AudioBackend for &ScriptedAudio {
    type Context = f64;

    fn create(&mut self) -> Result<f64> {
        if self.fail_create.get() > 0 {
            self.fail_create.set(self.fail_create.get() - 1);
            return Err(MotionError::Audio("blocked".into()));
        }
        self.created.set(self.created.get() + 1);
        Ok(10.0)
    }

    fn is_suspended(&self, _ctx: &f64) -> bool {
        self.suspended.get()
    }

    fn resume(&self, _ctx: &f64) -> Result<()> {
        self.resumes.set(self.resumes.get() + 1);
        self.suspended.set(false);
        Ok(())
    }

    fn current_time(&self, ctx: &f64) -> f64 {
        *ctx
    }

    fn play(&self, _ctx: &f64, note: &Note, now: f64) -> Result<()> {
        if Some(note.frequency_hz) == self.fail_freq {
            return Err(MotionError::Audio("oscillator".into()));
        }
        self.played.borrow_mut().push((*note, now));
        Ok(())
    }
}

#[test]
fn success_cue_schedules_four_staggered_notes() {
    let backend = ScriptedAudio::default();
    let mut synth = ToneSynth::new(&backend);
    assert_eq!(synth.play(ToneCue::Success), 4);

    let played = backend.played.borrow();
    let offsets_ms: Vec<i64> = played
        .iter()
        .map(|(n, _)| (n.start_offset_sec * 1000.0).round() as i64)
        .collect();
    assert_eq!(offsets_ms, vec![0, 80, 160, 240]);
    for (n, now) in played.iter() {
        assert_eq!(*now, 10.0);
        assert_eq!(n.waveform, Waveform::Sine);
        assert!(n.stop_offset_sec - n.start_offset_sec >= 0.25);
    }
}

#[test]
fn context_is_created_once_and_reused() {
    let backend = ScriptedAudio::default();
    let mut synth = ToneSynth::new(&backend);
    assert!(!synth.is_live());
    synth.play(ToneCue::Hover);
    synth.play(ToneCue::Click);
    synth.play(ToneCue::Hover);
    assert!(synth.is_live());
    assert_eq!(backend.created.get(), 1);
    assert_eq!(backend.played.borrow().len(), 3);
}

#[test]
fn creation_failure_skips_cue_and_retries_on_next_request() {
    let backend = ScriptedAudio::default();
    backend.fail_create.set(1);
    let mut synth = ToneSynth::new(&backend);
    assert_eq!(synth.play(ToneCue::Click), 0);
    assert!(!synth.is_live());
    assert_eq!(synth.play(ToneCue::Click), 1);
    assert!(synth.is_live());
}

#[test]
fn suspended_context_is_resumed_before_the_cue() {
    let backend = ScriptedAudio::default();
    backend.suspended.set(true);
    let mut synth = ToneSynth::new(&backend);
    synth.play(ToneCue::Hover);
    assert_eq!(backend.resumes.get(), 1);
    synth.play(ToneCue::Hover);
    assert_eq!(backend.resumes.get(), 1);
}

#[test]
fn one_failing_note_does_not_silence_the_rest() {
    let backend = ScriptedAudio {
        fail_freq: Some(659.0),
        ..Default::default()
    };
    let mut synth = ToneSynth::new(&backend);
    assert_eq!(synth.play(ToneCue::Success), 3);
    let freqs: Vec<f32> = backend
        .played
        .borrow()
        .iter()
        .map(|(n, _)| n.frequency_hz)
        .collect();
    assert_eq!(freqs, vec![523.0, 784.0, 1047.0]);
}
