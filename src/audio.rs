use motion_core::constants::ENVELOPE_FLOOR;
use motion_core::{AudioBackend, MotionError, Note, ToneCue, ToneSynth, Waveform};
use std::cell::RefCell;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn audio_err(e: wasm_bindgen::JsValue) -> MotionError {
    MotionError::Audio(format!("{:?}", e))
}

/// WebAudio implementation of the tone backend.
pub struct WebAudio;

impl AudioBackend for WebAudio {
    type Context = web::AudioContext;

    fn create(&mut self) -> motion_core::Result<web::AudioContext> {
        web::AudioContext::new().map_err(audio_err)
    }

    fn is_suspended(&self, ctx: &web::AudioContext) -> bool {
        ctx.state() == web::AudioContextState::Suspended
    }

    fn resume(&self, ctx: &web::AudioContext) -> motion_core::Result<()> {
        let promise = ctx.resume().map_err(audio_err)?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[tone] resume rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn current_time(&self, ctx: &web::AudioContext) -> f64 {
        ctx.current_time()
    }

    fn play(&self, ctx: &web::AudioContext, note: &Note, now: f64) -> motion_core::Result<()> {
        let osc = web::OscillatorNode::new(ctx).map_err(audio_err)?;
        let gain = web::GainNode::new(ctx).map_err(audio_err)?;
        osc.set_type(match note.waveform {
            Waveform::Sine => web::OscillatorType::Sine,
            Waveform::Triangle => web::OscillatorType::Triangle,
        });
        osc.frequency().set_value(note.frequency_hz);

        let t0 = now + note.start_offset_sec;
        let g = gain.gain();
        g.set_value_at_time(note.peak_gain, t0).map_err(audio_err)?;
        g.exponential_ramp_to_value_at_time(ENVELOPE_FLOOR, now + note.decay_end_sec)
            .map_err(audio_err)?;

        osc.connect_with_audio_node(&gain).map_err(audio_err)?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(audio_err)?;
        osc.start_with_when(t0).map_err(audio_err)?;
        osc.stop_with_when(now + note.stop_offset_sec)
            .map_err(audio_err)?;
        Ok(())
    }
}

thread_local! {
    // One audio context for the page, created on the first cue.
    static SYNTH: RefCell<ToneSynth<WebAudio>> = RefCell::new(ToneSynth::new(WebAudio));
}

pub fn play(cue: ToneCue) {
    SYNTH.with(|synth| match synth.try_borrow_mut() {
        Ok(mut synth) => {
            let was_live = synth.is_live();
            let started = synth.play(cue);
            if !was_live && synth.is_live() {
                log::info!("[tone] audio context created");
            }
            log::debug!("[tone] {:?}: {} notes started", cue, started);
        }
        Err(_) => log::debug!("[tone] {:?} skipped: synth busy", cue),
    });
}
