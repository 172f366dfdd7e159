//! Best-effort spin feedback: a short vibration and two tones.
//!
//! Nothing here may influence the spin itself. Every failure is logged and
//! dropped.

use crate::config::{
    MIN_TONE_MS, SPIN_END_TONE_HZ, SPIN_END_TONE_SEC, SPIN_START_TONE_HZ, SPIN_START_TONE_SEC,
    TONE_GAIN, VIBRATE_MS,
};
use gloo_timers::callback::Timeout;
use gloo_utils::window;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{AudioContext, AudioContextState, OscillatorType};

/// Feedback owned by one page session.
///
/// The audio context is created on the first tone (browsers only allow it
/// after a user gesture) and closed when the session is dropped.
pub struct Feedback {
    audio: Option<AudioContext>,
    muted: bool,
}

impl Feedback {
    pub fn new(muted: bool) -> Self {
        Self { audio: None, muted }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn spin_started(&mut self) {
        vibrate(VIBRATE_MS);
        self.tone(SPIN_START_TONE_HZ, SPIN_START_TONE_SEC);
    }

    pub fn spin_finished(&mut self) {
        self.tone(SPIN_END_TONE_HZ, SPIN_END_TONE_SEC);
    }

    fn tone(&mut self, freq_hz: f32, duration_sec: f64) {
        if self.muted {
            return;
        }
        if let Err(err) = self.play_tone(freq_hz, duration_sec) {
            warn!("Tone failed: {:?}", err);
        }
    }

    fn audio(&mut self) -> Result<&AudioContext, JsValue> {
        if self.audio.is_none() {
            let has_audio = js_sys::Reflect::has(&window(), &JsValue::from_str("AudioContext"))?;
            if !has_audio {
                return Err(JsValue::from_str("Web Audio unavailable"));
            }
            debug!("Creating audio context");
            self.audio = Some(AudioContext::new()?);
        }
        self.audio
            .as_ref()
            .ok_or_else(|| JsValue::from_str("audio context missing"))
    }

    fn play_tone(&mut self, freq_hz: f32, duration_sec: f64) -> Result<(), JsValue> {
        let ctx = self.audio()?;
        if ctx.state() == AudioContextState::Suspended {
            let resumed = JsFuture::from(ctx.resume()?);
            spawn_local(async move {
                if let Err(err) = resumed.await {
                    warn!("Audio resume failed: {:?}", err);
                }
            });
        }

        let oscillator = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        oscillator.set_type(OscillatorType::Sine);
        oscillator.frequency().set_value(freq_hz);
        gain.gain().set_value(TONE_GAIN);
        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        oscillator.start()?;

        let duration_ms = ((duration_sec * 1000.0) as u32).max(MIN_TONE_MS);
        Timeout::new(duration_ms, move || {
            let _ = oscillator.stop();
            let _ = oscillator.disconnect();
            let _ = gain.disconnect();
        })
        .forget();
        Ok(())
    }
}

impl Drop for Feedback {
    fn drop(&mut self) {
        let Some(ctx) = self.audio.take() else {
            return;
        };
        match ctx.close() {
            Ok(closing) => spawn_local(async move {
                if let Err(err) = JsFuture::from(closing).await {
                    warn!("Closing audio context failed: {:?}", err);
                }
            }),
            Err(err) => warn!("Closing audio context failed: {:?}", err),
        }
    }
}

fn vibrate(duration_ms: u32) {
    let navigator = window().navigator();
    match js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")) {
        Ok(true) => {
            if !navigator.vibrate_with_duration(duration_ms) {
                debug!("Vibration refused");
            }
        }
        Ok(false) => {}
        Err(err) => warn!("Vibration check failed: {:?}", err),
    }
}
