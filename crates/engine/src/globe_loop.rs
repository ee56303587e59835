//! The render/input control loop.
//!
//! One state, `Running`, self-looping through:
//!
//! 1. rebuild the frame from `(Texture, RotationState)`
//! 2. present it (cursor home, overwrite in place)
//! 3. poll at most one keystroke without blocking
//! 4. apply the keystroke, or terminate on quit
//! 5. clamp pitch (every tick, key or not)
//! 6. sleep the fixed frame delay
//!
//! The frame rendered in the tick that reads the quit key is the last one.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, trace};

use crate::config::GlobeConfig;
use crate::core::{RotationState, Texture};
use crate::input::{handle_key, should_quit, KeySource};
use crate::term::{FrameBuffer, FrameSink, GlobeView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopOutcome {
    pub frames: u64,
    pub rotation: RotationState,
    /// `true` when the run ended on the quit key, `false` when `max_frames` stopped it.
    pub quit: bool,
}

pub struct GlobeLoop<'a> {
    texture: &'a Texture,
    view: GlobeView,
    fb: FrameBuffer,
    rotation: RotationState,
    step: f64,
    frame_delay: Duration,
    max_frames: Option<u64>,
    frames: u64,
}

impl<'a> GlobeLoop<'a> {
    pub fn new(texture: &'a Texture, config: &GlobeConfig) -> Self {
        let view = GlobeView::new(config.geometry());
        let mut rotation = config.initial_rotation;
        rotation.clamp_pitch();
        Self {
            texture,
            fb: FrameBuffer::new(config.screen_width, config.screen_height),
            view,
            rotation,
            step: config.rotation_step,
            frame_delay: config.frame_delay,
            max_frames: config.max_frames,
            frames: 0,
        }
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The most recently composited frame.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Run one tick without pacing.
    pub fn tick<K, S>(&mut self, keys: &mut K, sink: &mut S) -> Result<LoopState>
    where
        K: KeySource + ?Sized,
        S: FrameSink + ?Sized,
    {
        self.view.render_into(self.texture, self.rotation, &mut self.fb);
        sink.present(&self.fb)?;
        self.frames += 1;

        let state = match keys.poll_key() {
            Some(ch) if should_quit(ch) => {
                debug!(frames = self.frames, "quit key received");
                LoopState::Terminated
            }
            Some(ch) => {
                if let Some(action) = handle_key(ch) {
                    self.rotation.apply(action, self.step);
                    trace!(
                        action = action.as_str(),
                        yaw = self.rotation.yaw,
                        pitch = self.rotation.pitch,
                        "rotation updated"
                    );
                }
                LoopState::Running
            }
            None => LoopState::Running,
        };

        self.rotation.clamp_pitch();
        Ok(state)
    }

    /// Tick until the quit key (or `max_frames`), sleeping `frame_delay` between ticks.
    pub fn run<K, S>(&mut self, keys: &mut K, sink: &mut S) -> Result<LoopOutcome>
    where
        K: KeySource + ?Sized,
        S: FrameSink + ?Sized,
    {
        info!(
            width = self.view.geometry().width,
            height = self.view.geometry().height,
            "render loop started"
        );

        let quit = loop {
            if self.tick(keys, sink)? == LoopState::Terminated {
                break true;
            }
            if self.max_frames.is_some_and(|max| self.frames >= max) {
                break false;
            }
            self.pace();
        };

        let outcome = LoopOutcome {
            frames: self.frames,
            rotation: self.rotation,
            quit,
        };
        info!(frames = outcome.frames, quit = outcome.quit, "render loop finished");
        Ok(outcome)
    }

    fn pace(&self) {
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedKeys;

    #[derive(Default)]
    struct CountingSink {
        frames: usize,
    }

    impl FrameSink for CountingSink {
        fn present(&mut self, _fb: &FrameBuffer) -> Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    fn headless() -> GlobeConfig {
        GlobeConfig {
            screen_width: 16,
            screen_height: 8,
            frame_delay: Duration::ZERO,
            ..GlobeConfig::default()
        }
    }

    #[test]
    fn tick_presents_then_applies_key() {
        let texture = Texture::from_rows(["ab", "cd"]).unwrap();
        let mut lp = GlobeLoop::new(&texture, &headless());
        let mut keys = ScriptedKeys::new("d");
        let mut sink = CountingSink::default();

        assert_eq!(lp.tick(&mut keys, &mut sink).unwrap(), LoopState::Running);
        assert_eq!(sink.frames, 1);
        assert_eq!(lp.rotation().yaw, 0.1);
    }

    #[test]
    fn initial_rotation_is_clamped() {
        let texture = Texture::from_rows(["ab"]).unwrap();
        let config = GlobeConfig {
            initial_rotation: RotationState::new(0.0, 9.0),
            ..headless()
        };
        let lp = GlobeLoop::new(&texture, &config);
        assert_eq!(lp.rotation().pitch, std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn max_frames_stops_without_quit() {
        let texture = Texture::from_rows(["ab"]).unwrap();
        let config = GlobeConfig {
            max_frames: Some(3),
            ..headless()
        };
        let mut lp = GlobeLoop::new(&texture, &config);
        let out = lp
            .run(&mut ScriptedKeys::new(""), &mut CountingSink::default())
            .unwrap();
        assert_eq!(out.frames, 3);
        assert!(!out.quit);
    }
}
