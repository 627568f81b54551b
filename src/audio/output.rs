// Cue output using cpal
// The decoded clip lives in memory; the stream callback walks a shared play head over it.

use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};
use parking_lot::Mutex;

use super::decoder::Clip;
use super::{AudioError, Cue};

/// Position of playback within the clip, in clip frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayHead {
    position: f64,
    playing: bool,
}

impl PlayHead {
    /// Rewind and start; a running play restarts from the beginning
    pub fn restart(&mut self) {
        self.position = 0.0;
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Frame to emit now, advancing by `step` clip frames per output frame
    pub fn advance(&mut self, frames: usize, step: f64) -> Option<usize> {
        if !self.playing {
            return None;
        }
        let frame = self.position as usize;
        if frame >= frames {
            self.playing = false;
            return None;
        }
        self.position += step;
        Some(frame)
    }
}

/// Plays one preloaded clip on the default output device
pub struct TickPlayer {
    _stream: Stream,
    head: Arc<Mutex<PlayHead>>,
    clip_ms: u64,
}

impl TickPlayer {
    /// Open the default output device and park a silent stream on it
    pub fn open(clip: Clip) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::Output(e.to_string()))?;
        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();

        let clip_ms = clip.duration_ms();
        let clip = Arc::new(clip);
        let head = Arc::new(Mutex::new(PlayHead::default()));

        let stream = match sample_format {
            SampleFormat::F32 => build_stream::<f32>(&device, &config, clip, head.clone())?,
            SampleFormat::I16 => build_stream::<i16>(&device, &config, clip, head.clone())?,
            SampleFormat::U16 => build_stream::<u16>(&device, &config, clip, head.clone())?,
            format => {
                return Err(AudioError::Output(format!(
                    "Unsupported sample format: {:?}",
                    format
                )))
            }
        };

        stream
            .play()
            .map_err(|e| AudioError::Output(e.to_string()))?;

        tracing::debug!(
            rate = config.sample_rate.0,
            channels = config.channels,
            clip_ms,
            "cue output ready"
        );

        Ok(Self {
            _stream: stream,
            head,
            clip_ms,
        })
    }

    pub fn clip_ms(&self) -> u64 {
        self.clip_ms
    }
}

impl Cue for TickPlayer {
    fn play(&mut self) {
        self.head.lock().restart();
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    clip: Arc<Clip>,
    head: Arc<Mutex<PlayHead>>,
) -> Result<Stream, AudioError>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let out_channels = config.channels.max(1) as usize;
    // Nearest-frame resampling is plenty for a click
    let step = clip.sample_rate() as f64 / config.sample_rate.0.max(1) as f64;
    let frames = clip.frames();

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                let mut head = head.lock();
                for out in data.chunks_mut(out_channels) {
                    let frame = head.advance(frames, step);
                    for (channel, sample) in out.iter_mut().enumerate() {
                        let value = frame.map(|f| clip.sample(f, channel)).unwrap_or(0.0);
                        *sample = T::from_sample(value);
                    }
                }
            },
            move |err| {
                tracing::warn!("cue output error: {err}");
            },
            None,
        )
        .map_err(|e| AudioError::Output(e.to_string()))
}
