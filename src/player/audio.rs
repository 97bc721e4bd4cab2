//! Audio playback engine.
//!
//! Wraps a rodio output stream and sink. Each track gets a fresh sink, so loading
//! a new song drops whatever was queued before. rodio decodes the file (wav, flac,
//! mp3, vorbis) and tracks the playback position, which the player polls to drive
//! the progress bar and the lyrics.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct AudioEngine {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    sink: Sink,
    volume: f32,
    pub duration: Option<Duration>,
    current_file_path: Option<PathBuf>,
}

impl AudioEngine {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let (stream, stream_handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&stream_handle)?;

        Ok(Self {
            _stream: stream,
            stream_handle,
            sink,
            volume: 1.0,
            duration: None,
            current_file_path: None,
        })
    }

    /// Load a track paused. `fallback_duration` is used when the decoder cannot
    /// tell the length of the file (common for VBR mp3).
    pub fn load_file(
        &mut self,
        path: &Path,
        fallback_duration: Option<Duration>,
    ) -> Result<(), Box<dyn Error>> {
        // Stop any currently playing audio
        self.sink.stop();
        self.current_file_path = None;
        self.duration = None;

        self.sink = Sink::try_new(&self.stream_handle)?;
        self.sink.set_volume(self.volume);
        self.sink.pause();

        let file = File::open(path)
            .map_err(|e| format!("Could not open {}: {e}", path.display()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .map_err(|e| format!("Could not decode {}: {e}", path.display()))?;

        log::info!(
            "Decoded {}: {} Hz, {} channels",
            path.display(),
            decoder.sample_rate(),
            decoder.channels()
        );

        self.duration = decoder.total_duration().or(fallback_duration);
        self.sink.append(decoder);
        self.current_file_path = Some(path.to_path_buf());

        log::info!("Track duration: {:?}", self.duration);
        Ok(())
    }

    pub fn play(&self) {
        self.sink.play();
    }

    pub fn pause(&self) {
        self.sink.pause();
    }

    pub fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 2.0);
        self.sink.set_volume(self.volume);
    }

    pub fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    pub fn has_track(&self) -> bool {
        self.current_file_path.is_some()
    }

    /// True once a loaded track has played to the end.
    pub fn is_finished(&self) -> bool {
        self.has_track() && self.sink.empty()
    }

    pub fn seek_to(&mut self, target: Duration) -> Result<(), Box<dyn Error>> {
        if !self.has_track() {
            return Ok(());
        }

        let target = match self.duration {
            Some(duration) => target.min(duration),
            None => target,
        };

        self.sink
            .try_seek(target)
            .map_err(|e| format!("Seek failed: {e}"))?;

        log::info!("Seek to {:.1}s", target.as_secs_f32());
        Ok(())
    }

    pub fn seek_relative(&mut self, seconds: f32) -> Result<(), Box<dyn Error>> {
        let current = self.position().as_secs_f32();
        let target = (current + seconds).max(0.0);
        self.seek_to(Duration::from_secs_f32(target))
    }
}
