//! Synchronized lyrics.
//!
//! Lyric lines carry the playback time (in seconds) at which they start. The
//! active line for a playback position is the last line, in the order the
//! catalog lists them, whose time has already been reached.

use crate::catalog::LyricLine;
use crate::constants::MELODY_PLACEHOLDER;

/// Index of the last line whose timestamp is <= `time`.
pub fn active_line(lines: &[LyricLine], time: f64) -> Option<usize> {
    let mut active = None;
    for (i, line) in lines.iter().enumerate() {
        if time >= line.time {
            active = Some(i);
        }
    }
    active
}

/// Format seconds as `m:ss`.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[derive(Debug, Clone, Default)]
pub struct LyricsView {
    lines: Vec<LyricLine>,
    active: Option<usize>,
}

impl LyricsView {
    pub fn new(lines: &[LyricLine]) -> Self {
        Self {
            lines: lines.to_vec(),
            active: None,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.active = None;
    }

    /// Recompute the active line. Returns true when it changed.
    pub fn update(&mut self, time: f64) -> bool {
        let active = active_line(&self.lines, time);
        let changed = active != self.active;
        self.active = active;
        changed
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text lines to render. Songs without lyrics get the melody placeholder.
    pub fn display_lines(&self) -> Vec<&str> {
        if self.lines.is_empty() {
            vec![MELODY_PLACEHOLDER]
        } else {
            self.lines.iter().map(|l| l.text.as_str()).collect()
        }
    }
}
