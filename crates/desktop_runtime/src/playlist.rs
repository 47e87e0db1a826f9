//! Track list and cursor for the Calm Mind player window.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub src: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
}

const CALM_MIND: [Track; 4] = [
    Track {
        src: "/music/peaceful-mind.mp3",
        title: "Peaceful Mind",
        artist: "Lo-fi • Chill",
    },
    Track {
        src: "/music/calm-waters.mp3",
        title: "Calm Waters",
        artist: "Lo-fi • Chill",
    },
    Track {
        src: "/music/serene-thoughts.mp3",
        title: "Serene Thoughts",
        artist: "Lo-fi • Chill",
    },
    Track {
        src: "/music/quiet-moments.mp3",
        title: "Quiet Moments",
        artist: "Lo-fi • Chill",
    },
];

pub fn calm_mind_playlist() -> &'static [Track] {
    &CALM_MIND
}

/// Position within [`calm_mind_playlist`]. Navigation wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaylistCursor(usize);

impl PlaylistCursor {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn track(self) -> &'static Track {
        &CALM_MIND[self.0 % CALM_MIND.len()]
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1) % CALM_MIND.len())
    }

    pub fn prev(self) -> Self {
        Self((self.0 + CALM_MIND.len() - 1) % CALM_MIND.len())
    }
}

/// Formats a playback offset as `m:ss`; non-finite or negative input shows `0:00`.
pub fn format_playback_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Percentage of `duration` played, `0.0` while the duration is unknown.
pub fn progress_percent(current: f64, duration: f64) -> f64 {
    if duration > 0.0 && duration.is_finite() {
        (current / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
