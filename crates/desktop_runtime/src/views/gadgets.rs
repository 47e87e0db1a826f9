use std::time::Duration;

use leptos::html::Audio;

use super::*;
use crate::{
    clock::{self, ClockSnapshot},
    playlist::{self, PlaylistCursor},
};

pub(super) fn weather_view() -> View {
    let now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) =
        set_interval_with_handle(move || now.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="weather">
            <div class="weather-time">{move || clock::format_time(now.get())}</div>
            <div class="weather-date">{move || clock::format_date(now.get())}</div>
            <div class="weather-summary">
                <span>"Mostly Cloudy"</span>
            </div>
        </div>
    }
    .into_view()
}

fn play(audio: &web_sys::HtmlAudioElement, playing: RwSignal<bool>) {
    if let Err(err) = audio.play() {
        logging::warn!("audio playback failed: {err:?}");
        playing.set(false);
    }
}

pub(super) fn calm_mind_player_view() -> View {
    let audio_ref = create_node_ref::<Audio>();
    let cursor = create_rw_signal(PlaylistCursor::default());
    let playing = create_rw_signal(false);
    let current_time = create_rw_signal(0.0_f64);
    let duration = create_rw_signal(0.0_f64);

    // Switching tracks keeps playback going when it was already running.
    let select = move |next: PlaylistCursor| {
        cursor.set(next);
        current_time.set(0.0);
        if playing.get_untracked() {
            if let Some(audio) = audio_ref.get_untracked() {
                play(&audio, playing);
            }
        }
    };
    let toggle = move |_| {
        let Some(audio) = audio_ref.get_untracked() else {
            return;
        };
        if playing.get_untracked() {
            if let Err(err) = audio.pause() {
                logging::warn!("audio pause failed: {err:?}");
            }
        } else {
            play(&audio, playing);
        }
    };

    view! {
        <div class="player">
            <audio
                node_ref=audio_ref
                src=move || cursor.get().track().src
                preload="metadata"
                on:play=move |_| playing.set(true)
                on:pause=move |_| playing.set(false)
                on:ended=move |_| select(cursor.get_untracked().next())
                on:timeupdate=move |_| {
                    if let Some(audio) = audio_ref.get_untracked() {
                        current_time.set(audio.current_time());
                    }
                }
                on:loadedmetadata=move |_| {
                    if let Some(audio) = audio_ref.get_untracked() {
                        duration.set(audio.duration());
                    }
                }
            ></audio>
            <div class="player-art" aria-hidden="true"></div>
            <div class="player-track">
                <div class="player-title">{move || cursor.get().track().title}</div>
                <div class="player-artist">{move || cursor.get().track().artist}</div>
            </div>
            <div class="player-progress" role="progressbar">
                <div
                    class="player-progress-fill"
                    style=move || {
                        format!(
                            "width:{}%;",
                            playlist::progress_percent(current_time.get(), duration.get())
                        )
                    }
                ></div>
            </div>
            <div class="player-times">
                <span>{move || playlist::format_playback_time(current_time.get())}</span>
                <span>{move || playlist::format_playback_time(duration.get())}</span>
            </div>
            <div class="player-controls">
                <button
                    aria-label="Previous track"
                    on:click=move |_| select(cursor.get_untracked().prev())
                >
                    "⏮"
                </button>
                <button
                    aria-label=move || if playing.get() { "Pause" } else { "Play" }
                    on:click=toggle
                >
                    {move || if playing.get() { "⏸" } else { "▶" }}
                </button>
                <button
                    aria-label="Next track"
                    on:click=move |_| select(cursor.get_untracked().next())
                >
                    "⏭"
                </button>
            </div>
        </div>
    }
    .into_view()
}
