//! Built-in wallpaper presets cycled by the desktop's wallpaper button.

use crate::model::WallpaperId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperMediaKind {
    StaticImage,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperPreset {
    pub display_name: &'static str,
    pub media_kind: WallpaperMediaKind,
    pub url: &'static str,
}

const PRESETS: [WallpaperPreset; 2] = [
    WallpaperPreset {
        display_name: "Classic",
        media_kind: WallpaperMediaKind::StaticImage,
        url: "/wallpapers/default.png",
    },
    WallpaperPreset {
        display_name: "Harbor (live)",
        media_kind: WallpaperMediaKind::Video,
        url: "/live-wallpaper/port.mp4",
    },
];

pub fn wallpaper_presets() -> &'static [WallpaperPreset] {
    &PRESETS
}

/// Resolves `id`, falling back to the first preset for out-of-range ids.
pub fn resolve_wallpaper(id: WallpaperId) -> &'static WallpaperPreset {
    PRESETS.get(id.0).unwrap_or(&PRESETS[0])
}

pub fn next_wallpaper(id: WallpaperId) -> WallpaperId {
    WallpaperId((id.0 + 1) % PRESETS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_to_first_preset() {
        let mut id = WallpaperId::default();
        for _ in 0..wallpaper_presets().len() {
            id = next_wallpaper(id);
        }
        assert_eq!(id, WallpaperId::default());
    }

    #[test]
    fn out_of_range_id_resolves_to_default() {
        assert_eq!(resolve_wallpaper(WallpaperId(42)), &wallpaper_presets()[0]);
    }
}
