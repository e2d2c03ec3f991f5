//! Download presets and argument construction

use std::fmt;

/// Output filename template; the id keeps same-titled items from overwriting each other
pub const OUTPUT_TEMPLATE: &str = "%(title)s [%(id)s].%(ext)s";

/// Best video + best audio, or the best single stream when merging is unavailable
pub const BEST_FORMAT: &str = "bestvideo+bestaudio/best";

/// Container forced when merging separate streams
pub const MERGE_CONTAINER: &str = "mp4";

/// Audio codec for extraction
pub const AUDIO_FORMAT: &str = "mp3";

/// Best VBR quality
pub const AUDIO_QUALITY: &str = "0";

/// Preset as picked from the menu, before any custom input is collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    BestVideo,
    AudioOnly,
    PlaylistVideo,
    PlaylistAudio,
    Custom,
}

impl PresetKind {
    pub const ALL: [PresetKind; 5] = [
        PresetKind::BestVideo,
        PresetKind::AudioOnly,
        PresetKind::PlaylistVideo,
        PresetKind::PlaylistAudio,
        PresetKind::Custom,
    ];

    /// Menu key for this preset
    pub fn key(self) -> char {
        match self {
            PresetKind::BestVideo => '1',
            PresetKind::AudioOnly => '2',
            PresetKind::PlaylistVideo => '3',
            PresetKind::PlaylistAudio => '4',
            PresetKind::Custom => '5',
        }
    }

    /// Menu label for this preset
    pub fn label(self) -> &'static str {
        match self {
            PresetKind::BestVideo => "Best Quality Video (Auto-merge best video + best audio)",
            PresetKind::AudioOnly => "Audio Only (MP3 - High Quality)",
            PresetKind::PlaylistVideo => "Download entire playlist (Best Quality)",
            PresetKind::PlaylistAudio => "Download entire playlist (Audio Only MP3)",
            PresetKind::Custom => "Custom Format (Advanced users)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            let mut chars = key.chars();
            chars.next() == Some(kind.key()) && chars.next().is_none()
        })
    }
}

/// A fully specified preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preset {
    BestVideo,
    AudioOnly,
    PlaylistVideo,
    PlaylistAudio,
    /// Format selector passed through to the downloader as typed
    Custom { format: String },
}

impl Preset {
    /// Build a preset from its kind; `Custom` takes the user's format string
    pub fn from_kind(kind: PresetKind, custom_format: Option<String>) -> Self {
        match kind {
            PresetKind::BestVideo => Preset::BestVideo,
            PresetKind::AudioOnly => Preset::AudioOnly,
            PresetKind::PlaylistVideo => Preset::PlaylistVideo,
            PresetKind::PlaylistAudio => Preset::PlaylistAudio,
            PresetKind::Custom => Preset::Custom {
                format: custom_format.unwrap_or_default(),
            },
        }
    }

    pub fn kind(&self) -> PresetKind {
        match self {
            Preset::BestVideo => PresetKind::BestVideo,
            Preset::AudioOnly => PresetKind::AudioOnly,
            Preset::PlaylistVideo => PresetKind::PlaylistVideo,
            Preset::PlaylistAudio => PresetKind::PlaylistAudio,
            Preset::Custom { .. } => PresetKind::Custom,
        }
    }

    pub fn is_playlist(&self) -> bool {
        matches!(self, Preset::PlaylistVideo | Preset::PlaylistAudio)
    }

    /// Full argument list for the downloader, URL last
    pub fn build_args(&self, url: &str) -> Vec<String> {
        let mut args = vec!["-o".to_string(), OUTPUT_TEMPLATE.to_string()];

        if self.is_playlist() {
            args.push("--yes-playlist".to_string());
        }

        match self {
            Preset::BestVideo | Preset::PlaylistVideo => {
                args.extend(best_video_args());
            }
            Preset::AudioOnly | Preset::PlaylistAudio => {
                args.extend(audio_args());
            }
            Preset::Custom { format } => {
                args.push("-f".to_string());
                args.push(format.clone());
            }
        }

        args.push(url.to_string());
        args
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Custom { format } => write!(f, "custom format '{}'", format),
            other => f.write_str(other.kind().label()),
        }
    }
}

fn best_video_args() -> Vec<String> {
    vec![
        "-f".to_string(),
        BEST_FORMAT.to_string(),
        "--merge-output-format".to_string(),
        MERGE_CONTAINER.to_string(),
    ]
}

fn audio_args() -> Vec<String> {
    vec![
        "-x".to_string(),
        "--audio-format".to_string(),
        AUDIO_FORMAT.to_string(),
        "--audio-quality".to_string(),
        AUDIO_QUALITY.to_string(),
    ]
}

/// Render a command line for display; arguments are never passed through a shell
pub fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    fn all_presets() -> Vec<Preset> {
        PresetKind::ALL
            .into_iter()
            .map(|kind| Preset::from_kind(kind, Some("bestaudio".to_string())))
            .collect()
    }

    fn contains_pair(args: &[String], flag: &str, value: &str) -> bool {
        args.windows(2).any(|w| w[0] == flag && w[1] == value)
    }

    #[test]
    fn test_url_last_and_template_once() {
        for preset in all_presets() {
            let args = preset.build_args(URL);
            assert_eq!(args.last().map(String::as_str), Some(URL), "{preset}");
            assert_eq!(args.iter().filter(|a| *a == "-o").count(), 1, "{preset}");
            assert!(contains_pair(&args, "-o", OUTPUT_TEMPLATE), "{preset}");
        }
    }

    #[test]
    fn test_best_video_args() {
        let args = Preset::BestVideo.build_args(URL);
        assert!(contains_pair(&args, "-f", "bestvideo+bestaudio/best"));
        assert!(contains_pair(&args, "--merge-output-format", "mp4"));
        assert!(!args.iter().any(|a| a == "--yes-playlist"));
    }

    #[test]
    fn test_audio_only_args() {
        let args = Preset::AudioOnly.build_args(URL);
        assert!(args.iter().any(|a| a == "-x"));
        assert!(contains_pair(&args, "--audio-format", "mp3"));
        assert!(contains_pair(&args, "--audio-quality", "0"));
        assert!(!args.iter().any(|a| a == "--yes-playlist"));
    }

    #[test]
    fn test_playlist_variants_extend_single() {
        let pairs = [
            (Preset::PlaylistVideo, Preset::BestVideo),
            (Preset::PlaylistAudio, Preset::AudioOnly),
        ];
        for (playlist, single) in pairs {
            let playlist_args = playlist.build_args(URL);
            let single_args = single.build_args(URL);
            assert!(playlist_args.iter().any(|a| a == "--yes-playlist"));

            let stripped: Vec<String> = playlist_args
                .into_iter()
                .filter(|a| a != "--yes-playlist")
                .collect();
            assert_eq!(stripped, single_args);
        }
    }

    #[test]
    fn test_custom_format_passthrough() {
        let preset = Preset::Custom {
            format: "bestvideo[height<=1080]+bestaudio/best".to_string(),
        };
        let args = preset.build_args(URL);
        assert_eq!(
            args,
            vec![
                "-o",
                OUTPUT_TEMPLATE,
                "-f",
                "bestvideo[height<=1080]+bestaudio/best",
                URL
            ]
        );
    }

    #[test]
    fn test_preset_kind_from_key() {
        assert_eq!(PresetKind::from_key("1"), Some(PresetKind::BestVideo));
        assert_eq!(PresetKind::from_key("5"), Some(PresetKind::Custom));
        assert_eq!(PresetKind::from_key("6"), None);
        assert_eq!(PresetKind::from_key("11"), None);
        assert_eq!(PresetKind::from_key(""), None);
    }

    #[test]
    fn test_from_kind_round_trips_kind() {
        for kind in PresetKind::ALL {
            assert_eq!(Preset::from_kind(kind, None).kind(), kind);
        }
    }

    #[test]
    fn test_render_command() {
        let args = Preset::AudioOnly.build_args("URL");
        assert_eq!(
            render_command("yt-dlp", &args),
            "yt-dlp -o %(title)s [%(id)s].%(ext)s -x --audio-format mp3 --audio-quality 0 URL"
        );
    }
}
