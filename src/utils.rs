use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use crate::types::{
    Artist, ArtistTableRow, Candidate, CandidateTableRow, LatestMusic, LatestMusicTableRow,
    Release,
};

/// Rendered wherever an optional field is absent.
pub const PLACEHOLDER: &str = "N/A";

/// Starts a steady-ticking spinner. Callers must clear it on every exit path.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Plain text of a JSON value: strings lose their quotes, anything else is
/// rendered as JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Joins genre tags for display, falling back to [`PLACEHOLDER`].
pub fn format_genres(genres: Option<&[String]>) -> String {
    match genres {
        Some(genres) if !genres.is_empty() => genres
            .iter()
            .map(|g| title_case(g))
            .collect::<Vec<String>>()
            .join(", "),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_release(release: Option<&Release>) -> String {
    match release {
        Some(r) => format!("{} ({})", r.name, r.release_date),
        None => PLACEHOLDER.to_string(),
    }
}

/// 1-indexed rows in display order.
pub fn artist_rows(artists: &[Artist]) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            index: i + 1,
            name: a.name().to_string(),
        })
        .collect()
}

/// 1-indexed rows in the backend's relevance order.
pub fn candidate_rows(candidates: &[Candidate]) -> Vec<CandidateTableRow> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| CandidateTableRow {
            index: i + 1,
            artist: c.name.clone(),
            genres: format_genres(c.genres.as_deref()),
        })
        .collect()
}

pub fn latest_music_row(artist: &Artist, music: &LatestMusic) -> LatestMusicTableRow {
    LatestMusicTableRow {
        artist: artist.name().to_string(),
        album: format_release(music.album.as_ref()),
        single: format_release(music.single.as_ref()),
    }
}
