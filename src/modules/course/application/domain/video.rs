use regex::Regex;
use std::sync::LazyLock;

use super::entities::VideoType;

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)").expect("valid youtube regex")
});

static VIMEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vimeo\.com/(\d+)").expect("valid vimeo regex"));

pub fn extract_video_id(url: &str, video_type: VideoType) -> Option<&str> {
    let re = match video_type {
        VideoType::Youtube => &*YOUTUBE_ID,
        VideoType::Vimeo => &*VIMEO_ID,
    };
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Player URL for the video, or the original URL when no id can be found.
pub fn embed_url(url: &str, video_type: VideoType) -> String {
    match (video_type, extract_video_id(url, video_type)) {
        (VideoType::Youtube, Some(id)) => format!("https://www.youtube.com/embed/{id}"),
        (VideoType::Vimeo, Some(id)) => format!("https://player.vimeo.com/video/{id}"),
        (_, None) => url.to_string(),
    }
}
