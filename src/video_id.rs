/// Video identifier extraction for video-hosting URLs
use regex::Regex;
use std::sync::LazyLock;

/// Marker of a watch page anywhere in a tab URL, including redirect targets.
const WATCH_PAGE_MARKER: &str = "youtube.com/watch";

static VIDEO_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("video id pattern is valid")
});

/// Extract the 11-character video identifier from a URL
///
/// Recognized shapes:
/// - `youtube.com/watch?v=<id>` (the `v` parameter may appear anywhere in the query)
/// - `youtube.com/embed/<id>`, `youtube.com/v/<id>`, `youtube.com/e/<id>`
/// - `youtube.com/<segment>/.../<id>` (nested paths such as user uploads)
/// - `youtu.be/<id>`
///
/// Examples:
/// - https://www.youtube.com/watch?v=dQw4w9WgXcQ → dQw4w9WgXcQ
/// - https://youtu.be/dQw4w9WgXcQ?t=42 → dQw4w9WgXcQ
/// - https://vimeo.com/76979871 → None
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check whether a URL points at a video watch page
pub fn is_watch_page(url: &str) -> bool {
    url.contains(WATCH_PAGE_MARKER)
}

/// Identifier to pre-fill from the active tab, if the tab is a watch page
pub fn video_id_from_watch_page(url: &str) -> Option<String> {
    if is_watch_page(url) {
        extract_video_id(url)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_v_param_not_first() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?feature=share&v=9bZkp7q19f0"),
            Some("9bZkp7q19f0".to_string())
        );
        assert_eq!(
            extract_video_id("https://m.youtube.com/watch?list=PL123&v=9bZkp7q19f0&index=2"),
            Some("9bZkp7q19f0".to_string())
        );
    }

    #[test]
    fn test_extract_embed_and_legacy_paths() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ?version=3"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/e/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_nested_path() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/user/SomeChannel/u/1/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=42"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_extract_no_match() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://vimeo.com/76979871"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/feed/subscriptions"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_extract_token_too_short() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(extract_video_id("https://youtu.be/abc"), None);
    }

    #[test]
    fn test_extracted_id_length() {
        let id = extract_video_id("https://youtu.be/_-aZ09bY8Xw").unwrap();
        assert_eq!(id.len(), 11);
        assert_eq!(id, "_-aZ09bY8Xw");
    }

    #[test]
    fn test_is_watch_page() {
        assert!(is_watch_page("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_watch_page("https://m.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_watch_page("https://youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_watch_page("https://youtu.be/dQw4w9WgXcQ"));
        assert!(!is_watch_page("https://www.youtube.com/embed/dQw4w9WgXcQ"));
        assert!(!is_watch_page("chrome://extensions"));
        assert!(!is_watch_page("not a url"));
    }

    #[test]
    fn test_video_id_from_watch_page() {
        assert_eq!(
            video_id_from_watch_page("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(video_id_from_watch_page("https://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(video_id_from_watch_page("https://www.youtube.com/watch"), None);
        assert_eq!(video_id_from_watch_page("https://github.com/rust-lang/rust"), None);
    }

    #[test]
    fn test_watch_page_behind_redirect() {
        let url = "https://www.google.com/url?q=https://www.youtube.com/watch?v=dQw4w9WgXcQ";

        assert!(is_watch_page(url));
        assert_eq!(video_id_from_watch_page(url), Some("dQw4w9WgXcQ".to_string()));
    }
}
