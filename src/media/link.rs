/// Link-sharing URL normalization
///
/// People paste whatever their photo host hands them. Direct image URLs
/// are used as-is; Google Drive share links are rewritten onto the Drive
/// thumbnail endpoint, which serves the actual bytes without the
/// interstitial "virus scan" page. Anything unrecognized passes through
/// untouched and gets its chance to load anyway.

use std::sync::LazyLock;

use regex::Regex;

/// Matches URLs that already point at an image file
static DIRECT_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpeg|jpg|gif|png|webp)$").unwrap());

/// Drive pattern 1: /file/d/<ID>/view
static DRIVE_FILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/file/d/([^/]+)").unwrap());

/// Drive pattern 2: ?id=<ID> or &id=<ID>
static DRIVE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?&]id=([^&]+)").unwrap());

/// Rewrite a shared photo URL into one that serves image bytes directly.
///
/// Direct links (by file extension, or anything on unsplash.com) come
/// back unchanged, which also makes the function idempotent: its own
/// output is never rewritten again.
pub fn resolve_photo_url(url: &str) -> String {
    if DIRECT_IMAGE.is_match(url) || url.contains("unsplash.com") {
        return url.to_string();
    }

    if url.contains("drive.google.com") {
        let id = DRIVE_FILE
            .captures(url)
            .or_else(|| DRIVE_ID.captures(url))
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str());

        if let Some(id) = id {
            // Ask for a large rendition so it stays sharp full-frame
            return format!("https://drive.google.com/thumbnail?id={id}&sz=w1920");
        }
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_urls_pass_through() {
        for url in [
            "https://example.com/photo.jpg",
            "https://example.com/photo.PNG",
            "https://example.com/a/b/c.webp",
            "https://images.unsplash.com/photo-1516589178581?q=80&w=1920",
        ] {
            assert_eq!(resolve_photo_url(url), url);
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let shared = "https://drive.google.com/file/d/1-VJmTekPEtbNUzVCbGX6i3ENlaXixPI0/view";
        let resolved = resolve_photo_url(shared);

        assert_ne!(resolved, shared);
        assert_eq!(resolve_photo_url(&resolved), resolved);
    }

    #[test]
    fn test_drive_file_link_embeds_the_id() {
        let url = "https://drive.google.com/file/d/1-VJmTekPEtbNUzVCbGX6i3ENlaXixPI0/view?usp=drive_link";
        let resolved = resolve_photo_url(url);

        assert_eq!(
            resolved,
            "https://drive.google.com/thumbnail?id=1-VJmTekPEtbNUzVCbGX6i3ENlaXixPI0&sz=w1920"
        );
    }

    #[test]
    fn test_drive_uc_link_embeds_the_id() {
        let url = "https://drive.google.com/uc?export=view&id=1OWXPZbVWR-_mHF_WNMBuovQPbYiqVpi0";
        let resolved = resolve_photo_url(url);

        assert!(resolved.contains("1OWXPZbVWR-_mHF_WNMBuovQPbYiqVpi0"));
        assert!(resolved.starts_with("https://drive.google.com/thumbnail?id="));
    }

    #[test]
    fn test_unrecognized_urls_pass_through() {
        for url in [
            "https://example.com/gallery?photo=3",
            "https://drive.google.com/drive/folders/xyz",
            "not a url at all",
        ] {
            assert_eq!(resolve_photo_url(url), url);
        }
    }
}
