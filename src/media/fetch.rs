/// Photo download and decode pipeline
///
/// Each photo is fetched once in the background, decoded, downscaled to
/// a working size, and handed to the UI as a ready-to-draw handle. A
/// failure at any step marks that one photo as failed; nothing is
/// retried and no other screen is affected.

use std::time::Duration;

use iced::widget::image::Handle;
use image::imageops::FilterType;
use reqwest::Client;
use thiserror::Error;
use tokio::task;
use tracing::info;

/// Long edge of the working rendition kept in memory
const WORKING_SIZE: u32 = 1280;

/// Everything that can go wrong on the way from URL to pixels.
///
/// Variants carry rendered messages rather than source errors so the
/// value stays `Clone` and can ride inside a UI message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("could not decode image: {0}")]
    Decode(String),
}

/// Build the shared HTTP client.
///
/// If this fails, we panic because the app cannot show photos without it.
pub fn client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(20))
        .connect_timeout(Duration::from_secs(5))
        .user_agent(concat!("miles-apart/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
}

/// Download one photo and prepare it for display.
///
/// Runs on the background executor; the result comes back to `update`
/// as a message carrying either a drawable handle or a `FetchError`.
pub async fn fetch_photo(client: Client, url: String) -> Result<Handle, FetchError> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    // Spawn blocking because decode + resize is CPU-intensive
    let handle = task::spawn_blocking(move || decode_photo(&bytes))
        .await
        .map_err(|e| FetchError::Decode(format!("task join error: {e}")))??;

    info!("📷 Fetched photo from {url}");

    Ok(handle)
}

/// Decode raw bytes and downscale to the working size
fn decode_photo(bytes: &[u8]) -> Result<Handle, FetchError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

    // Only shrink; small photos are left alone
    let working = if decoded.width() > WORKING_SIZE || decoded.height() > WORKING_SIZE {
        decoded.resize(WORKING_SIZE, WORKING_SIZE, FilterType::Lanczos3)
    } else {
        decoded
    };

    let rgba = working.into_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([200, 30, 90, 255]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_small_photo() {
        let result = decode_photo(&png_bytes(8, 8));
        assert!(result.is_ok());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_photo(b"definitely not an image");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_reports_request_errors() {
        // An unresolvable scheme fails at request time, not with a panic
        let result = fetch_photo(client(), "notascheme://nowhere/photo.jpg".to_string()).await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
