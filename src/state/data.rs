/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the photo fetcher and the UI layer.

/// A single photo in the memory lane
#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    /// Stable identifier, used to key per-photo load state
    pub id: i64,
    /// Source URL as shared by the owner (may be a Drive share link)
    pub url: String,
    /// Caption shown under the photo
    pub caption: String,
}

impl Memory {
    fn new(id: i64, url: &str, caption: &str) -> Self {
        Self {
            id,
            url: url.to_string(),
            caption: caption.to_string(),
        }
    }
}

// ========== HOW TO ADD YOUR OWN PHOTOS ==========
// 1. Upload your photos to Google Drive.
// 2. Right-click -> Share -> "Anyone with the link".
// 3. Copy the link and paste it below.
//
// If it still fails: Google Drive sometimes blocks images. Upload to
// https://imgur.com/upload instead, right-click the image, choose
// "Copy Image Link", and paste that here.

/// The built-in memory lane
pub fn memories() -> Vec<Memory> {
    vec![
        Memory::new(
            1,
            "https://drive.google.com/file/d/1-VJmTekPEtbNUzVCbGX6i3ENlaXixPI0/view?usp=drive_link",
            "The Last day i saw you.",
        ),
        Memory::new(
            2,
            "https://drive.google.com/uc?export=view&id=1OWXPZbVWR-_mHF_WNMBuovQPbYiqVpi0",
            "Your birthday last year.",
        ),
        Memory::new(
            3,
            "https://drive.google.com/uc?export=view&id=1Y0EmH2FeKHExfwlV9Ts_uGfwabQAWYaI",
            "Thinking of you always.",
        ),
        Memory::new(
            4,
            "https://images.unsplash.com/photo-1516589178581-6cd7833ae3b2?q=80&w=1920&auto=format&fit=crop",
            "Can't wait to see this view with you.",
        ),
    ]
}
