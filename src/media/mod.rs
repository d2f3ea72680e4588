/// Photo acquisition module
///
/// Turning a shared link into pixels happens in two steps:
/// - link.rs rewrites link-sharing URLs into direct image URLs
/// - fetch.rs downloads, decodes, and downscales the image

pub mod fetch;
pub mod link;
