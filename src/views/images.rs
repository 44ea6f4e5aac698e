use crate::types::Image;

/// Fixed stand-in for entities with no image of the required height.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://www.freeiconspng.com/uploads/no-image-icon-15.png";

/// Target height for artist portraits.
pub const ARTIST_IMAGE_HEIGHT: u32 = 320;

/// Target height for album art on top-track cards.
pub const ALBUM_ART_HEIGHT: u32 = 300;

/// Selects the image variant matching the required pixel height.
///
/// First match wins; when no variant of that height exists the placeholder
/// URL is returned instead. Never an error to the caller.
pub fn select_image_url(images: &[Image], height: u32) -> String {
    images
        .iter()
        .find(|image| image.height == Some(height))
        .map(|image| image.url.clone())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string())
}
