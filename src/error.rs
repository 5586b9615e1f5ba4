//! Error types for icon generation.

use image::ImageError;
use thiserror::Error;

/// Failures the generator classifies before touching the filesystem.
///
/// Everything else (directory creation, file writes) is reported through
/// `anyhow` with the offending path as context.
#[derive(Debug, Error)]
pub enum IconError {
    /// The image backend in this build cannot encode the output format.
    #[error(
        "{format} encoding is not available in this build.\n\
         Rebuild with the `image` crate's `png` feature enabled:\n\
         \n    image = {{ version = \"0.24\", features = [\"png\"] }}\n\
         \n\
         Alternatively, you can:\n\
         1. Open generate-icons.html in your browser\n\
         2. Click 'Generate and Download Icons'\n\
         3. Move the downloaded files into the 'icons/' folder"
    )]
    MissingRenderingCapability {
        format: String,
        #[source]
        source: ImageError,
    },

    /// The encoder exists but failed on the probe image.
    #[error("Failed to encode {format} probe image")]
    Encode {
        format: String,
        #[source]
        source: ImageError,
    },
}
