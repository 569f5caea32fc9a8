//! Picture picking and decoding.
//!
//! [`PictureSource`] is the seam to the platform picker: it hands back the
//! raw bytes of exactly one picked item, or `None` when the user cancels.
//! [`load_picture`] drives a source and decodes the bytes off the async
//! executor, folding every failure into a [`PickOutcome`].

use std::future::Future;
use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::{ProfileError, ProfileResult};
use crate::state::PickTicket;

/// Media restriction passed to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaFilter {
    /// Still images only, single selection
    #[default]
    Images,
}

impl MediaFilter {
    /// Human-readable name of the filter
    pub fn label(&self) -> &'static str {
        match self {
            MediaFilter::Images => "images",
        }
    }

    /// File extensions accepted by the filter
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaFilter::Images => &["png", "jpg", "jpeg", "webp"],
        }
    }
}

/// Platform picker abstraction.
///
/// Resolves with `Ok(None)` when the user dismisses the picker without
/// choosing anything.
pub trait PictureSource: Send + Sync + 'static {
    fn pick(
        &self,
        filter: MediaFilter,
    ) -> impl Future<Output = ProfileResult<Option<Vec<u8>>>> + Send;
}

/// A decoded picture ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPicture {
    pub width: u32,
    pub height: u32,
    /// `data:image/png;base64,...`
    pub data_uri: String,
}

/// The picture currently shown on the profile card
///
/// The data URI is shared, so cloning the picture into props every frame
/// does not copy the encoded image.
#[derive(Debug, Clone)]
pub struct SelectedPicture {
    /// Ticket of the picker presentation that produced this picture
    pub ticket: PickTicket,
    pub width: u32,
    pub height: u32,
    pub data_uri: Arc<str>,
}

impl PartialEq for SelectedPicture {
    fn eq(&self, other: &Self) -> bool {
        self.ticket == other.ticket
            && self.width == other.width
            && self.height == other.height
            && (Arc::ptr_eq(&self.data_uri, &other.data_uri) || self.data_uri == other.data_uri)
    }
}

impl SelectedPicture {
    pub fn new(ticket: PickTicket, decoded: DecodedPicture) -> Self {
        Self {
            ticket,
            width: decoded.width,
            height: decoded.height,
            data_uri: decoded.data_uri.into(),
        }
    }
}

/// Result of one pick, as seen by the profile screen
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Loaded(SelectedPicture),
    Cancelled { ticket: PickTicket },
    Failed { ticket: PickTicket, reason: String },
}

impl PickOutcome {
    pub fn ticket(&self) -> PickTicket {
        match self {
            PickOutcome::Loaded(picture) => picture.ticket,
            PickOutcome::Cancelled { ticket } | PickOutcome::Failed { ticket, .. } => *ticket,
        }
    }
}

/// Decode raw image bytes into a displayable picture.
///
/// Pictures larger than `max_dimension` on either side are downscaled,
/// preserving aspect ratio.
pub fn decode_picture(bytes: &[u8], max_dimension: u32) -> ProfileResult<DecodedPicture> {
    let img = image::load_from_memory(bytes)?;
    let img = fit_within(img, max_dimension);
    let (width, height) = img.dimensions();

    // Encode as PNG (lossless)
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| ProfileError::Encode(e.to_string()))?;

    let base64 = base64::engine::general_purpose::STANDARD.encode(&buffer);
    Ok(DecodedPicture {
        width,
        height,
        data_uri: format!("data:image/png;base64,{}", base64),
    })
}

fn fit_within(img: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= max_dimension && height <= max_dimension {
        img
    } else {
        img.thumbnail(max_dimension, max_dimension)
    }
}

/// Decode on a blocking thread so large pictures don't stall the UI.
pub async fn decode_in_background(
    bytes: Vec<u8>,
    max_dimension: u32,
) -> ProfileResult<DecodedPicture> {
    tokio::task::spawn_blocking(move || decode_picture(&bytes, max_dimension))
        .await
        .map_err(|e| ProfileError::Picker(format!("decode task failed: {}", e)))?
}

/// Turn picked bytes (or their absence) into an outcome for `ticket`.
pub async fn resolve_pick(
    ticket: PickTicket,
    picked: ProfileResult<Option<Vec<u8>>>,
    max_dimension: u32,
) -> PickOutcome {
    match picked {
        Ok(Some(bytes)) => match decode_in_background(bytes, max_dimension).await {
            Ok(decoded) => PickOutcome::Loaded(SelectedPicture::new(ticket, decoded)),
            Err(e) => PickOutcome::Failed {
                ticket,
                reason: e.to_string(),
            },
        },
        Ok(None) => PickOutcome::Cancelled { ticket },
        Err(e) => PickOutcome::Failed {
            ticket,
            reason: e.to_string(),
        },
    }
}

/// Pick one image from `source` and decode it.
pub async fn load_picture<S: PictureSource>(
    source: &S,
    ticket: PickTicket,
    max_dimension: u32,
) -> PickOutcome {
    let picked = source.pick(MediaFilter::Images).await;
    resolve_pick(ticket, picked, max_dimension).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 128]));
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn image_filter_accepts_common_formats() {
        let filter = MediaFilter::default();
        assert_eq!(filter.label(), "images");
        assert!(filter.extensions().contains(&"jpg"));
        assert!(filter.extensions().contains(&"png"));
    }

    #[test]
    fn decodes_valid_png() {
        let decoded = decode_picture(&png_bytes(8, 6), 1024).unwrap();
        assert_eq!((decoded.width, decoded.height), (8, 6));
        assert!(decoded.data_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn downscales_large_pictures() {
        let decoded = decode_picture(&png_bytes(200, 100), 50).unwrap();
        assert_eq!((decoded.width, decoded.height), (50, 25));
    }

    #[test]
    fn rejects_garbage_and_empty_bytes() {
        assert!(matches!(
            decode_picture(b"not an image at all", 1024),
            Err(ProfileError::Decode(_))
        ));
        assert!(decode_picture(&[], 1024).is_err());
    }

    #[test]
    fn cloned_picture_shares_its_data_uri() {
        let decoded = decode_picture(&png_bytes(4, 4), 1024).unwrap();
        let picture = SelectedPicture::new(PickTicket(1), decoded);
        let copy = picture.clone();
        assert!(Arc::ptr_eq(&picture.data_uri, &copy.data_uri));
        assert_eq!(picture, copy);
    }

    #[test]
    fn outcome_reports_its_ticket() {
        let outcome = PickOutcome::Cancelled {
            ticket: PickTicket(7),
        };
        assert_eq!(outcome.ticket(), PickTicket(7));
    }

    #[tokio::test]
    async fn resolve_distinguishes_cancel_from_failure() {
        let ticket = PickTicket(3);
        assert_eq!(
            resolve_pick(ticket, Ok(None), 1024).await,
            PickOutcome::Cancelled { ticket }
        );

        let failed = resolve_pick(ticket, Ok(Some(b"garbage".to_vec())), 1024).await;
        assert!(matches!(failed, PickOutcome::Failed { ticket: t, .. } if t == ticket));

        let picker_err = resolve_pick(ticket, Err(ProfileError::Picker("gone".into())), 1024).await;
        assert!(matches!(picker_err, PickOutcome::Failed { .. }));
    }
}
