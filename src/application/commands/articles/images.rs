// src/application/commands/articles/images.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ImageUpload, error::ApplicationResult, validation::ValidationErrors},
    domain::article::ImageName,
};
use image::ImageFormat;
use tracing::{debug, warn};

/// Upper bound for a replacement image, in KiB.
pub const MAX_IMAGE_KILOBYTES: usize = 2048;

const ACCEPTED_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::WebP,
];

/// Sniffs the format from the leading bytes; the client's content type is not trusted.
pub(super) fn detect_format(upload: &ImageUpload) -> Option<ImageFormat> {
    image::guess_format(&upload.bytes)
        .ok()
        .filter(|format| ACCEPTED_FORMATS.contains(format))
}

pub(super) fn check_image(upload: &ImageUpload, errors: &mut ValidationErrors) {
    if detect_format(upload).is_none() {
        errors.add("image", "The image must be an image.");
    }
    if upload.len() > MAX_IMAGE_KILOBYTES * 1024 {
        errors.add(
            "image",
            format!("The image may not be greater than {MAX_IMAGE_KILOBYTES} kilobytes."),
        );
    }
}

/// The client's extension when it sent one, otherwise the sniffed format's.
pub(super) fn extension_for(upload: &ImageUpload) -> Option<String> {
    upload.client_extension().or_else(|| {
        detect_format(upload)
            .and_then(|format| format.extensions_str().first())
            .map(|ext| (*ext).to_string())
    })
}

impl ArticleCommandService {
    pub(super) async fn store_image(
        &self,
        name: &ImageName,
        upload: ImageUpload,
    ) -> ApplicationResult<()> {
        let size = upload.len();
        self.blob_store.put(name, upload.bytes).await?;
        debug!(image = %name, size, "stored article image");
        Ok(())
    }

    /// Removes an image whose row write never happened. Failures only leave an
    /// orphaned object behind, so they are logged rather than returned.
    pub(super) async fn discard_image(&self, name: &ImageName) {
        match self.blob_store.delete(name).await {
            Ok(_) => debug!(image = %name, "discarded image after aborted write"),
            Err(err) => warn!(
                image = %name,
                error = %err,
                "failed to discard image after aborted write; object is orphaned"
            ),
        }
    }
}
