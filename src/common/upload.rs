use crate::common::error::ApiError;
use axum::extract::multipart::Field;
use bytes::Bytes;
use futures_util::StreamExt;
use std::path::Path;

pub const ALLOWED_POSTER_EXTENSIONS: [&str; 2] = ["jpg", "png"];
pub const MAX_POSTER_BYTES: usize = 1_048_576; // 1 MB

/// A file field read fully into memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Drains a multipart file field chunk by chunk into memory.
pub async fn read_file_field(mut field: Field<'_>) -> Result<UploadedFile, ApiError> {
    let file_name = field.file_name().unwrap_or_default().to_string();

    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk: Bytes = chunk
            .map_err(|e| ApiError::InvalidRequest(format!("Upload stream interrupted: {e}")))?;
        bytes.extend_from_slice(&chunk);
    }

    Ok(UploadedFile { file_name, bytes })
}

/// Poster validation: extension first, then size. The messages are part of
/// the API contract and must not change.
pub fn validate_poster(file: &UploadedFile) -> Result<(), ApiError> {
    let extension = Path::new(&file.file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if !ALLOWED_POSTER_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ApiError::invalid("Only .png and .jpg images are allowed."));
    }

    if file.bytes.len() > MAX_POSTER_BYTES {
        return Err(ApiError::invalid("Max allowed size for poster is 1 MB."));
    }

    Ok(())
}

/// Content type of a stored poster, sniffed from its magic bytes. Only two
/// formats pass validation, so anything that is not a PNG is a JPEG.
pub fn poster_content_type(bytes: &[u8]) -> mime::Mime {
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G'];
    if bytes.starts_with(PNG_MAGIC) {
        mime::IMAGE_PNG
    } else {
        mime::IMAGE_JPEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poster(file_name: &str, size: usize) -> UploadedFile {
        UploadedFile {
            file_name: file_name.to_string(),
            bytes: vec![0u8; size],
        }
    }

    #[test]
    fn accepts_jpg_and_png_within_limit() {
        assert!(validate_poster(&poster("cover.jpg", 1024)).is_ok());
        assert!(validate_poster(&poster("cover.png", 1024)).is_ok());
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(validate_poster(&poster("COVER.JPG", 1024)).is_ok());
        assert!(validate_poster(&poster("cover.Png", 1024)).is_ok());
    }

    #[test]
    fn rejects_disallowed_extension() {
        let err = validate_poster(&poster("cover.gif", 1024)).unwrap_err();
        assert_eq!(err.to_string(), "Only .png and .jpg images are allowed.");
    }

    #[test]
    fn rejects_missing_extension() {
        let err = validate_poster(&poster("cover", 1024)).unwrap_err();
        assert_eq!(err.to_string(), "Only .png and .jpg images are allowed.");
    }

    #[test]
    fn rejects_oversized_poster() {
        let err = validate_poster(&poster("cover.jpg", 2_000_000)).unwrap_err();
        assert_eq!(err.to_string(), "Max allowed size for poster is 1 MB.");
    }

    #[test]
    fn accepts_poster_exactly_at_the_limit() {
        assert!(validate_poster(&poster("cover.jpg", MAX_POSTER_BYTES)).is_ok());
    }

    #[test]
    fn extension_is_checked_before_size() {
        // Both rules broken: the extension message wins.
        let err = validate_poster(&poster("cover.gif", 2_000_000)).unwrap_err();
        assert_eq!(err.to_string(), "Only .png and .jpg images are allowed.");
    }

    #[test]
    fn sniffs_png_and_jpeg_content_types() {
        let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        assert_eq!(poster_content_type(&png), mime::IMAGE_PNG);

        let jpeg = [0xff, 0xd8, 0xff, 0xe0];
        assert_eq!(poster_content_type(&jpeg), mime::IMAGE_JPEG);
    }
}
