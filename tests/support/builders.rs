// tests/support/builders.rs
use bytes::Bytes;
use folio_core::application::dto::ImageUpload;

/// 1x1 PNG の先頭部分。形式判定にはこれで十分。
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x02\0\0\0";

pub const JPEG_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0\x01\x01\0\0\x01\0\x01\0\0";

pub fn png_upload(file_name: &str) -> ImageUpload {
    ImageUpload::new(Some(file_name.to_string()), Bytes::from_static(PNG_BYTES))
}

pub fn jpeg_upload(file_name: &str) -> ImageUpload {
    ImageUpload::new(Some(file_name.to_string()), Bytes::from_static(JPEG_BYTES))
}

pub fn upload_from(file_name: &str, bytes: Vec<u8>) -> ImageUpload {
    ImageUpload::new(Some(file_name.to_string()), Bytes::from(bytes))
}

pub const BOUNDARY: &str = "folio-test-boundary";

/// multipart/form-data 本文を組み立てる簡易ビルダー
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}
