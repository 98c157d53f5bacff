//! File reading and data-URI encoding for image uploads.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};

/// Whether a MIME type names an image. The upload input is restricted to
/// `image/*`, but a picker can still hand over anything.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Encode raw bytes as a base64 `data:` URI.
#[must_use]
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", BASE64_STANDARD.encode(bytes))
}

/// Read a browser `File` into a data URI.
#[cfg(feature = "csr")]
pub async fn file_to_data_uri(file: &web_sys::File) -> Result<String, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read the selected file.".to_owned())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(encode_data_uri(&file.type_(), &bytes))
}

#[cfg(test)]
#[path = "files_test.rs"]
mod tests;
