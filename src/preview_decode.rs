use base64::{engine::general_purpose::STANDARD, Engine as _};
use web_sys::File;

const FALLBACK_MIME: &str = "application/octet-stream";

pub(crate) async fn read_file_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "failed to read file".to_string())?;
    let array = js_sys::Uint8Array::new(&buffer);
    Ok(array.to_vec())
}

pub(crate) fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub(crate) async fn decode_preview(file: &File) -> Result<String, String> {
    let bytes = read_file_bytes(file).await?;
    Ok(data_uri(&file.type_(), &bytes))
}
