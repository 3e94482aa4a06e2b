//! Reading picked files into upload-ready `ImageFile`s.

use rentdesk::types::ImageFile;

/// Content types the property form accepts.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/jpeg,image/png,image/webp,image/gif";

/// Read every file of an `<input type="file">` selection into memory.
///
/// # Errors
///
/// Returns a display message naming the first file that could not be read.
#[cfg(feature = "csr")]
pub async fn read_file_list(list: &web_sys::FileList) -> Result<Vec<ImageFile>, String> {
    let files: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.item(i)).collect();
    futures::future::try_join_all(files.iter().map(read_file)).await
}

#[cfg(feature = "csr")]
async fn read_file(file: &web_sys::File) -> Result<ImageFile, String> {
    let name = file.name();
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {name}: {e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ImageFile::new(name, content_type_for(&file.type_()), bytes))
}

/// Browsers leave `type` empty for unknown files; send a generic type then
/// and let the backend decide.
#[must_use]
pub fn content_type_for(reported: &str) -> String {
    if reported.trim().is_empty() { "application/octet-stream".to_owned() } else { reported.to_owned() }
}

/// File names for the "selected" list under the picker.
#[must_use]
pub fn summarize(files: &[ImageFile]) -> String {
    match files {
        [] => "No files selected".to_owned(),
        [one] => one.file_name.clone(),
        many => format!("{} files selected", many.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_type_gets_generic_fallback() {
        assert_eq!(content_type_for(""), "application/octet-stream");
        assert_eq!(content_type_for("image/png"), "image/png");
    }

    #[test]
    fn summarize_counts_selection() {
        let one = ImageFile::new("a.jpg", "image/jpeg", vec![1]);
        assert_eq!(summarize(&[]), "No files selected");
        assert_eq!(summarize(std::slice::from_ref(&one)), "a.jpg");
        assert_eq!(summarize(&[one.clone(), one]), "2 files selected");
    }
}
