//! Test fixtures: image-like payloads and multipart parts.

use axum_test::multipart::Part;

/// Minimal valid 1x1 PNG bytes.
pub fn create_minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// PNG header padded with a repeating byte pattern to exactly `size` bytes.
pub fn create_png_of_size(size: usize) -> Vec<u8> {
    let mut data = create_minimal_png();
    data.truncate(size);
    let mut byte = 0u8;
    while data.len() < size {
        data.push(byte);
        byte = byte.wrapping_add(31);
    }
    data
}

/// Minimal PDF header, used as a disallowed upload.
pub fn create_test_pdf() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF".to_vec()
}

/// File part with a filename and declared content type.
pub fn file_part(data: Vec<u8>, filename: &str, content_type: &str) -> Part {
    Part::bytes(data)
        .file_name(filename)
        .mime_type(content_type)
}
