//! 按文件头魔数识别上传内容，扩展名不可信

/// 识别文件类型，返回规范扩展名。只认辞职信允许的格式，
/// 识别不出即拒绝
pub fn detect_file_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"%PDF-") {
        return Some(".pdf");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(".jpg");
    }
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(".png");
    }
    None
}

/// 扩展名与内容是否匹配。jpg 与 jpeg 视为同一格式
pub fn extension_matches(ext: &str, detected: &str) -> bool {
    match detected {
        ".jpg" => ext == ".jpg" || ext == ".jpeg",
        other => ext == other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_formats() {
        assert_eq!(detect_file_type(b"%PDF-1.7 ..."), Some(".pdf"));
        assert_eq!(detect_file_type(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(".jpg"));
        assert_eq!(
            detect_file_type(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            Some(".png")
        );
    }

    #[test]
    fn rejects_unknown_content() {
        assert_eq!(detect_file_type(b"MZ\x90\x00"), None);
        assert_eq!(detect_file_type(b""), None);
    }

    #[test]
    fn jpeg_alias() {
        assert!(extension_matches(".jpeg", ".jpg"));
        assert!(extension_matches(".jpg", ".jpg"));
        assert!(!extension_matches(".png", ".jpg"));
    }
}
