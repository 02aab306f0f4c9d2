use image::ImageFormat;

/// The fixed set of formats the service will emit. Anything else the
/// client asks for, or the source turns out to be, collapses to JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// Resolve the output format: explicit `format` parameter wins, else
    /// the detected source format, else JPEG. Total over any input.
    pub fn resolve(requested: Option<&str>, detected: Option<ImageFormat>) -> Self {
        match requested {
            Some(name) => Self::from_name(&name.to_ascii_lowercase()),
            None => detected.map(Self::from_image_format).unwrap_or(Self::Jpeg),
        }
    }

    /// "jpg" normalizes to "jpeg"; unrecognized names fall back to JPEG.
    fn from_name(name: &str) -> Self {
        match name {
            "jpeg" | "jpg" => Self::Jpeg,
            "png" => Self::Png,
            "webp" => Self::WebP,
            _ => Self::Jpeg,
        }
    }

    fn from_image_format(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => Self::Png,
            ImageFormat::WebP => Self::WebP,
            _ => Self::Jpeg,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::WebP => "webp",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::WebP => ImageFormat::WebP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_parameter_wins() {
        let resolved = OutputFormat::resolve(Some("webp"), Some(ImageFormat::Jpeg));
        assert_eq!(resolved, OutputFormat::WebP);
    }

    #[test]
    fn test_jpg_normalizes_to_jpeg() {
        assert_eq!(OutputFormat::resolve(Some("jpg"), None), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::resolve(Some("JPG"), None), OutputFormat::Jpeg);
    }

    #[test]
    fn test_unrecognized_collapses_to_jpeg() {
        assert_eq!(OutputFormat::resolve(Some("gif"), Some(ImageFormat::Png)), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::resolve(Some("tiff"), None), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::resolve(Some(""), None), OutputFormat::Jpeg);
    }

    #[test]
    fn test_falls_back_to_detected_format() {
        assert_eq!(OutputFormat::resolve(None, Some(ImageFormat::Png)), OutputFormat::Png);
        assert_eq!(OutputFormat::resolve(None, Some(ImageFormat::WebP)), OutputFormat::WebP);
        assert_eq!(OutputFormat::resolve(None, Some(ImageFormat::Jpeg)), OutputFormat::Jpeg);
    }

    #[test]
    fn test_unsupported_source_format_collapses_to_jpeg() {
        assert_eq!(OutputFormat::resolve(None, Some(ImageFormat::Gif)), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::resolve(None, Some(ImageFormat::Bmp)), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::resolve(None, None), OutputFormat::Jpeg);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        for requested in ["jpeg", "jpg", "png", "webp", "gif", "", "WEBP"] {
            let first = OutputFormat::resolve(Some(requested), None);
            let second = OutputFormat::resolve(Some(first.name()), None);
            assert_eq!(first, second);
        }
    }
}
