use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

use crate::format::OutputFormat;

const ENCODE_QUALITY: u8 = 85;

/// Decoded source image plus the metadata the pipeline branches on.
pub struct SourceImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
    pub has_alpha: bool,
}

/// Decode a buffered object and record its detected format and whether
/// it carries an alpha channel.
pub fn decode(bytes: &[u8]) -> Result<SourceImage, image::ImageError> {
    let format = image::guess_format(bytes).ok();
    let image = image::load_from_memory(bytes)?;
    let has_alpha = image.color().has_alpha();
    Ok(SourceImage {
        image,
        format,
        has_alpha,
    })
}

/// Fit-inside resize preserving aspect ratio. Enlargement is permitted:
/// a source smaller than the box is scaled up to it.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize(width, height, FilterType::Lanczos3)
}

/// Encode for the resolved output format. JPEG flattens transparent
/// sources onto white first; WebP output is lossless (the only mode the
/// encoder supports).
pub fn encode(
    image: &DynamicImage,
    has_alpha: bool,
    format: OutputFormat,
) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Cursor::new(Vec::new());
    match format {
        OutputFormat::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut buf,
                CompressionType::Best,
                PngFilterType::Adaptive,
            );
            image.write_with_encoder(encoder)?;
        }
        OutputFormat::WebP => {
            let encoder = WebPEncoder::new_lossless(&mut buf);
            // The lossless encoder only accepts RGB8/RGBA8.
            if has_alpha {
                DynamicImage::ImageRgba8(image.to_rgba8()).write_with_encoder(encoder)?;
            } else {
                DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
            }
        }
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, ENCODE_QUALITY);
            let opaque = if has_alpha {
                flatten_onto_white(image)
            } else {
                DynamicImage::ImageRgb8(image.to_rgb8())
            };
            opaque.write_with_encoder(encoder)?;
        }
    }
    Ok(buf.into_inner())
}

/// Composite a transparent image onto an opaque white background.
fn flatten_onto_white(image: &DynamicImage) -> DynamicImage {
    let rgba = image.to_rgba8();
    let mut flattened = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = u32::from(pixel[3]);
        let blend = |channel: u8| ((u32::from(channel) * alpha + 255 * (255 - alpha)) / 255) as u8;
        flattened.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }
    DynamicImage::ImageRgb8(flattened)
}
