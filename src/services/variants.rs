use crate::models::AssetFormat;
use anyhow::Result;
use base64::Engine;
use image::codecs::avif::AvifEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, GenericImageView};
use std::io::Cursor;

/// Width tiers for responsive delivery. Widths above the original are
/// skipped; an image smaller than the smallest tier keeps its own width.
pub const SRCSET_WIDTHS: [u32; 4] = [400, 800, 1200, 1600];

const BLUR_WIDTH: u32 = 16;
const JPEG_QUALITY: u8 = 85;
const AVIF_SPEED: u8 = 8;
const AVIF_QUALITY: u8 = 70;

pub struct VariantFile {
    pub format: AssetFormat,
    pub width: u32,
    pub data: Vec<u8>,
}

pub struct VariantSet {
    /// Intrinsic dimensions of the source image.
    pub width: u32,
    pub height: u32,
    /// Inline `data:` URL for the low-resolution placeholder.
    pub blur_data: String,
    pub files: Vec<VariantFile>,
}

/// Decode a source image and produce avif/webp/jpg variants at each
/// applicable width tier plus the blur placeholder.
pub fn generate_variants(data: &[u8]) -> Result<VariantSet> {
    let img = image::load_from_memory(data)?;
    let (orig_width, orig_height) = img.dimensions();

    let mut widths: Vec<u32> = SRCSET_WIDTHS
        .iter()
        .copied()
        .filter(|&w| w <= orig_width)
        .collect();
    if widths.is_empty() {
        widths.push(orig_width);
    }

    let mut files = Vec::new();
    for width in widths {
        let resized = if width == orig_width {
            img.clone()
        } else {
            let ratio = width as f32 / orig_width as f32;
            let height = (orig_height as f32 * ratio) as u32;
            img.resize(width, height, image::imageops::FilterType::Lanczos3)
        };

        for format in AssetFormat::ALL {
            files.push(VariantFile {
                format,
                width,
                data: encode(&resized, format)?,
            });
        }
    }

    Ok(VariantSet {
        width: orig_width,
        height: orig_height,
        blur_data: blur_placeholder(&img)?,
        files,
    })
}

fn encode(img: &DynamicImage, format: AssetFormat) -> Result<Vec<u8>> {
    match format {
        AssetFormat::Jpg => encode_jpeg(img, JPEG_QUALITY),
        AssetFormat::Webp => encode_webp(img),
        AssetFormat::Avif => encode_avif(img),
    }
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    // JPEG has no alpha channel.
    img.to_rgb8().write_with_encoder(encoder)?;
    Ok(buffer.into_inner())
}

fn encode_webp(img: &DynamicImage) -> Result<Vec<u8>> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = WebPEncoder::new_lossless(&mut buffer);
    encoder.encode(&rgba, width, height, image::ExtendedColorType::Rgba8)?;

    Ok(buffer.into_inner())
}

fn encode_avif(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = AvifEncoder::new_with_speed_quality(&mut buffer, AVIF_SPEED, AVIF_QUALITY);
    img.to_rgba8().write_with_encoder(encoder)?;
    Ok(buffer.into_inner())
}

/// Tiny JPEG rendered inline as a base64 data URL. Clients show it while
/// the real variant loads.
fn blur_placeholder(img: &DynamicImage) -> Result<String> {
    let (orig_width, orig_height) = img.dimensions();
    let width = BLUR_WIDTH.min(orig_width);
    let ratio = width as f32 / orig_width as f32;
    let height = ((orig_height as f32 * ratio) as u32).max(1);

    let tiny = img.resize_exact(width, height, image::imageops::FilterType::Triangle);
    let jpeg = encode_jpeg(&tiny, 40)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(jpeg);
    Ok(format!("data:image/jpeg;base64,{}", encoded))
}
