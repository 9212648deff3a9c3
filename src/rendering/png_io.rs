use std::io::Cursor;
use std::path::Path;

use palette_map::RgbaBuffer;

use crate::error::ImageIoError;

/// Decode a PNG into an RGBA8 buffer.
///
/// Indexed, low bit depth and 16-bit images are expanded or stripped to
/// 8-bit channels first; gray channels are replicated into RGB and missing
/// alpha becomes 255.
pub fn decode_png(data: &[u8]) -> Result<RgbaBuffer, ImageIoError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageIoError::PngDecode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageIoError::PngDecode(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let width = info.width as usize;
    let height = info.height as usize;
    let raw = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => {
            return Err(ImageIoError::PngDecode(format!(
                "unexpected color type after expansion: {other:?}"
            )))
        }
    };

    Ok(RgbaBuffer::from_raw(width, height, raw)?)
}

/// Encode an RGBA8 buffer as PNG.
pub fn encode_png(image: &RgbaBuffer) -> Result<Vec<u8>, ImageIoError> {
    let (width, height) = dimensions(image)?;
    let data: Vec<u8> = image.pixels().iter().flat_map(|px| px.to_bytes()).collect();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageIoError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| ImageIoError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

pub fn read_png(path: &Path) -> Result<RgbaBuffer, ImageIoError> {
    let data = std::fs::read(path).map_err(|source| ImageIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(&data)
}

pub fn write_png(path: &Path, image: &RgbaBuffer) -> Result<(), ImageIoError> {
    let data = encode_png(image)?;
    std::fs::write(path, data).map_err(|source| ImageIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn dimensions(image: &RgbaBuffer) -> Result<(u32, u32), ImageIoError> {
    let unsupported = || ImageIoError::UnsupportedDimensions {
        width: image.width(),
        height: image.height(),
    };
    if image.is_empty() {
        return Err(unsupported());
    }
    let width = u32::try_from(image.width()).map_err(|_| unsupported())?;
    let height = u32::try_from(image.height()).map_err(|_| unsupported())?;
    Ok((width, height))
}
