use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::StegoError;

/// 从内存中的图像字节解析出 RGB 像素网格。
/// 任何受支持的无损格式都可以作为输入；带透明通道的图像会被转为纯 RGB。
pub fn load_pixels(bytes: &[u8]) -> Result<RgbImage, StegoError> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// 将像素网格序列化为 PNG 字节。
/// PNG 是无损格式：除编码器显式写入的位之外，任何通道的任何位都不会改变，
/// 同一网格的序列化结果逐字节一致。
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, StegoError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgb8,
    )?;

    Ok(buffer.into_inner())
}
