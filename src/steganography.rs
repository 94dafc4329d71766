use crate::bits::{bits_to_text, text_to_bits};
use crate::constants::{BITS_PER_CHAR, DELIMITER};
use crate::error::StegoError;
use crate::image_io::{encode_png, load_pixels};

/// 给定尺寸的图像可以嵌入的位数：每个像素 3 个颜色通道，每通道 1 位。
pub fn capacity_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// 把文本嵌入图像的像素数据，返回嵌入后的 PNG 字节。
///
/// 消息位流 (文本 + 结束定界符) 按行优先顺序写入各通道的最低有效位，
/// 写完即停，其余通道保持原样。容量不足时在修改任何像素之前报错。
pub fn hide_text_in_image(image_bytes: &[u8], secret_text: &str) -> Result<Vec<u8>, StegoError> {
    let mut img = load_pixels(image_bytes)?;

    let mut payload = text_to_bits(secret_text)?;
    payload.extend_from_slice(&DELIMITER);

    let available = capacity_bits(img.width(), img.height());
    if payload.len() > available {
        return Err(StegoError::Capacity {
            required: payload.len(),
            available,
        });
    }

    // RgbImage 的原始缓冲区本身就是行优先的 R, G, B 通道序列，
    // 与 zip 配合可以在消息写完的位置精确停下。
    for (channel, &bit) in img.iter_mut().zip(payload.iter()) {
        *channel = (*channel & !1) | bit;
    }

    encode_png(&img)
}

/// 从图像的像素数据中提取隐藏的文本。
///
/// 收集整幅图像每个通道的最低有效位，再搜索结束定界符的首次出现。
/// 找不到定界符说明图像没有嵌入消息，返回 `Ok(None)`。
///
/// 已知局限：如果消息自身的位流恰好包含定界符模式 (例如文本中
/// 出现 "ÿþ")，提取会在该位置提前截断。
pub fn extract_text_from_image(image_bytes: &[u8]) -> Result<Option<String>, StegoError> {
    let img = load_pixels(image_bytes)?;

    let bits: Vec<u8> = img.iter().map(|channel| channel & 1).collect();

    let Some(end) = bits.windows(DELIMITER.len()).position(|w| w == DELIMITER) else {
        return Ok(None);
    };

    // 规范编码器只会把定界符放在字节对齐的位置；
    // 其它偏移上的命中只是任意图像里的噪声。
    if end % BITS_PER_CHAR != 0 {
        return Ok(None);
    }

    Ok(Some(bits_to_text(&bits[..end])))
}
