//! # lsb_text 库
//!
//! 本库包含基于定界符的 LSB 文本隐写核心逻辑：
//! 把一段文本嵌入无损图像的像素数据，或从中恢复出来。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod image_io;
pub mod steganography;
