//! # 错误类型模块
//!
//! 定义核心编解码过程中所有可能的失败情形。
//! 边界层 (handler) 使用 `anyhow` 包装这些错误并附加文件级别的上下文。

use thiserror::Error;

/// 核心隐写操作的错误类型。
///
/// 注意"图像中没有隐藏消息"不属于错误：提取函数以 `Ok(None)` 表示，
/// 以区分"没有消息"与"载体图像本身无法解析"。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 载体字节无法解析为受支持格式的图像。
    #[error("unable to decode the carrier image: {0}")]
    Decode(#[from] image::ImageError),

    /// 消息位流超过载体的嵌入容量。在修改任何像素之前抛出。
    #[error("message needs {required} bits but the carrier only holds {available}")]
    Capacity { required: usize, available: usize },

    /// 文本包含码点超过 255 的字符，无法用固定的 8 位宽度编码。
    #[error("character {0:?} (U+{1:04X}) exceeds the 8-bit range and cannot be hidden")]
    UnencodableChar(char, u32),
}
