/// 消息结束定界符的位模式。
/// 编码时追加在消息位流末尾；提取时扫描整幅图像寻找它的首次出现。
/// 选择这个模式是因为 8 位对齐的常规文本编码几乎不会自然产生
/// 连续 15 个 1 后跟 1 个 0 的序列。
pub const DELIMITER: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// 每个字符占用的位数。
/// 每个字符的码点按 8 位大端二进制写入，因此码点必须落在 0–255 范围内。
pub const BITS_PER_CHAR: usize = 8;

/// 单个字符允许的最大码点。
/// 超出此值的字符无法放入固定的 8 位宽度，编码时会被拒绝。
pub const MAX_CODE_POINT: u32 = 255;
