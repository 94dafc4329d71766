use crate::constants::{BITS_PER_CHAR, MAX_CODE_POINT};
use crate::error::StegoError;

/// 将文本转换为位流：每个字符 8 位，大端序，按原文顺序拼接。
/// 码点超过 255 的字符会被拒绝。
pub fn text_to_bits(text: &str) -> Result<Vec<u8>, StegoError> {
    let mut bits = Vec::with_capacity(text.chars().count() * BITS_PER_CHAR);

    for ch in text.chars() {
        let code = ch as u32;
        if code > MAX_CODE_POINT {
            return Err(StegoError::UnencodableChar(ch, code));
        }
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push(((code >> shift) & 1) as u8);
        }
    }

    Ok(bits)
}

/// 将位流还原为文本：每 8 位一组解释为字符码点 (大端序)。
/// 调用方保证长度是 8 的倍数；末尾不足一组的位不会被消费。
pub fn bits_to_text(bits: &[u8]) -> String {
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|chunk| {
            let byte = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            char::from(byte)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let bits = text_to_bits("Hi").unwrap();
        assert_eq!(bits.len(), 16);
        // 'H' = 0x48, 'i' = 0x69
        assert_eq!(
            bits,
            vec![0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1]
        );
        assert_eq!(bits_to_text(&bits), "Hi");
    }

    #[test]
    fn latin1_round_trip() {
        let text = "café año";
        let bits = text_to_bits(text).unwrap();
        assert_eq!(bits.len(), text.chars().count() * 8);
        assert_eq!(bits_to_text(&bits), text);
    }

    #[test]
    fn empty_text_yields_empty_stream() {
        assert!(text_to_bits("").unwrap().is_empty());
        assert_eq!(bits_to_text(&[]), "");
    }

    #[test]
    fn code_point_above_255_rejected() {
        let err = text_to_bits("你好").unwrap_err();
        match err {
            StegoError::UnencodableChar(ch, code) => {
                assert_eq!(ch, '你');
                assert_eq!(code, '你' as u32);
            }
            other => panic!("expected UnencodableChar, got {other:?}"),
        }
    }

    #[test]
    fn boundary_code_points() {
        let bits = text_to_bits("\u{00}\u{FF}").unwrap();
        assert_eq!(bits[..8], [0; 8]);
        assert_eq!(bits[8..], [1; 8]);
        assert_eq!(bits_to_text(&bits), "\u{00}\u{FF}");
    }

    #[test]
    fn trailing_partial_group_is_dropped() {
        // 9 个位：最后 1 位不足一组，不产生字符
        let mut bits = text_to_bits("A").unwrap();
        bits.push(1);
        assert_eq!(bits_to_text(&bits), "A");
    }
}
