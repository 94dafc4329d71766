//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `recover` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、校验输入格式、调用核心隐写算法以及向用户报告结果。

use crate::cli::{HideArgs, RecoverArgs};
use crate::constants::{BITS_PER_CHAR, DELIMITER};
use crate::steganography::{capacity_bits, extract_text_from_image, hide_text_in_image};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 可作为载体的无损图像扩展名。
const LOSSLESS_EXTENSIONS: [&str; 5] = ["png", "bmp", "tif", "tiff", "qoi"];

/// 明确拒绝的有损图像扩展名。
/// 有损压缩会破坏最低有效位，嵌入的数据无法恢复。
const LOSSY_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "webp"];

/// 校验输入图像的扩展名属于受支持的无损格式。
///
/// # Errors
///
/// * 路径没有扩展名，或扩展名不在无损格式列表中。
/// * 扩展名属于有损格式 (如 JPEG)，会返回专门的提示。
fn ensure_lossless(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    anyhow::ensure!(
        !LOSSY_EXTENSIONS.contains(&ext.as_str()),
        "Lossy image formats cannot carry LSB data: {}. \nPlease use a lossless format such as PNG or BMP.",
        path.to_string_lossy().red().bold()
    );

    anyhow::ensure!(
        LOSSLESS_EXTENSIONS.contains(&ext.as_str()),
        "Unsupported image format: {}. \nSupported lossless formats: {}.",
        path.to_string_lossy().red().bold(),
        LOSSLESS_EXTENSIONS.join(", ").green()
    );

    Ok(())
}

/// 检查输出路径是否可以写入；目标已存在且未指定 --force 时拒绝覆盖。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 在输入图像旁生成默认输出文件名：`<prefix><原文件名主干>.<ext>`。
fn default_output(image: &Path, prefix: &str, ext: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    image.with_file_name(format!("{prefix}{stem}.{ext}"))
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、检查嵌入容量是否足够、调用核心编码函数，
/// 最后将嵌入消息后的 PNG 写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和 --force 标志的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输入图像不是受支持的无损格式，或文件无法读取。
/// * 文本文件无法读取，或包含码点超过 255 的字符。
/// * 图像没有足够的容量来隐藏文本。
/// * 目标文件已存在且未指定 --force。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    ensure_lossless(&args.image)?;

    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let (width, height) = image::image_dimensions(&args.image).with_context(|| {
        format!(
            "Unable to read image dimensions: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let required_bits = text.chars().count() * BITS_PER_CHAR + DELIMITER.len();
    let available_bits = capacity_bits(width, height);

    anyhow::ensure!(
        available_bits >= required_bits,
        "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
        required_bits.to_string().red().bold(),
        available_bits.to_string().green().bold()
    );

    let dest = args
        .dest
        .unwrap_or_else(|| default_output(&args.image, "stego_", "png"));
    ensure_writable(&dest, args.force)?;

    let stego = hide_text_in_image(&picture, &text).with_context(|| {
        format!(
            "Failed to hide the message in '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, stego).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用核心提取函数恢复文本，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和 --force 标志的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输入图像不是受支持的无损格式，或文件无法读取/解析。
/// * 图像中没有找到隐藏的消息。
/// * 目标文件已存在且未指定 --force。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    ensure_lossless(&args.image)?;

    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = extract_text_from_image(&picture).with_context(|| {
        format!(
            "Failed to extract a message from '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let Some(message) = message else {
        anyhow::bail!(
            "No hidden message was found in the image: {}",
            args.image.to_string_lossy().red().bold()
        );
    };

    let dest = args
        .text
        .unwrap_or_else(|| default_output(&args.image, "recovered_", "txt"));
    ensure_writable(&dest, args.force)?;

    fs::write(&dest, message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}
