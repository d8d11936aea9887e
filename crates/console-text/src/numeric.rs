//! 与区域设置无关的数值文本编解码。
//!
//! ## 模块目标（Why）
//! - 设备端与控制台之间交换的浮点字段必须使用固定的 `.` 小数点，不能受宿主 locale 影响；
//! - 合法文本严格限定为 `-?[0-9]+(\.[0-9]+)?`，`"3.14f"`、`" 1"`、`"+1"`、`"1,5"`、`"1e3"` 均视为非法。
//!
//! ## 结构概览（What）
//! - [`parse_f32`]：唯一的可失败解析入口，返回 `Result<f32, NumericTextError>`；
//! - [`parse_float`]/[`try_parse_float`]：默认值与成功标志两种便捷包装；
//! - [`format_float`]：格式化为最短的可往返十进制文本，整数值不带小数部分；
//! - 双精度与 `i32` 版本、以及泛型入口 [`DecimalText`]。
//!
//! ## 实现策略（How）
//! - 先以单次字节扫描校验形态，再交给 `core` 的 `FromStr` 完成数值转换；
//! - 格式化依赖 `core::fmt` 的浮点 `Display`：它输出最短可往返表示，且从不使用科学计数法。

use alloc::format;
use alloc::string::String;

use crate::error::NumericTextError;

/// 十进制数值文本的双向转换。
///
/// # 教案式说明
/// - **契约 (What)**：`parse_decimal` 只接受 `-?[0-9]+(\.[0-9]+)?`，并拒绝溢出为无穷大的值；
///   `to_decimal_text` 对有限值输出可被 `parse_decimal` 读回为同一数值的文本；
/// - **特殊值**：`-0.0` 输出 `"0"`；NaN 输出 `"NaN"`，无穷大输出 `"Infinity"`/`"-Infinity"`，
///   这些文本不是合法数值文本，读回会失败。
pub trait DecimalText: Sized + Copy {
    /// 解析数值文本。
    fn parse_decimal(text: &str) -> Result<Self, NumericTextError>;

    /// 格式化为数值文本。
    fn to_decimal_text(self) -> String;
}

macro_rules! impl_decimal_text {
    ($($ty:ty),*) => {
        $(
            impl DecimalText for $ty {
                fn parse_decimal(text: &str) -> Result<Self, NumericTextError> {
                    check_decimal(text)?;
                    let value = text
                        .parse::<$ty>()
                        .map_err(|_| NumericTextError::OutOfRange)?;
                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err(NumericTextError::OutOfRange)
                    }
                }

                fn to_decimal_text(self) -> String {
                    if self.is_nan() {
                        String::from("NaN")
                    } else if self.is_infinite() {
                        String::from(if self > 0.0 { "Infinity" } else { "-Infinity" })
                    } else if self == 0.0 {
                        // 同时覆盖 -0.0。
                        String::from("0")
                    } else {
                        format!("{}", self)
                    }
                }
            }
        )*
    };
}

impl_decimal_text!(f32, f64);

/// 解析单精度数值文本。
pub fn parse_f32(text: &str) -> Result<f32, NumericTextError> {
    f32::parse_decimal(text)
}

/// 解析单精度数值文本，非法时返回 `default`。
///
/// `"0"` 解析为 `0.0`，不会被当作缺省值的哨兵。
pub fn parse_float(text: &str, default: f32) -> f32 {
    parse_f32(text).unwrap_or(default)
}

/// 解析单精度数值文本，返回 `(是否成功, 数值)`。
///
/// 失败时数值部分为 `0.0`，调用方不应依赖它。
pub fn try_parse_float(text: &str) -> (bool, f32) {
    match parse_f32(text) {
        Ok(value) => (true, value),
        Err(_) => (false, 0.0),
    }
}

/// 以 `.` 为小数点格式化单精度数值，整数值不带小数部分。
///
/// ```
/// use console_text::numeric::format_float;
///
/// assert_eq!(format_float(123.0), "123");
/// assert_eq!(format_float(-2.75), "-2.75");
/// ```
pub fn format_float(value: f32) -> String {
    value.to_decimal_text()
}

/// 文本是否为合法的单精度数值文本。
pub fn is_valid_float(text: &str) -> bool {
    parse_f32(text).is_ok()
}

/// 解析双精度数值文本。
pub fn parse_f64(text: &str) -> Result<f64, NumericTextError> {
    f64::parse_decimal(text)
}

/// 解析双精度数值文本，非法时返回 `default`。
pub fn parse_double(text: &str, default: f64) -> f64 {
    parse_f64(text).unwrap_or(default)
}

/// 解析双精度数值文本，返回 `(是否成功, 数值)`。
pub fn try_parse_double(text: &str) -> (bool, f64) {
    match parse_f64(text) {
        Ok(value) => (true, value),
        Err(_) => (false, 0.0),
    }
}

/// 以 `.` 为小数点格式化双精度数值。
pub fn format_double(value: f64) -> String {
    value.to_decimal_text()
}

/// 解析 `[+-]?[0-9]+` 形式的整数文本。
///
/// 与浮点文本不同，整数允许前导 `+`；超出 `i32` 范围时返回 [`NumericTextError::OutOfRange`]。
pub fn parse_i32(text: &str) -> Result<i32, NumericTextError> {
    check_integer(text)?;
    text.parse::<i32>()
        .map_err(|_| NumericTextError::OutOfRange)
}

/// 解析整数文本，非法时返回 `default`。
pub fn parse_int(text: &str, default: i32) -> i32 {
    parse_i32(text).unwrap_or(default)
}

/// 文本是否为合法的 `i32` 整数文本。
pub fn is_valid_integer(text: &str) -> bool {
    parse_i32(text).is_ok()
}

fn check_decimal(text: &str) -> Result<(), NumericTextError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(NumericTextError::Empty);
    }

    let mut pos = usize::from(bytes[0] == b'-');
    let integer_start = pos;
    pos = skip_digits(bytes, pos);
    if pos == integer_start {
        return Err(match bytes.get(pos) {
            None | Some(b'.') => NumericTextError::MissingIntegerDigits,
            Some(_) => unexpected(text, pos),
        });
    }
    if pos == bytes.len() {
        return Ok(());
    }
    if bytes[pos] != b'.' {
        return Err(unexpected(text, pos));
    }

    let fraction_start = pos + 1;
    pos = skip_digits(bytes, fraction_start);
    if pos == fraction_start {
        return Err(if pos == bytes.len() {
            NumericTextError::MissingFractionDigits
        } else {
            unexpected(text, pos)
        });
    }
    if pos != bytes.len() {
        return Err(unexpected(text, pos));
    }
    Ok(())
}

fn check_integer(text: &str) -> Result<(), NumericTextError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(NumericTextError::Empty);
    }

    let start = usize::from(matches!(bytes[0], b'-' | b'+'));
    let end = skip_digits(bytes, start);
    if end == start && end == bytes.len() {
        return Err(NumericTextError::MissingIntegerDigits);
    }
    if end != bytes.len() {
        return Err(unexpected(text, end));
    }
    Ok(())
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

// `index` 之前全部是 ASCII，因此必然落在字符边界上。
fn unexpected(text: &str, index: usize) -> NumericTextError {
    let found = text[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    NumericTextError::UnexpectedChar { index, found }
}
