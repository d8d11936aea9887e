//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中定义数值文本与键值文档两类编解码失败，供调用方 `match` 后决定回退策略；
//! - 所有失败均以返回值传播，库内不会 panic，也不会终止调用线程。
//!
//! ## 设计要求（What）
//! - 错误类型派生 [`thiserror::Error`]，在 `std` 与 `no_std + alloc` 环境下都实现标准错误 trait；
//! - 显示文本为稳定的英文短句，便于在控制台日志中按前缀聚合。

use alloc::string::String;

use thiserror::Error;

/// 数值文本解析失败（MalformedNumericText）。
///
/// # 教案式说明
/// - **意图 (Why)**：把“不是合法数值文本”细分为具体原因，便于调试来自设备端的异常字段；
/// - **契约 (What)**：只由 [`crate::numeric`] 中的解析函数产生；调用方若只关心成败，
///   可以使用 `parse_float`/`try_parse_float` 这类便捷包装；
/// - **执行逻辑 (How)**：`index` 为输入中的字节偏移，`found` 为该位置的字符。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumericTextError {
    /// 输入为空字符串。
    #[error("numeric text is empty")]
    Empty,

    /// 出现了 `[-]digits[.digits]` 之外的字符，例如前导空白、`+`、`,` 或 `f` 后缀。
    #[error("unexpected character `{found}` at byte {index} in numeric text")]
    UnexpectedChar {
        /// 非法字符所在的字节偏移。
        index: usize,
        /// 非法字符本身。
        found: char,
    },

    /// 负号或小数点之前缺少整数位，例如 `"-"`、`".5"`。
    #[error("numeric text has no integer digits")]
    MissingIntegerDigits,

    /// 小数点之后缺少数字，例如 `"3."`。
    #[error("numeric text has no digits after the decimal point")]
    MissingFractionDigits,

    /// 文本合法，但数值超出目标类型的可表示范围。
    #[error("numeric text is out of range for the target type")]
    OutOfRange,
}

/// 键值文档编解码失败。
///
/// # 教案式说明
/// - **意图 (Why)**：区分“读入的文档行缺少分隔符”与“写出的键无法往返”两种场景；
/// - **契约 (What)**：`MissingSeparator` 仅在 [`crate::config::MalformedLinePolicy::Reject`]
///   策略下返回，`line` 为 1 起始的行号；`InvalidKey` 与 `ValueFormat` 仅由
///   [`crate::document::serialize_document_checked`] 返回。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// 文档中的某一行缺少 `:` 分隔符。
    #[error("document line {line} has no `:` separator")]
    MissingSeparator {
        /// 1 起始的行号。
        line: usize,
    },

    /// 键无法被正确写出并再次读回。
    #[error("document key `{key}` cannot be serialized: {reason}")]
    InvalidKey {
        /// 出问题的键。
        key: String,
        /// 具体原因。
        reason: InvalidKeyReason,
    },

    /// 值的 `Display` 实现返回了错误，写出的值不完整。
    #[error("value for document key `{key}` failed to format")]
    ValueFormat {
        /// 值所属的键。
        key: String,
    },
}

/// 键被拒绝写出的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKeyReason {
    /// 空键。
    Empty,
    /// 键中含有 `:`，读回时会在错误位置切分。
    ContainsSeparator,
    /// 键中含有换行符，读回时会被拆成两行。
    ContainsNewline,
}

impl core::fmt::Display for InvalidKeyReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => f.write_str("key is empty"),
            Self::ContainsSeparator => f.write_str("key contains `:`"),
            Self::ContainsNewline => f.write_str("key contains a line break"),
        }
    }
}
