//! 空值安全的字符串小工具。
//!
//! 控制台从设备端收到的字段可能缺失，这里的函数把 `None` 当作“没有内容”处理，而不是报错。

use alloc::string::String;
use core::fmt::{Display, Write};

/// 默认的连接分隔符。
pub const DEFAULT_SEPARATOR: &str = ",";

/// 是否为 `None` 或空串。
pub fn is_null_or_empty(text: Option<&str>) -> bool {
    text.is_none_or(str::is_empty)
}

/// 字符（Unicode 标量值）个数，`None` 视为 0。
///
/// 与按 UTF-16 码元计数的实现相比，基本多文种平面之外的字符（如 emoji）在这里只计 1。
pub fn length(text: Option<&str>) -> usize {
    text.map_or(0, |text| text.chars().count())
}

/// 是否以 `prefix` 开头；任一方缺失时为 `false`。
pub fn has_prefix(text: Option<&str>, prefix: Option<&str>) -> bool {
    matches!((text, prefix), (Some(text), Some(prefix)) if text.starts_with(prefix))
}

/// 区分大小写的包含判断；任一方缺失时为 `false`。
pub fn contains(text: Option<&str>, needle: Option<&str>) -> bool {
    matches!((text, needle), (Some(text), Some(needle)) if text.contains(needle))
}

/// 忽略大小写的包含判断；任一方缺失时为 `false`。
///
/// 比较前两侧都做 Unicode 小写化；小写化可能改变字节长度（如开尔文符号 `\u{212A}` 变为 `k`），
/// 所以不在小写化之前按长度提前判负。
pub fn contains_ignore_case(text: Option<&str>, needle: Option<&str>) -> bool {
    match (text, needle) {
        (Some(text), Some(needle)) => text.to_lowercase().contains(&needle.to_lowercase()),
        _ => false,
    }
}

/// 以 `separator` 连接各项的 `Display` 文本，末尾不追加分隔符。
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        // 写入 String 不会失败。
        let _ = write!(out, "{item}");
    }
    out
}

/// 以 [`DEFAULT_SEPARATOR`] 连接。
pub fn join_default<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join(items, DEFAULT_SEPARATOR)
}
