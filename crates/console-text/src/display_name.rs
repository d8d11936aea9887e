//! 标识符到界面标签的转换。
//!
//! ## 模块目标（Why）
//! - 控制台界面用字段名生成标签，例如 `prettyDisplayName` 显示为 `Pretty Display Name`；
//!
//! ## 规则（What）
//! - 在相邻字符之间检测词边界，并在边界处插入单个空格：
//!   1. 小写字母后紧跟大写字母；
//!   2. 字母后紧跟数字，或数字后紧跟字母；
//! - 只把整个结果的首字符转为大写，其余字符保持原样；
//! - `None` 原样返回 `None`，空串返回空串。
//!
//! ## 注意事项（Trade-offs）
//! - 该转换不保证幂等：对输出再次转换可能插入额外空格（例如连续大写与数字混排时）。

use alloc::string::String;

/// 把标识符转换为界面标签；`None` 保持为 `None`。
///
/// ```
/// use console_text::display_name::to_display_name;
///
/// assert_eq!(to_display_name(Some("display12")).as_deref(), Some("Display 12"));
/// assert_eq!(to_display_name(None), None);
/// ```
pub fn to_display_name(identifier: Option<&str>) -> Option<String> {
    identifier.map(display_name)
}

/// 把非空缺的标识符转换为界面标签。
pub fn display_name(identifier: &str) -> String {
    let mut label = String::with_capacity(identifier.len() + identifier.len() / 4);
    let mut prev: Option<char> = None;
    for ch in identifier.chars() {
        match prev {
            None => label.extend(ch.to_uppercase()),
            Some(prev) => {
                if is_word_boundary(prev, ch) {
                    label.push(' ');
                }
                label.push(ch);
            }
        }
        prev = Some(ch);
    }
    label
}

/// 较早的标签规则：首字符大写，并在其后的每个大写字母前插入空格。
///
/// 与 [`to_display_name`] 不同，它不识别字母与数字之间的边界，连续大写会被逐个拆开。
pub fn camel_case_to_words(identifier: Option<&str>) -> Option<String> {
    let identifier = identifier?;
    let mut words = String::with_capacity(identifier.len() + identifier.len() / 4);
    let mut chars = identifier.chars();
    if let Some(first) = chars.next() {
        words.extend(first.to_uppercase());
    }
    for ch in chars {
        if ch.is_uppercase() {
            words.push(' ');
        }
        words.push(ch);
    }
    Some(words)
}

fn is_word_boundary(prev: char, next: char) -> bool {
    (prev.is_lowercase() && next.is_uppercase())
        || (prev.is_alphabetic() && next.is_ascii_digit())
        || (prev.is_ascii_digit() && next.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_empty_pass_through() {
        assert_eq!(to_display_name(None), None);
        assert_eq!(to_display_name(Some("")).as_deref(), Some(""));
    }

    #[test]
    fn camel_humps_and_digits() {
        assert_eq!(display_name("name"), "Name");
        assert_eq!(display_name("prettyDisplayName"), "Pretty Display Name");
        assert_eq!(display_name("display12"), "Display 12");
        assert_eq!(display_name("value2Go"), "Value 2 Go");
        assert_eq!(display_name("12monkeys"), "12 monkeys");
    }

    #[test]
    fn uppercase_runs_are_not_split() {
        assert_eq!(display_name("parseURL"), "Parse URL");
        assert_eq!(display_name("URLValue"), "URLValue");
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(display_name("my_field"), "My_field");
        assert_eq!(display_name("a-b c"), "A-b c");
        assert_eq!(display_name("Already Spaced"), "Already Spaced");
    }

    #[test]
    fn first_letter_may_expand() {
        assert_eq!(display_name("ßtraße"), "SStraße");
    }

    #[test]
    fn legacy_word_split() {
        assert_eq!(camel_case_to_words(None), None);
        assert_eq!(camel_case_to_words(Some("")).as_deref(), Some(""));
        assert_eq!(
            camel_case_to_words(Some("prettyDisplayName")).as_deref(),
            Some("Pretty Display Name")
        );
        assert_eq!(camel_case_to_words(Some("parseURL")).as_deref(), Some("Parse U R L"));
        assert_eq!(camel_case_to_words(Some("display12")).as_deref(), Some("Display12"));
    }
}
