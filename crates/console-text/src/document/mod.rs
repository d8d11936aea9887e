//! 行式键值文档编解码。
//!
//! ## 模块目标（Why）
//! - 设备端代理与控制台之间用一种极简文本块交换结构化元数据：每行一个 `key:value`；
//! - 这里负责该文本块与 `BTreeMap<String, String>` 之间的双向转换，并保证 `deserialize(serialize(m)) == m`。
//!
//! ## 格式约定（What）
//! - 行之间只以 `\n` 分隔，默认不裁剪 `\r`；
//! - 每行以**第一个** `:` 切分，键在前、值在后，值中可以再出现 `:`；
//! - 值中的真实换行写作 `\n` 两字符序列，这是唯一被识别的转义；
//! - 重复键以最后一次出现为准；空值得到空字符串而不是缺失；
//! - 空文本对应空映射。
//!
//! ## 实现策略（How）
//! - 解码：按行扫描，`split_once(':')` 定位分隔符，再交给 [`unescape_value`]；缺少分隔符的行
//!   交给 [`MalformedLinePolicy`] 决定；
//! - 编码：按调用方给出的迭代顺序逐条写出，值通过 `fmt::Write` 适配器边写边转义。
//!
//! ## 风险提示（Trade-offs）
//! - 键本身不做转义：含 `:` 或换行的键无法往返，需要保证这一点时请使用 [`serialize_document_checked`]；
//! - 值中原本就存在的 `\n` 两字符序列会在读回时变成换行，这是格式本身的限制。

mod escape;

use alloc::borrow::ToOwned;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt::{self, Display, Write};

use tracing::{debug, trace};

use crate::config::{DocumentOptions, MalformedLinePolicy};
use crate::error::{DocumentError, InvalidKeyReason};

pub use escape::{escape_value, unescape_value};

/// 键值分隔符。
pub const SEPARATOR: char = ':';

/// 行分隔符。
pub const LINE_BREAK: char = '\n';

/// 缺失值（`None`）写出时使用的文本。
pub const NULL_TEXT: &str = "null";

/// 解码后的键值映射。
pub type DocumentMap = BTreeMap<String, String>;

/// 以默认选项（缺少分隔符即拒绝整个文档）解码。
///
/// ```
/// use console_text::document::deserialize_document;
///
/// let map = deserialize_document("name:probe\nnote:a\\nb").unwrap();
/// assert_eq!(map["name"], "probe");
/// assert_eq!(map["note"], "a\nb");
/// ```
pub fn deserialize_document(text: &str) -> Result<DocumentMap, DocumentError> {
    deserialize_document_with(text, &DocumentOptions::default())
}

/// 按给定选项解码键值文档。
///
/// # 教案式说明
/// - **契约 (What)**：返回的映射每个成功解析的行对应一条记录，重复键后者覆盖前者；
///   仅当策略为 [`MalformedLinePolicy::Reject`] 时才会返回 [`DocumentError::MissingSeparator`]；
/// - **执行逻辑 (How)**：`Skip`/`KeyOnly` 分支会输出 `trace` 级事件，`Reject` 分支输出 `debug` 级事件，
///   均携带 1 起始的行号。
pub fn deserialize_document_with(
    text: &str,
    options: &DocumentOptions,
) -> Result<DocumentMap, DocumentError> {
    let mut entries = DocumentMap::new();
    if text.is_empty() {
        return Ok(entries);
    }

    for (index, raw_line) in text.split(LINE_BREAK).enumerate() {
        let line_no = index + 1;
        let line = if options.trim_carriage_return {
            raw_line.strip_suffix('\r').unwrap_or(raw_line)
        } else {
            raw_line
        };

        if let Some((key, raw_value)) = line.split_once(SEPARATOR) {
            entries.insert(key.to_owned(), unescape_value(raw_value).into_owned());
            continue;
        }

        match options.malformed_line {
            MalformedLinePolicy::Reject => {
                debug!(line = line_no, "document rejected: line has no separator");
                return Err(DocumentError::MissingSeparator { line: line_no });
            }
            MalformedLinePolicy::Skip => {
                trace!(line = line_no, "skipping document line without separator");
            }
            MalformedLinePolicy::KeyOnly if line.is_empty() => {
                trace!(line = line_no, "skipping empty document line");
            }
            MalformedLinePolicy::KeyOnly => {
                trace!(line = line_no, "document line without separator read as key-only");
                entries.insert(line.to_owned(), String::new());
            }
        }
    }

    Ok(entries)
}

/// 按迭代顺序编码键值文档。
///
/// 值可以是任意 `Display` 类型，写出时其中的换行被转义；键原样写出。
/// 空迭代得到空文本，多条记录之间以单个 `\n` 连接，末尾不追加换行。
///
/// 某个值的 `Display` 实现报错时，该值停在出错前已写出的部分，其余记录照常写出；
/// 需要感知这种情况时请使用 [`serialize_document_checked`]。
pub fn serialize_document<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut out = String::new();
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if push_entry(&mut out, index, key.as_ref(), &value).is_err() {
            trace!(key = key.as_ref(), "document value truncated by its Display impl");
        }
    }
    out
}

/// 与 [`serialize_document`] 相同，但拒绝无法往返的键。
///
/// 空键、含 `:` 或换行的键会返回 [`DocumentError::InvalidKey`]；值的 `Display` 实现报错时返回
/// [`DocumentError::ValueFormat`]。两种情况都不产出任何部分结果。
pub fn serialize_document_checked<I, K, V>(entries: I) -> Result<String, DocumentError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut out = String::new();
    for (index, (key, value)) in entries.into_iter().enumerate() {
        let key = key.as_ref();
        check_key(key)?;
        push_entry(&mut out, index, key, &value).map_err(|_| DocumentError::ValueFormat {
            key: key.to_owned(),
        })?;
    }
    Ok(out)
}

/// 编码值可能缺失的记录，`None` 写作 [`NULL_TEXT`]。
pub fn serialize_optional_document<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: Display,
{
    serialize_document(
        entries
            .into_iter()
            .map(|(key, value)| (key, OrNull(value))),
    )
}

// 写入 String 本身不会失败，`Err` 只可能来自值自身的 `Display` 实现。
fn push_entry(out: &mut String, index: usize, key: &str, value: &dyn Display) -> fmt::Result {
    if index > 0 {
        out.push(LINE_BREAK);
    }
    out.push_str(key);
    out.push(SEPARATOR);
    write!(escape::EscapingWriter::new(out), "{value}")
}

fn check_key(key: &str) -> Result<(), DocumentError> {
    let reason = if key.is_empty() {
        InvalidKeyReason::Empty
    } else if key.contains(SEPARATOR) {
        InvalidKeyReason::ContainsSeparator
    } else if key.contains(LINE_BREAK) {
        InvalidKeyReason::ContainsNewline
    } else {
        return Ok(());
    };
    Err(DocumentError::InvalidKey {
        key: key.to_owned(),
        reason,
    })
}

struct OrNull<V>(Option<V>);

impl<V: Display> Display for OrNull<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NULL_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn splits_on_first_separator_only() {
        let map = deserialize_document("url:http://host:8080/path").unwrap();
        assert_eq!(map["url"], "http://host:8080/path");
    }

    #[test]
    fn last_duplicate_wins() {
        let map = deserialize_document("k:1\nk:2\nj:3").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["k"], "2");
    }

    #[test]
    fn empty_text_is_empty_map() {
        assert!(deserialize_document("").unwrap().is_empty());
        assert_eq!(serialize_document(Vec::<(&str, &str)>::new()), "");
    }

    #[test]
    fn carriage_returns_kept_by_default() {
        let map = deserialize_document("a:1\r\nb:2").unwrap();
        assert_eq!(map["a"], "1\r");

        let options = DocumentOptions::default().trim_carriage_return(true);
        let map = deserialize_document_with("a:1\r\nb:2\r", &options).unwrap();
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], "2");
    }

    #[test]
    fn reject_reports_line_number() {
        assert_eq!(
            deserialize_document("a:1\nbroken\nc:3"),
            Err(DocumentError::MissingSeparator { line: 2 })
        );
        // 末尾换行会产生一个空行，同样缺少分隔符。
        assert_eq!(
            deserialize_document("a:1\n"),
            Err(DocumentError::MissingSeparator { line: 2 })
        );
    }

    #[test]
    fn skip_and_key_only_policies() {
        let text = "a:1\nbroken\n\nc:3";

        let skip = DocumentOptions::with_policy(MalformedLinePolicy::Skip);
        let map = deserialize_document_with(text, &skip).unwrap();
        assert_eq!(map.keys().map(String::as_str).collect::<Vec<_>>(), ["a", "c"]);

        let key_only = DocumentOptions::with_policy(MalformedLinePolicy::KeyOnly);
        let map = deserialize_document_with(text, &key_only).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["broken"], "");
        assert!(!map.contains_key(""));
    }

    #[test]
    fn serializes_in_iteration_order() {
        let text = serialize_document(vec![("b", "two\nlines"), ("a", "x:y")]);
        assert_eq!(text, "b:two\\nlines\na:x:y");
    }

    #[test]
    fn serializes_display_values() {
        let text = serialize_document([("count", 3), ("limit", -1)]);
        assert_eq!(text, "count:3\nlimit:-1");

        let text = serialize_optional_document([("set", Some("v")), ("unset", None)]);
        assert_eq!(text, "set:v\nunset:null");
    }

    #[test]
    fn checked_serialization_rejects_bad_keys() {
        assert_eq!(
            serialize_document_checked([("a:b", "v")]),
            Err(DocumentError::InvalidKey {
                key: "a:b".into(),
                reason: InvalidKeyReason::ContainsSeparator,
            })
        );
        assert!(matches!(
            serialize_document_checked([("", "v")]),
            Err(DocumentError::InvalidKey {
                reason: InvalidKeyReason::Empty,
                ..
            })
        ));
        assert!(matches!(
            serialize_document_checked([("a\nb", "v")]),
            Err(DocumentError::InvalidKey {
                reason: InvalidKeyReason::ContainsNewline,
                ..
            })
        ));
        assert_eq!(
            serialize_document_checked([("ok", "multi\nline")]).unwrap(),
            "ok:multi\\nline"
        );
    }

    /// 先写出一段文本再报错的值。
    struct Broken;

    impl Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("par")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn failing_display_value_is_reported() {
        let entries: [(&str, &dyn Display); 2] = [("a", &Broken), ("b", &1)];
        assert_eq!(
            serialize_document_checked(entries),
            Err(DocumentError::ValueFormat { key: "a".into() })
        );

        let text = serialize_document(entries);
        assert_eq!(text, "a:par\nb:1");
    }
}
