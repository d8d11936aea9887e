//! 值转义：唯一的转义序列是反斜杠加字母 `n`，代表一个真实换行符。
//!
//! 两个方向都是单次左到右扫描、最多向前看一个字符；无需改写时直接借用输入。

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

const NEWLINE_ESCAPE: &str = "\\n";

/// 把值中的每个换行符替换为 `\n` 两字符序列，其余字符原样保留。
pub fn escape_value(value: &str) -> Cow<'_, str> {
    if !value.contains('\n') {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + NEWLINE_ESCAPE.len());
    push_escaped(&mut escaped, value);
    Cow::Owned(escaped)
}

/// 把 `\n` 两字符序列还原为换行符。
///
/// 其他反斜杠组合（包括末尾孤立的反斜杠）与双引号均原样保留。
pub fn unescape_value(raw: &str) -> Cow<'_, str> {
    if !raw.contains(NEWLINE_ESCAPE) {
        return Cow::Borrowed(raw);
    }

    let mut unescaped = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'n') {
            chars.next();
            unescaped.push('\n');
        } else {
            unescaped.push(ch);
        }
    }
    Cow::Owned(unescaped)
}

fn push_escaped(out: &mut String, value: &str) {
    let mut rest = value;
    while let Some(pos) = rest.find('\n') {
        out.push_str(&rest[..pos]);
        out.push_str(NEWLINE_ESCAPE);
        rest = &rest[pos + 1..];
    }
    out.push_str(rest);
}

/// 边写边转义的 `fmt::Write` 适配器，让任意 `Display` 值无需中间字符串即可写入文档。
pub(super) struct EscapingWriter<'a> {
    out: &'a mut String,
}

impl<'a> EscapingWriter<'a> {
    pub(super) fn new(out: &'a mut String) -> Self {
        Self { out }
    }
}

impl fmt::Write for EscapingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        push_escaped(self.out, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn borrows_when_untouched() {
        assert!(matches!(escape_value("plain"), Cow::Borrowed("plain")));
        assert!(matches!(unescape_value("a\\tb"), Cow::Borrowed("a\\tb")));
    }

    #[test]
    fn escapes_every_newline() {
        assert_eq!(escape_value("a\nb\n"), "a\\nb\\n");
        assert_eq!(escape_value("\n\n"), "\\n\\n");
    }

    #[test]
    fn unescapes_only_backslash_n() {
        assert_eq!(unescape_value("value with\\nlinebreak"), "value with\nlinebreak");
        assert_eq!(unescape_value("\\t\\n\\"), "\\t\n\\");
        assert_eq!(unescape_value("say \"hi\"\\n"), "say \"hi\"\n");
        // 第一个反斜杠后面不是 n，原样保留；第二个与 n 组成转义。
        assert_eq!(unescape_value("\\\\n"), "\\\n");
    }

    #[test]
    fn writer_escapes_fragments() {
        let mut out = String::new();
        write!(EscapingWriter::new(&mut out), "{}|{}", "x\ny", 7).unwrap();
        assert_eq!(out, "x\\ny|7");
    }
}
