//! 控制台消息中的轻量富文本标记。
//!
//! ## 模块目标（Why）
//! - 设备端日志可以用 `<b>`、`<i>`、`<color=值>` 标注强调与颜色，控制台渲染前需要
//!   去掉标签，并得到每段样式覆盖的区间；
//! - 这里只做与界面平台无关的那一半：文本扫描与区间计算，颜色值原样交给调用方解释。
//!
//! ## 规则（What）
//! - 标签名取 `<` 与 `>` 之间、最后一个 `=` 之前的部分，只识别 `b`、`i`、`color`；
//!   其余形如标签的文本（包括缺少 `>` 的 `<`）按普通字符保留；
//! - `<b>`/`<i>` 可嵌套，同名嵌套只在最外层闭合时产生一个区间；粗体与斜体重叠的部分
//!   使用 [`Style::BoldItalic`]；
//! - 闭合标签总是与最近一个未闭合标签配对：名字不一致时两者都被丢弃；没有未闭合标签时
//!   闭合标签直接丢弃；
//! - 输入结束时仍未闭合的标签在文本末尾闭合；
//! - 长度为 0 的区间与没有值的 `<color>` 不产生 [`Span`]。
//!
//! ## 注意事项（Trade-offs）
//! - [`Span::start`]/[`Span::len`] 是去标签后 [`RichText::text`] 中的字节偏移，总是落在字符边界上；
//! - 区间按闭合顺序的逆序排列，外层区间通常排在其内层区间之前。

use alloc::string::String;
use alloc::vec::Vec;

use tracing::trace;

/// 区间样式。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Style {
    /// 粗体。
    Bold,
    /// 斜体。
    Italic,
    /// 粗体且斜体。
    BoldItalic,
    /// 前景色，值为 `<color=...>` 中 `=` 之后的原始文本。
    Color(String),
}

/// 一段带样式的文本区间。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    /// 样式。
    pub style: Style,
    /// 起始字节偏移。
    pub start: usize,
    /// 字节长度，总是大于 0。
    pub len: usize,
}

impl Span {
    /// 区间覆盖的字节范围。
    pub fn range(&self) -> core::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// 去掉标签后的文本与样式区间。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    /// 去掉标签后的文本。
    pub text: String,
    /// 样式区间。
    pub spans: Vec<Span>,
}

impl RichText {
    /// 是否没有任何样式区间。
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// 按区间取出对应的文本片段。
    pub fn styled_segments(&self) -> impl Iterator<Item = (&Style, &str)> + '_ {
        self.spans
            .iter()
            .map(|span| (&span.style, &self.text[span.range()]))
    }
}

/// 解析富文本标记；`None` 保持为 `None`。
pub fn to_rich_text(markup: Option<&str>) -> Option<RichText> {
    markup.map(parse_rich_text)
}

/// 解析富文本标记。
///
/// # 教案式说明
/// - **契约 (What)**：任意输入都能得到结果，不会失败；无法识别的标记按普通文本保留；
/// - **执行逻辑 (How)**：单次扫描，以栈记录未闭合标签及其在输出中的位置；粗体与斜体
///   各有一个嵌套计数，闭合时据此决定是否产生区间以及是否合并为 [`Style::BoldItalic`]；
/// - **风险 (Trade-offs)**：名字不匹配的闭合会弹出并丢弃对应的开标签，但不回退嵌套计数，
///   之后同类标签闭合时仍视为处于嵌套中。
///
/// ```
/// use console_text::rich_text::{Style, parse_rich_text};
///
/// let rich = parse_rich_text("disk <b>full</b>");
/// assert_eq!(rich.text, "disk full");
/// assert_eq!(rich.spans[0].style, Style::Bold);
/// assert_eq!(rich.spans[0].range(), 5..9);
/// ```
pub fn parse_rich_text(markup: &str) -> RichText {
    let mut state = Builder::with_capacity(markup.len());
    let mut pos = 0;
    while pos < markup.len() {
        let Some(offset) = markup[pos..].find('<') else {
            state.text.push_str(&markup[pos..]);
            break;
        };
        let lt = pos + offset;
        state.text.push_str(&markup[pos..lt]);

        match capture_tag(markup, lt + 1) {
            Some((tag, next)) => {
                state.apply(tag);
                pos = next;
            }
            None => {
                state.text.push('<');
                pos = lt + 1;
            }
        }
    }
    state.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Bold,
    Italic,
    Color,
}

impl TagKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "b" => Some(Self::Bold),
            "i" => Some(Self::Italic),
            "color" => Some(Self::Color),
            _ => None,
        }
    }
}

struct Tag<'a> {
    kind: TagKind,
    attribute: Option<&'a str>,
    closing: bool,
}

struct OpenTag<'a> {
    kind: TagKind,
    attribute: Option<&'a str>,
    position: usize,
}

// `start` 紧跟在 `<` 之后；成功时返回标签与 `>` 之后的位置。
fn capture_tag(markup: &str, start: usize) -> Option<(Tag<'_>, usize)> {
    let closing = markup[start..].starts_with('/');
    let body_start = start + usize::from(closing);
    let end = body_start + markup[body_start..].find('>')?;
    let body = &markup[body_start..end];

    let (name, attribute) = match body.rsplit_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    let kind = TagKind::from_name(name)?;
    Some((
        Tag {
            kind,
            attribute,
            closing,
        },
        end + 1,
    ))
}

struct Builder<'a> {
    text: String,
    spans: Vec<Span>,
    stack: Vec<OpenTag<'a>>,
    bold: usize,
    italic: usize,
}

impl<'a> Builder<'a> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            spans: Vec::new(),
            stack: Vec::new(),
            bold: 0,
            italic: 0,
        }
    }

    fn apply(&mut self, tag: Tag<'a>) {
        if !tag.closing {
            match tag.kind {
                TagKind::Bold => self.bold += 1,
                TagKind::Italic => self.italic += 1,
                TagKind::Color => {}
            }
            self.stack.push(OpenTag {
                kind: tag.kind,
                attribute: tag.attribute,
                position: self.text.len(),
            });
            return;
        }

        match self.stack.pop() {
            Some(open) if open.kind == tag.kind => self.close(open),
            Some(open) => {
                trace!(
                    open = ?open.kind,
                    close = ?tag.kind,
                    "dropping mismatched rich text tags"
                );
            }
            None => trace!(close = ?tag.kind, "dropping unmatched closing rich text tag"),
        }
    }

    fn close(&mut self, open: OpenTag<'a>) {
        match open.kind {
            TagKind::Bold => {
                self.bold = self.bold.saturating_sub(1);
                if self.bold > 0 {
                    return;
                }
            }
            TagKind::Italic => {
                self.italic = self.italic.saturating_sub(1);
                if self.italic > 0 {
                    return;
                }
            }
            TagKind::Color => {}
        }

        let len = self.text.len() - open.position;
        if len == 0 {
            return;
        }
        let style = match open.kind {
            TagKind::Bold if self.italic > 0 => Style::BoldItalic,
            TagKind::Bold => Style::Bold,
            TagKind::Italic if self.bold > 0 => Style::BoldItalic,
            TagKind::Italic => Style::Italic,
            TagKind::Color => match open.attribute {
                Some(value) => Style::Color(value.into()),
                None => return,
            },
        };
        self.spans.push(Span {
            style,
            start: open.position,
            len,
        });
    }

    fn finish(mut self) -> RichText {
        while let Some(open) = self.stack.pop() {
            self.close(open);
        }
        self.spans.reverse();
        RichText {
            text: self.text,
            spans: self.spans,
        }
    }
}
