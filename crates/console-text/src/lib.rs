#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # console-text
//!
//! ## 定位与职责（Why）
//! - 为日志控制台的设备端代理与宿主控制台提供三种与区域设置无关的文本编解码：
//!   数值文本、行式键值文档、标识符到界面标签，另附控制台消息的富文本标记解析；
//! - 三者互不依赖、没有共享可变状态，全部是对内存文本的纯函数变换，可在任意线程并发调用。
//!
//! ## 模块地图（What）
//! - [`numeric`]：`-?[0-9]+(\.[0-9]+)?` 数值文本的解析与格式化，固定使用 `.` 作为小数点；
//! - [`document`]：`key:value` 行式文档与映射之间的转换，值中换行以 `\n` 两字符序列转义；
//! - [`display_name`]：`prettyDisplayName` → `Pretty Display Name`；
//! - [`rich_text`]：`<b>`、`<i>`、`<color=值>` 标记到纯文本加样式区间的转换；
//! - [`text`]：空值安全的小工具；
//! - [`config`]：解码选项；[`error`]：错误类型。
//!
//! ## Feature 策略（Trade-offs）
//! - 默认启用 `std`；关闭后在 `no_std + alloc` 环境下提供同样的 API；
//! - 库本身不安装任何 `tracing` 订阅者，未安装时日志事件没有副作用。

extern crate alloc;

pub mod config;
pub mod display_name;
pub mod document;
pub mod error;
pub mod numeric;
pub mod rich_text;
pub mod text;

pub use config::{CodecConfig, DocumentOptions, MalformedLinePolicy};
pub use display_name::{camel_case_to_words, display_name, to_display_name};
pub use document::{
    DocumentMap, deserialize_document, deserialize_document_with, serialize_document,
    serialize_document_checked, serialize_optional_document,
};
pub use error::{DocumentError, InvalidKeyReason, NumericTextError};
pub use numeric::{
    DecimalText, format_double, format_float, parse_double, parse_float, parse_int,
    try_parse_double, try_parse_float,
};
pub use rich_text::{RichText, Span, Style, parse_rich_text, to_rich_text};
