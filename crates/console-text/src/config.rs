//! 编解码选项。
//!
//! ## 模块目标（Why）
//! - 键值文档遇到缺少 `:` 的行时如何处理，需要由宿主显式选择，而不是由库暗中猜测；
//! - 选项结构可由宿主从自身配置文件（例如 TOML 的 `[document]` 表）反序列化得到。
//!
//! ## 结构概览（What）
//! - [`CodecConfig`]：根配置节，目前只包含 [`DocumentOptions`]；
//! - [`MalformedLinePolicy`]：缺少分隔符时的三种处理策略，默认 [`MalformedLinePolicy::Reject`]。
//!
//! ## 风险提示（Trade-offs）
//! - 所有字段都有默认值且拒绝未知字段，拼写错误会在宿主加载配置时立即暴露。

use serde::{Deserialize, Serialize};

/// 编解码根配置节。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// 键值文档解码选项。
    pub document: DocumentOptions,
}

/// 键值文档解码选项。
///
/// # 教案式说明
/// - **契约 (What)**：`malformed_line` 决定缺少 `:` 的行如何处理；`trim_carriage_return`
///   为 `true` 时，每行末尾的单个 `\r` 会在切分键值前被移除，默认保持原样；
/// - **执行逻辑 (How)**：选项只被 [`crate::document::deserialize_document_with`] 读取，
///   序列化方向不受影响。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DocumentOptions {
    /// 缺少分隔符的行的处理策略。
    pub malformed_line: MalformedLinePolicy,
    /// 是否去除每行末尾的 `\r`。
    pub trim_carriage_return: bool,
}

impl DocumentOptions {
    /// 以指定策略构造选项，其余字段取默认值。
    #[must_use]
    pub const fn with_policy(policy: MalformedLinePolicy) -> Self {
        Self {
            malformed_line: policy,
            trim_carriage_return: false,
        }
    }

    /// 设置是否去除行尾 `\r`。
    #[must_use]
    pub const fn trim_carriage_return(mut self, trim: bool) -> Self {
        self.trim_carriage_return = trim;
        self
    }
}

/// 缺少 `:` 分隔符的行的处理策略。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedLinePolicy {
    /// 整个文档解码失败，返回 [`crate::DocumentError::MissingSeparator`]。
    #[default]
    Reject,
    /// 丢弃该行，继续处理后续行。
    Skip,
    /// 整行作为键，值为空字符串；空行直接丢弃。
    KeyOnly,
}
