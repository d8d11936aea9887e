#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use console_text::{
    DocumentOptions, MalformedLinePolicy, deserialize_document, deserialize_document_with,
    display_name, serialize_document,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz 用例：一组待写出的记录，以及一段直接送入解码器的原始文本。
///
/// - **Why**：记录用于差分比较“写出再读回”的映射；原始文本用于确认任意输入在三种策略下都不会 panic。
/// - **What**：键与值在比较前会被归一化，剔除格式本身无法往返的形态。
#[derive(Debug, Arbitrary)]
struct DocumentCase {
    entries: Vec<(String, String)>,
    raw: String,
}

/// 键不能为空，也不能含 `:` 或换行。
fn sanitize_key(key: &str) -> Option<String> {
    let key: String = key.chars().filter(|ch| *ch != ':' && *ch != '\n').collect();
    (!key.is_empty()).then_some(key)
}

/// 值中原始的反斜杠加 n 会在读回时变成换行，这里把这种组合里的反斜杠去掉。
fn sanitize_value(value: &str) -> String {
    let mut value = value.to_owned();
    while value.contains("\\n") {
        value = value.replace("\\n", "n");
    }
    value
}

fuzz_target!(|case: DocumentCase| {
    let mut expected = BTreeMap::new();
    for (key, value) in &case.entries {
        if let Some(key) = sanitize_key(key) {
            expected.insert(key, sanitize_value(value));
        }
    }

    let text = serialize_document(&expected);
    let decoded = deserialize_document(&text).expect("serialized document must decode");
    assert_eq!(decoded, expected);

    for policy in [
        MalformedLinePolicy::Reject,
        MalformedLinePolicy::Skip,
        MalformedLinePolicy::KeyOnly,
    ] {
        let options = DocumentOptions::with_policy(policy).trim_carriage_return(true);
        let _ = deserialize_document_with(&case.raw, &options);
    }

    let _ = display_name(&case.raw);
});
