//! 编解码选项的 TOML 形态测试。
//!
//! 宿主通常把 `[document]` 表嵌在自身配置文件中；这里固定字段名与枚举取值的拼写。

use console_text::{
    CodecConfig, DocumentOptions, MalformedLinePolicy, deserialize_document_with,
};

#[test]
fn empty_table_uses_defaults() {
    let config: CodecConfig = toml::from_str("").unwrap();
    assert_eq!(config, CodecConfig::default());
    assert_eq!(config.document.malformed_line, MalformedLinePolicy::Reject);
}

#[test]
fn kebab_case_fields_and_policies() {
    let config: CodecConfig = toml::from_str(
        r#"
        [document]
        malformed-line = "key-only"
        trim-carriage-return = true
        "#,
    )
    .unwrap();
    assert_eq!(
        config.document,
        DocumentOptions::with_policy(MalformedLinePolicy::KeyOnly).trim_carriage_return(true)
    );

    let map = deserialize_document_with("flag\r\nk:v\r", &config.document).unwrap();
    assert_eq!(map["flag"], "");
    assert_eq!(map["k"], "v");
}

#[test]
fn unknown_fields_are_rejected() {
    let result = toml::from_str::<CodecConfig>(
        r#"
        [document]
        malformed_line = "skip"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn serializes_back_to_toml() {
    let config = CodecConfig {
        document: DocumentOptions::with_policy(MalformedLinePolicy::Skip),
    };
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("malformed-line = \"skip\""));
    assert_eq!(toml::from_str::<CodecConfig>(&text).unwrap(), config);
}
