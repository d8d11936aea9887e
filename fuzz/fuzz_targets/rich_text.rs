#![no_main]

use console_text::rich_text::parse_rich_text;
use libfuzzer_sys::fuzz_target;

// 任意文本都能解析；区间非空且落在去标签文本的字符边界内，去标签文本不会比输入更长。
fuzz_target!(|data: &[u8]| {
    let Ok(markup) = std::str::from_utf8(data) else {
        return;
    };

    let rich = parse_rich_text(markup);
    assert!(rich.text.len() <= markup.len());
    for span in &rich.spans {
        assert!(span.len > 0);
        assert!(rich.text.get(span.range()).is_some());
    }
});
