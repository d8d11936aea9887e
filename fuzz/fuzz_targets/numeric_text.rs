#![no_main]

use console_text::numeric::{format_float, parse_f32, parse_i32};
use libfuzzer_sys::fuzz_target;

// 任意文本只会得到 Ok/Err，不会 panic；解析成功的值格式化后必须能读回同一数值。
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(value) = parse_f32(text) {
        let formatted = format_float(value);
        assert_eq!(parse_f32(&formatted), Ok(value));
    }
    let _ = parse_i32(text);
});
