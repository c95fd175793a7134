//! PBT テスト共通ユーティリティ

use proptest::prelude::*;

// ========================================
// メディアタイプ生成
// ========================================

/// type / subtype トークン
pub fn media_token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.+-]{0,7}".prop_map(|s| s)
}

/// `type/subtype`, `type/*`, `*/*`
pub fn media_range() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*/*".to_string()),
        (media_token(), media_token()).prop_map(|(t, s)| format!("{}/{}", t, s)),
        media_token().prop_map(|t| format!("{}/*", t)),
    ]
}

/// 重みを q 値の文字列に変換 (0-1999)
pub fn qvalue_string(value: u16) -> String {
    let integer = value / 1000;
    let fraction = value % 1000;
    if fraction == 0 {
        return integer.to_string();
    }

    let mut frac = format!("{:03}", fraction);
    while frac.ends_with('0') {
        frac.pop();
    }
    format!("{}.{}", integer, frac)
}

/// Accept エントリ (メディアレンジと省略可能な q 値)
pub fn accept_entry() -> impl Strategy<Value = (String, Option<u16>)> {
    (media_range(), proptest::option::of(0u16..2000u16))
}

/// エントリ一覧から Accept ヘッダーを組み立てる
pub fn build_header(entries: &[(String, Option<u16>)]) -> String {
    entries
        .iter()
        .map(|(range, q)| match q {
            Some(q) => format!("{};q={}", range, qvalue_string(*q)),
            None => range.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
