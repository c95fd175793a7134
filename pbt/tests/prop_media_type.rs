//! メディアタイプ照合のプロパティテスト

use pbt::{media_range, media_token};
use proptest::prelude::*;
use shiguredo_http_accept::{MediaType, matches};

// 反射律 (大文字小文字を問わない)
proptest! {
    #[test]
    fn matches_reflexive(range in media_range()) {
        prop_assert!(matches(&range, &range));
        prop_assert!(matches(&range, &range.to_ascii_uppercase()));
    }
}

// */* は何にでも一致する
proptest! {
    #[test]
    fn matches_any(range in media_range(), bare in media_token()) {
        prop_assert!(matches(&range, "*/*"));
        prop_assert!(matches("*/*", &range));
        prop_assert!(matches(&bare, "*/*"));
    }
}

// type/* は同じ type の任意の subtype に一致する
proptest! {
    #[test]
    fn matches_subtype_wildcard(media_type in media_token(), subtype in media_token()) {
        let wildcard = format!("{}/*", media_type);
        let concrete = format!("{}/{}", media_type, subtype);
        prop_assert!(matches(&wildcard, &concrete));
        prop_assert!(matches(&concrete, &wildcard));
        // / の無いトークンは type/* とみなす
        prop_assert!(matches(&media_type, &concrete));
    }
}

// type が異なれば */* 以外では一致しない
proptest! {
    #[test]
    fn matches_different_type(
        a in media_token(),
        b in media_token(),
        subtype in prop_oneof![Just("*".to_string()), media_token()]
    ) {
        prop_assume!(a != b);
        let left = format!("{}/{}", a, subtype);
        let right = format!("{}/{}", b, subtype);
        prop_assert!(!matches(&left, &right));
    }
}

// 対称律
proptest! {
    #[test]
    fn matches_symmetric(
        a in prop_oneof![media_range(), media_token()],
        b in prop_oneof![media_range(), media_token()]
    ) {
        prop_assert_eq!(matches(&a, &b), matches(&b, &a));
    }
}

// MediaType::matches は正規化後の文字列に対する matches と同じ
proptest! {
    #[test]
    fn media_type_matches_agrees(a in media_range(), b in media_range()) {
        let left = MediaType::new(&format!(" {} ", a.to_ascii_uppercase()));
        let right = MediaType::new(&b);
        prop_assert_eq!(left.matches(&right), matches(&a, &b));
    }
}
