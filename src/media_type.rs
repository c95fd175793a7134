//! メディアタイプとワイルドカード照合
//!
//! ## 概要
//!
//! Accept ヘッダーの各エントリから取り出したメディアタイプ (`type/subtype`) を表現します。
//! 値は前後の空白を除去し ASCII 小文字に正規化して保持します。
//! 形式の検証 (トークン文字チェック等) は行いません。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_accept::media_type::{MediaType, matches};
//!
//! let media_type = MediaType::new(" Text/HTML ");
//! assert_eq!(media_type.as_str(), "text/html");
//! assert!(media_type.matches(&MediaType::new("text/*")));
//!
//! assert!(matches("html", "html/*"));
//! assert!(!matches("application/json", "text/*"));
//! ```

use core::fmt;

/// ワイルドカードトークン
pub const WILDCARD: &str = "*";

/// 全てに一致するメディアレンジ
pub const ANY: &str = "*/*";

/// メディアタイプ
///
/// 空のメディアタイプは「優先指定なし」を表すセンチネルです。
/// Accept ヘッダーが無い、または有効なエントリが一つも無い場合に
/// ハンドラーへ渡されます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MediaType(String);

impl MediaType {
    /// メディアタイプを作成 (空白除去と小文字化を行う)
    pub fn new(input: &str) -> Self {
        MediaType(input.trim().to_ascii_lowercase())
    }

    /// 優先指定なしを表す空のメディアタイプ
    pub fn none() -> Self {
        MediaType(String::new())
    }

    /// 空のメディアタイプか確認
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// `*/*` か確認
    pub fn is_wildcard(&self) -> bool {
        self.0 == ANY
    }

    /// 文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// type 部分
    pub fn type_part(&self) -> &str {
        split_media_type(&self.0).0
    }

    /// subtype 部分 (`/` が無い場合は `*`)
    pub fn subtype_part(&self) -> &str {
        split_media_type(&self.0).1
    }

    /// ワイルドカードを考慮して照合
    pub fn matches(&self, other: &MediaType) -> bool {
        matches(&self.0, &other.0)
    }

    /// 文字列に変換
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        MediaType::new(value)
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        MediaType::new(&value)
    }
}

impl PartialEq<str> for MediaType {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl PartialEq<&str> for MediaType {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// 二つのメディアタイプをワイルドカードを考慮して照合する
///
/// - 大文字小文字を区別せず完全一致、またはどちらかが `*/*` なら一致
/// - それ以外は最初の `/` で type と subtype に分割する
///   (`/` が無い場合は subtype を `*` とみなす)
/// - type が一致し、subtype が一致するかどちらかが `*` なら一致
pub fn matches(a: &str, b: &str) -> bool {
    if a.eq_ignore_ascii_case(b) || a == ANY || b == ANY {
        return true;
    }

    let (a_type, a_subtype) = split_media_type(a);
    let (b_type, b_subtype) = split_media_type(b);

    if !a_type.eq_ignore_ascii_case(b_type) {
        return false;
    }

    a_subtype == WILDCARD || b_subtype == WILDCARD || a_subtype.eq_ignore_ascii_case(b_subtype)
}

fn split_media_type(input: &str) -> (&str, &str) {
    input.split_once('/').unwrap_or((input, WILDCARD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes() {
        let media_type = MediaType::new("  Application/JSON ");
        assert_eq!(media_type.as_str(), "application/json");
        assert_eq!(media_type.type_part(), "application");
        assert_eq!(media_type.subtype_part(), "json");
    }

    #[test]
    fn new_lowercases_ascii_only() {
        let media_type = MediaType::new("TEXT/ÄÖ");
        assert_eq!(media_type.as_str(), "text/ÄÖ");
        assert!(matches("TEXT/ÄÖ", "text/ÄÖ"));
        assert!(!matches("text/äö", "text/ÄÖ"));
    }

    #[test]
    fn bare_token_has_wildcard_subtype() {
        let media_type = MediaType::new("html");
        assert_eq!(media_type.type_part(), "html");
        assert_eq!(media_type.subtype_part(), "*");
    }

    #[test]
    fn none_sentinel() {
        assert!(MediaType::none().is_none());
        assert!(MediaType::new("   ").is_none());
        assert!(!MediaType::new("text/html").is_none());
        assert_eq!(MediaType::none(), MediaType::default());
    }

    #[test]
    fn matches_wildcards() {
        assert!(matches("text/html", "*/*"));
        assert!(matches("*/*", "image/png"));
        assert!(matches("text/*", "text/html"));
        assert!(matches("text/html", "text/*"));
        assert!(!matches("application/json", "text/*"));
        assert!(!matches("text/plain", "text/html"));
    }

    #[test]
    fn matches_case_insensitive() {
        assert!(matches("TEXT/HTML", "text/html"));
        assert!(matches("Text/*", "text/CSS"));
    }

    #[test]
    fn matches_bare_token() {
        assert!(matches("html", "html/*"));
        assert!(matches("html", "html/anything"));
        assert!(!matches("html", "text/html"));
    }

    #[test]
    fn matches_splits_on_first_slash() {
        assert!(matches("a/b/c", "a/*"));
        assert!(!matches("a/b/c", "a/b"));
    }

    #[test]
    fn media_type_matches_method() {
        let accepted = MediaType::new("text/*");
        assert!(accepted.matches(&MediaType::new("text/plain")));
        assert!(!accepted.matches(&MediaType::new("image/png")));
    }

    #[test]
    fn eq_str() {
        let media_type = MediaType::new("text/html");
        assert!(media_type == "text/html");
        assert!(media_type == "TEXT/HTML");
        assert!(media_type != "text/plain");
        assert_eq!(media_type.to_string(), "text/html");
    }
}
