//! Accept ヘッダーパースと重み付け
//!
//! ## 概要
//!
//! Accept ヘッダーをカンマ区切りのエントリに分割し、各エントリから
//! メディアタイプと q 値を取り出して候補リストを作成します。
//!
//! RFC 9110 の文法を完全には実装しません。扱うのは q 値による重み付けのみで、
//! q 以外のパラメータは無視されます。不正なエントリはエラーにせず読み飛ばします。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_accept::accept::CandidateList;
//!
//! let candidates = CandidateList::parse("text/plain;q=0.5, text/html").rank();
//! assert_eq!(candidates.items()[0].media_type().as_str(), "text/html");
//! assert_eq!(candidates.items()[1].weight().value(), 500);
//! ```

use core::fmt;

use crate::limits::AcceptLimits;
use crate::log::debug;
use crate::media_type::MediaType;

const ENTRY_SEPARATOR: char = ',';
const PARAMETER_SEPARATOR: char = ';';
const WEIGHT_PREFIX: &str = "q=";

// 指数表記の q 値を 1000 倍した時に許容する誤差 (ULP 単位)
const MILLIS_ULPS: f64 = 4.0;

/// Accept エントリのパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptError {
    /// 空のメディアタイプ
    EmptyMediaType,
    /// 数値として解釈できない q 値
    InvalidQValue,
    /// 範囲外の q 値 ([0, 2) の外)
    QValueOutOfRange,
}

impl fmt::Display for AcceptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptError::EmptyMediaType => write!(f, "empty media type"),
            AcceptError::InvalidQValue => write!(f, "invalid qvalue"),
            AcceptError::QValueOutOfRange => write!(f, "qvalue out of range"),
        }
    }
}

impl std::error::Error for AcceptError {}

/// 重み (q 値を 1000 倍した整数、0 - 1999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    /// 最大値 (q=1.999)
    pub const MAX: Weight = Weight(1999);

    /// q 値をパース
    ///
    /// 浮動小数点数として解釈し、[0, 2) の範囲外はエラーになります。
    /// 前後の空白は受け付けません。
    /// 重みは 1000 倍して小数点以下を切り捨てた値です。
    pub fn parse(input: &str) -> Result<Self, AcceptError> {
        let q: f64 = input.parse().map_err(|_| AcceptError::InvalidQValue)?;

        // NaN もここで弾かれる
        if !(0.0..2.0).contains(&q) {
            return Err(AcceptError::QValueOutOfRange);
        }

        let millis = decimal_millis(input).unwrap_or_else(|| float_millis(q));
        Ok(Weight(millis))
    }

    /// ミリ単位の重みから作成 (範囲外は None)
    pub fn from_millis(value: u16) -> Option<Self> {
        (value <= Self::MAX.0).then_some(Weight(value))
    }

    /// ミリ単位の重み (0-1999)
    pub fn value(&self) -> u16 {
        self.0
    }

    /// f32 に変換
    pub fn as_f32(&self) -> f32 {
        self.0 as f32 / 1000.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight(1000)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = self.0 / 1000;
        let fraction = self.0 % 1000;
        if fraction == 0 {
            return write!(f, "{}", integer);
        }

        let mut frac = format!("{:03}", fraction);
        while frac.ends_with('0') {
            frac.pop();
        }
        write!(f, "{}.{}", integer, frac)
    }
}

// 10 進表記 ([+]digits[.digits]) なら小数第 3 位より下を文字列のまま切り捨てる
//
// 範囲チェック済みの値に対してのみ呼び出す。
fn decimal_millis(input: &str) -> Option<u16> {
    let digits = input.strip_prefix('+').unwrap_or(input);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if !integer.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let mut millis: u32 = 0;
    for b in integer.bytes() {
        millis = millis.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }
    millis = millis.checked_mul(1000)?;

    let mut scale = 100;
    for b in fraction.bytes().take(3) {
        millis += u32::from(b - b'0') * scale;
        scale /= 10;
    }

    u16::try_from(millis)
        .ok()
        .filter(|millis| *millis <= Weight::MAX.0)
}

// 指数表記など 10 進表記以外の場合
fn float_millis(q: f64) -> u16 {
    let millis = q * 1000.0;
    let rounded = millis.round();
    // 5e-1 * 1000 のような数 ULP の誤差だけを吸収する
    let tolerance = millis * MILLIS_ULPS * f64::EPSILON;
    let value = if rounded - millis > 0.0
        && rounded - millis <= tolerance
        && rounded <= Weight::MAX.0 as f64
    {
        rounded
    } else {
        millis.floor()
    };
    value as u16
}

/// 重み付きの候補
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedCandidate {
    media_type: MediaType,
    weight: Weight,
}

impl WeightedCandidate {
    /// 候補を作成
    pub fn new(media_type: MediaType, weight: Weight) -> Self {
        Self { media_type, weight }
    }

    /// Accept ヘッダーのエントリ一つ分をパース
    ///
    /// `;` で区切ったパラメータのうち、最初に `q=` で始まるものだけを重みとして扱います。
    pub fn parse(entry: &str) -> Result<Self, AcceptError> {
        let mut parts = entry.split(PARAMETER_SEPARATOR);
        let media_type = MediaType::new(parts.next().unwrap_or_default());
        if media_type.is_none() {
            return Err(AcceptError::EmptyMediaType);
        }

        let mut weight = Weight::default();
        for param in parts {
            if let Some(value) = param.trim().strip_prefix(WEIGHT_PREFIX) {
                weight = Weight::parse(value)?;
                break;
            }
        }

        Ok(Self { media_type, weight })
    }

    /// メディアタイプ
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// 重み
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// メディアタイプを取り出す
    pub fn into_media_type(self) -> MediaType {
        self.media_type
    }
}

impl fmt::Display for WeightedCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.media_type)?;
        if self.weight != Weight::default() {
            write!(f, ";q={}", self.weight)?;
        }
        Ok(())
    }
}

/// 候補リスト
///
/// [`CandidateList::parse`] 直後はヘッダーに書かれた順、
/// [`CandidateList::rank`] 後は重みの降順になります。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    items: Vec<WeightedCandidate>,
}

impl CandidateList {
    /// Accept ヘッダーをパース
    ///
    /// 不正なエントリは読み飛ばします。ヘッダーが空、もしくは全エントリが不正な場合は空のリストになります。
    pub fn parse(header: &str) -> Self {
        Self::parse_with_limits(header, &AcceptLimits::unlimited())
    }

    /// 制限付きで Accept ヘッダーをパース
    pub fn parse_with_limits(header: &str, limits: &AcceptLimits) -> Self {
        if header.len() > limits.max_header_size {
            debug!(
                "accept header too large: {} > {}",
                header.len(),
                limits.max_header_size
            );
            return Self::default();
        }

        let capacity = (header.matches(ENTRY_SEPARATOR).count() + 1).min(limits.max_candidates);
        let mut items = Vec::with_capacity(capacity);
        for entry in header.split(ENTRY_SEPARATOR) {
            if items.len() >= limits.max_candidates {
                debug!("too many accept candidates: limit {}", limits.max_candidates);
                break;
            }
            match WeightedCandidate::parse(entry) {
                Ok(candidate) => items.push(candidate),
                Err(e) => {
                    debug!("discard accept entry {:?}: {}", entry, e);
                }
            }
        }

        Self { items }
    }

    /// 重みの降順に並べ替える
    ///
    /// 安定ソートなので、同じ重みの候補はヘッダーに書かれた順を保ちます。
    pub fn rank(mut self) -> Self {
        self.items.sort_by(|a, b| b.weight.cmp(&a.weight));
        self
    }

    /// 候補一覧
    pub fn items(&self) -> &[WeightedCandidate] {
        &self.items
    }

    /// 先頭の候補
    pub fn first(&self) -> Option<&WeightedCandidate> {
        self.items.first()
    }

    /// 候補数
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 空か確認
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 候補のイテレーター
    pub fn iter(&self) -> core::slice::Iter<'_, WeightedCandidate> {
        self.items.iter()
    }
}

impl FromIterator<WeightedCandidate> for CandidateList {
    fn from_iter<I: IntoIterator<Item = WeightedCandidate>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CandidateList {
    type Item = WeightedCandidate;
    type IntoIter = std::vec::IntoIter<WeightedCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a WeightedCandidate;
    type IntoIter = core::slice::Iter<'a, WeightedCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for CandidateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.items.iter().map(|item| item.to_string()).collect();
        write!(f, "{}", values.join(", "))
    }
}
