//! Accept ヘッダーによるコンテンツネゴシエーション
//!
//! ## 概要
//!
//! Accept ヘッダーをパースして重みの降順に並べ、ハンドラーがいずれかの
//! メディアタイプを受け入れるまで順に呼び出します。
//!
//! - ハンドラーが `true` を返した時点で終了し `true` を返す
//! - 全候補で `false` だった場合は `false` を返す
//! - 候補が一つも無い場合は空のメディアタイプ ([`MediaType::none`]) で一度だけ呼び出す
//!
//! `false` が返った場合に 406 を返すかどうかは呼び出し側が決めます ([`invalid_accept`])。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_accept::{MediaType, negotiate};
//!
//! let mut selected = None;
//! let accepted = negotiate(
//!     "application/json;q=0.8, text/html",
//!     &mut |media_type: &MediaType| {
//!         if media_type == "application/json" {
//!             selected = Some(media_type.clone());
//!             return true;
//!         }
//!         false
//!     },
//! );
//! assert!(accepted);
//! assert_eq!(selected.unwrap().as_str(), "application/json");
//! ```

use crate::accept::CandidateList;
use crate::limits::AcceptLimits;
use crate::log::{debug, trace};
use crate::media_type::MediaType;
use crate::request::Request;
use crate::response::Response;

/// メディアタイプを処理するハンドラー
///
/// 処理できた (これ以上の候補は不要) 場合は `true`、
/// 処理できず次の候補を試す場合は `false` を返します。
///
/// 空のメディアタイプは優先指定が無いことを表します。
/// 一回のネゴシエーションで 0 回以上呼び出されます。
pub trait Handler {
    /// メディアタイプを処理
    fn handle(&mut self, media_type: &MediaType) -> bool;
}

impl<F> Handler for F
where
    F: FnMut(&MediaType) -> bool,
{
    fn handle(&mut self, media_type: &MediaType) -> bool {
        self(media_type)
    }
}

/// 制限設定付きのネゴシエーター
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Negotiator {
    limits: AcceptLimits,
}

impl Negotiator {
    /// デフォルトの制限でネゴシエーターを作成
    pub fn new() -> Self {
        Self::with_limits(AcceptLimits::default())
    }

    /// 制限を指定してネゴシエーターを作成
    pub fn with_limits(limits: AcceptLimits) -> Self {
        Self { limits }
    }

    /// 制限設定
    pub fn limits(&self) -> &AcceptLimits {
        &self.limits
    }

    /// Accept ヘッダーの値でネゴシエーション
    pub fn negotiate<H>(&self, header: &str, handler: &mut H) -> bool
    where
        H: Handler + ?Sized,
    {
        let candidates = CandidateList::parse_with_limits(header, &self.limits).rank();
        dispatch(candidates, handler)
    }

    /// リクエストの Accept ヘッダーでネゴシエーション
    ///
    /// Accept ヘッダーが無い場合は空文字列として扱います。
    pub fn handle_accept<H>(&self, request: &Request, handler: &mut H) -> bool
    where
        H: Handler + ?Sized,
    {
        self.negotiate(request.accept().unwrap_or_default(), handler)
    }
}

/// Accept ヘッダーの値でネゴシエーション
///
/// ハンドラーが `true` を返した場合 `true`、それ以外は `false` を返します。
pub fn negotiate<H>(header: &str, handler: &mut H) -> bool
where
    H: Handler + ?Sized,
{
    dispatch(CandidateList::parse(header).rank(), handler)
}

/// リクエストの Accept ヘッダーでネゴシエーション
///
/// Accept ヘッダーが無い場合、ハンドラーには空のメディアタイプが渡されます。
pub fn handle_accept<H>(request: &Request, handler: &mut H) -> bool
where
    H: Handler + ?Sized,
{
    negotiate(request.accept().unwrap_or_default(), handler)
}

/// レスポンスのステータスを 406 Not Acceptable にする
///
/// ヘッダーとボディには触れません。
pub fn invalid_accept(response: &mut Response) {
    response.set_status(406, "Not Acceptable");
}

fn dispatch<H>(candidates: CandidateList, handler: &mut H) -> bool
where
    H: Handler + ?Sized,
{
    if candidates.is_empty() {
        debug!("no acceptable media type in accept header");
        return handler.handle(&MediaType::none());
    }

    for candidate in &candidates {
        trace!(
            "handle media type {} (weight {})",
            candidate.media_type(),
            candidate.weight()
        );
        if handler.handle(candidate.media_type()) {
            return true;
        }
    }
    false
}
