//! # shiguredo_http_accept
//!
//! 依存なしの HTTP Accept ヘッダー コンテンツネゴシエーションライブラリ (Sans I/O)
//!
//! ## 特徴
//!
//! - **依存なし**: 標準ライブラリのみ使用 (`log` フィーチャーを除く)
//! - **Sans I/O**: ヘッダーの取得やレスポンスの送信は呼び出し側が行う
//! - **寛容なパース**: 不正なエントリはエラーにせず読み飛ばす
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_accept::{MediaType, Request, Response, handle_accept, invalid_accept};
//!
//! let request = Request::new("GET", "/")
//!     .header("Accept", "text/plain;q=0.5, application/json");
//!
//! // サーバーが生成できる表現
//! let offers = ["text/html", "text/plain"];
//!
//! let mut chosen = None;
//! let accepted = handle_accept(&request, &mut |media_type: &MediaType| {
//!     if media_type.is_none() {
//!         chosen = Some(offers[0]);
//!         return true;
//!     }
//!     chosen = offers
//!         .iter()
//!         .copied()
//!         .find(|offer| media_type.matches(&MediaType::new(offer)));
//!     chosen.is_some()
//! });
//! assert!(accepted);
//! assert_eq!(chosen, Some("text/plain"));
//!
//! let mut response = Response::new(200, "OK");
//! if !accepted {
//!     invalid_accept(&mut response);
//! }
//! assert_eq!(response.status_code, 200);
//! ```

pub mod accept;
mod limits;
mod log;
pub mod media_type;
mod negotiate;
mod request;
mod response;

pub use accept::{AcceptError, CandidateList, Weight, WeightedCandidate};
pub use limits::AcceptLimits;
pub use media_type::{MediaType, matches};
pub use negotiate::{Handler, Negotiator, handle_accept, invalid_accept, negotiate};
pub use request::Request;
pub use response::Response;
