//! Accept ヘッダーによるコンテンツネゴシエーションの例
//!
//! 使い方:
//!   cargo run -p accept_negotiate -- --accept "text/html;q=0.8, application/json"
//!   cargo run -p accept_negotiate -- --accept "image/*" --offers "text/html,image/png"
//!
//!   # Accept ヘッダー無し
//!   cargo run -p accept_negotiate
//!
//!   # 破棄されたエントリや候補の走査順を表示
//!   cargo run -p accept_negotiate -- --debug --accept "text/html;q=abc, text/plain"

use shiguredo_http_accept::{
    AcceptLimits, MediaType, Negotiator, Request, Response, invalid_accept, matches,
};

struct Options {
    accept: Option<String>,
    offers: Vec<String>,
    max_candidates: usize,
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = parse_args()?;

    if options.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Trace)
            .init();
    } else {
        env_logger::init();
    }

    let mut request = Request::new("GET", "/");
    if let Some(accept) = &options.accept {
        request.add_header("Accept", accept);
    }

    let negotiator = Negotiator::with_limits(AcceptLimits {
        max_candidates: options.max_candidates,
        ..AcceptLimits::default()
    });

    let mut selected: Option<&str> = None;
    let accepted = negotiator.handle_accept(&request, &mut |media_type: &MediaType| {
        // 優先指定なしなら先頭の offer を返す
        if media_type.is_none() {
            selected = options.offers.first().map(String::as_str);
        } else {
            selected = options
                .offers
                .iter()
                .map(String::as_str)
                .find(|offer| matches(media_type.as_str(), offer));
        }
        selected.is_some()
    });

    let mut response = Response::new(200, "OK");
    match selected {
        Some(content_type) if accepted => {
            response = response.header("Content-Type", content_type);
        }
        _ => invalid_accept(&mut response),
    }

    println!("{} {}", response.status_code, response.reason_phrase);
    for (name, value) in &response.headers {
        println!("{}: {}", name, value);
    }

    Ok(())
}

fn parse_args() -> Result<Options, Box<dyn std::error::Error>> {
    let mut args = noargs::raw_args();
    args.metadata_mut().app_name = "accept_negotiate";

    // --help フラグ
    noargs::HELP_FLAG.take_help(&mut args);

    // --version フラグ
    let version_flag: bool = noargs::flag("version")
        .short('V')
        .doc("Show version")
        .take(&mut args)
        .is_present();
    if version_flag {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    // --debug フラグ
    let debug: bool = noargs::flag("debug")
        .doc("Enable debug logging")
        .take(&mut args)
        .is_present();

    // --accept オプション (省略時は Accept ヘッダー無し)
    let accept: Option<String> = noargs::opt("accept")
        .short('a')
        .doc("Accept header value")
        .take(&mut args)
        .present_and_then(|o| Ok::<_, &str>(o.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // --offers オプション
    let offers: String = noargs::opt("offers")
        .short('o')
        .doc("Comma separated media types the server can produce")
        .default("text/html,application/json,text/plain")
        .take(&mut args)
        .then(|o| Ok::<_, &str>(o.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    // --max-candidates オプション
    let max_candidates: usize = noargs::opt("max-candidates")
        .doc("Maximum number of Accept entries to consider (default: 100)")
        .default("100")
        .take(&mut args)
        .then(|o| o.value().parse())
        .map_err(|e| format!("{:?}", e))?;

    // 未知の引数があればエラー、ヘルプが返されたら表示
    if let Some(help) = args.finish().map_err(|e| format!("{:?}", e))? {
        print!("{}", help);
        std::process::exit(0);
    }

    let offers = offers
        .split(',')
        .map(|offer| offer.trim().to_string())
        .filter(|offer| !offer.is_empty())
        .collect();

    Ok(Options {
        accept,
        offers,
        max_candidates,
        debug,
    })
}
