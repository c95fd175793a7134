#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_http_accept::{
    AcceptLimits, CandidateList, MediaType, Negotiator, WeightedCandidate, matches, negotiate,
};

#[derive(Arbitrary, Debug)]
struct FuzzAccept {
    header: String,
    offers: Vec<String>,
    accept_index: Option<u8>,
    max_candidates: u8,
}

fuzz_target!(|input: FuzzAccept| {
    let parsed = CandidateList::parse(&input.header);
    for candidate in parsed.iter() {
        assert!(!candidate.media_type().is_none());
        assert!(candidate.weight().value() <= 1999);
        let _ = WeightedCandidate::parse(&candidate.to_string());
    }

    let ranked = parsed.clone().rank();
    assert_eq!(ranked.len(), parsed.len());
    for pair in ranked.items().windows(2) {
        assert!(pair[0].weight() >= pair[1].weight());
    }

    // accept_index 番目の呼び出しで受け入れる
    let mut calls = 0usize;
    let accepted = negotiate(&input.header, &mut |media_type: &MediaType| {
        calls += 1;
        for offer in &input.offers {
            let _ = matches(media_type.as_str(), offer);
        }
        input.accept_index.is_some_and(|index| calls == index as usize + 1)
    });
    let expected_calls = ranked.len().max(1);
    if accepted {
        assert!(calls <= expected_calls);
    } else {
        assert_eq!(calls, expected_calls);
    }

    let negotiator = Negotiator::with_limits(AcceptLimits {
        max_candidates: input.max_candidates as usize,
        ..AcceptLimits::default()
    });
    let mut limited_calls = 0usize;
    negotiator.negotiate(&input.header, &mut |_: &MediaType| {
        limited_calls += 1;
        false
    });
    assert!(limited_calls <= (input.max_candidates as usize).max(1));
});
