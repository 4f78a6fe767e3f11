use eh_core::{classify, parse, parse_filter, DomainMap, FilterError, FilterType};

fn normalize(text: &str) -> (String, eh_core::ParseOutcome) {
    let mut owned = text.to_string();
    let outcome = parse(&mut owned);
    (owned, outcome)
}

#[test]
fn classifies_filter_list_lines() {
    let cases = [
        ("example.com##.ad", FilterType::ElemHide),
        ("example.com#@#.ad", FilterType::ElemHideException),
        ("##div[-abp-properties='foo']", FilterType::CssProperty),
        ("exa/mple.com##div", FilterType::Unknown),
        ("example.com##", FilterType::Unknown),
        ("@@||example.com^$elemhide", FilterType::Unknown),
        ("! Title: Example list", FilterType::Unknown),
        ("/banner/*/img^", FilterType::Unknown),
        ("example.com#?#div:-abp-has(.ad)", FilterType::Unknown),
    ];

    for (text, expected) in cases {
        assert_eq!(classify(text), expected, "{text}");
    }
}

#[test]
fn normalizes_prefix_but_not_selector() {
    let (text, outcome) = normalize("example.com # # .ad .foo");
    assert_eq!(outcome.kind, FilterType::ElemHide);
    assert_eq!(text, "example.com##.ad .foo");
    assert_eq!(&text[outcome.selector_start..], ".ad .foo");
    assert_eq!(&text[..outcome.domains_end], "example.com");
}

#[test]
fn normalization_is_idempotent() {
    for input in [
        "example.com # # .ad .foo",
        "A.com , ~B.com #@#  div > p",
        "x.com ## p[-abp-properties='a b'] em",
        "##.plain",
    ] {
        let (first_text, first) = normalize(input);
        let (second_text, second) = normalize(&first_text);
        assert_eq!(first_text, second_text, "{input}");
        assert_eq!(first, second, "{input}");
    }
}

#[test]
fn offsets_stay_within_text() {
    for input in [
        "##a",
        "a.com##b",
        "a.com , b.com # @ # c d",
        "x.com ## p[-abp-properties=\"a\"]",
    ] {
        let (text, outcome) = normalize(input);
        assert!(outcome.domains_end <= outcome.selector_start, "{input}");
        assert!(outcome.selector_start <= text.len(), "{input}");
    }
}

#[test]
fn css_property_filter_exposes_pattern() {
    let filter = parse_filter("##div[-abp-properties='foo']").expect("valid filter");
    assert_eq!(filter.kind(), FilterType::CssProperty);
    assert_eq!(filter.outcome().domains_end, 0);

    let css = filter.css_property().expect("css property");
    assert_eq!(css.regexp_source(), "foo");
    assert_eq!(css.selector_prefix(), "div");
    assert_eq!(css.selector_suffix(), "");
}

#[test]
fn css_property_literal_regexp() {
    let filter = parse_filter("example.com##[-abp-properties='/color: rgb\\(0, 0, 0\\)/']")
        .expect("valid filter");
    let css = filter.css_property().expect("css property");
    assert_eq!(css.regexp_pattern(), "color: rgb\\(0, 0, 0\\)");
}

#[test]
fn domain_list_serialization() {
    let domains = DomainMap::parse("a.com,~b.com,c.com", ',');
    assert_eq!(domains.selector_domain(','), "a.com,c.com");

    let filter = parse_filter("A.com,~b.com,C.com##.ad").expect("valid filter");
    assert_eq!(filter.selector_domain(), "a.com,c.com");
}

#[test]
fn domain_activation_follows_most_specific_entry() {
    let filter = parse_filter("example.com,~shop.example.com,deals.shop.example.com##.ad")
        .expect("valid filter");

    assert!(filter.is_active_on_domain("example.com"));
    assert!(!filter.is_active_on_domain("shop.example.com"));
    assert!(filter.is_active_on_domain("deals.shop.example.com"));
    assert!(filter.is_active_on_domain("www.deals.shop.example.com"));
    assert!(!filter.is_active_on_domain("example.net"));
}

#[test]
fn rejected_lines_report_text() {
    match parse_filter("  exa*mple.com##div ") {
        Err(FilterError::NotElemHide(text)) => assert_eq!(text, "exa*mple.com##div"),
        other => panic!("unexpected result: {other:?}"),
    }
}
