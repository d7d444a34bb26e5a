//! Tests for URL, domain, and IPv4 classification.

use urlkit::*;

#[test]
fn test_is_string_url_rejections() {
    let not_urls = [
        "",
        "i.ua/",
        "test.com/test/test",
        "chrome://hello.com/",
        "http://a.a.a/",
        "http://a. a.a/",
    ];

    for candidate in not_urls {
        assert!(!is_string_url(candidate), "should reject: {candidate}");
    }
}

#[test]
fn test_is_string_url_acceptances() {
    let urls = [
        "http://localhost",
        "http://localhost////",
        "http://ru.ru",
        "https://ru.ru/section/?p=1",
        "ftp://ru.ru",
        "http://привет.рф/",
        "http://50.22.113.176/a/b/c/",
        "http://политгазета.рф/item/1633-с-высоты/",
    ];

    for candidate in urls {
        assert!(is_string_url(candidate), "should accept: {candidate}");
    }
}

#[test]
fn test_is_string_domain_rejections() {
    let not_domains = [
        "hello-world.aero  ",
        "http://google098.co.uk",
        " dOMain.com  ",
        "__asd.com",
        "gooooooogle. gtrtrtg wertgwerg",
        "gooooogle.45",
        "gooooogle.com/",
        "gooooogle.i",
        "127.0.0.1",
    ];

    for candidate in not_domains {
        assert!(!is_string_domain(candidate), "should reject: {candidate}");
    }
}

#[test]
fn test_is_string_domain_acceptances() {
    let domains = [
        "localhost",
        "google098.co.uk",
        "www.en.hello.world.co.uk",
        "привет.рф",
        "стенгазета.рф",
        "a-b-c.museum",
    ];

    for candidate in domains {
        assert!(is_string_domain(candidate), "should accept: {candidate}");
    }
}

#[test]
fn test_is_string_ipv4() {
    assert!(is_string_ipv4("255.0.12.123"));
    assert!(is_string_ipv4("0.0.0.0"));
    assert!(is_string_ipv4("1.0.0.255"));

    assert!(!is_string_ipv4("1.123.12.-"));
    assert!(!is_string_ipv4("2333.123.12.1"));
    assert!(!is_string_ipv4("233.a.12.1"));
    assert!(!is_string_ipv4(""));
    assert!(!is_string_ipv4("helloipv4"));
}

#[test]
fn test_is_url_or_domain_valid() {
    assert!(is_url_or_domain_valid("http://www.google.com"));
    assert!(is_url_or_domain_valid("www.google.co.uk"));
    assert!(is_url_or_domain_valid("a.ru"));
    assert!(is_url_or_domain_valid("привет.рф"));

    assert!(!is_url_or_domain_valid(""));
    assert!(!is_url_or_domain_valid(" spaced text"));
    assert!(!is_url_or_domain_valid("word"));
    assert!(!is_url_or_domain_valid("a.a.a.a.a.a.a.a.a.a.a.aa..a"));
}

#[test]
fn test_is_url_domain() {
    // Not a URL naming exactly a domain.
    assert!(!is_url_domain("aer ewr wtgw 4r g"));
    assert!(!is_url_domain("chrome://google.com/"));
    assert!(!is_url_domain("http://"));
    assert!(!is_url_domain(""));
    assert!(!is_url_domain("http://__asd__ads.com/"));
    assert!(!is_url_domain("http://привет.рф?t=5"));

    // Valid URL whose authority is a domain, bare of path and query.
    assert!(is_url_domain("http://i.ua/"));
    assert!(is_url_domain("https://www.hello-world.co.uk/"));
    assert!(is_url_domain("http://привет.рф/"));
    assert!(is_url_domain("http://привет.рф"));
}

#[test]
fn test_decode_url_idna() {
    assert_eq!(
        decode_url("http://привет.рф/hello"),
        "http://xn--b1agh1afp.xn--p1ai/hello"
    );
    assert_eq!(
        decode_url("http://алло.укр/алло-тест"),
        "http://xn--80awam.xn--j1amh/алло-тест"
    );
    assert_eq!(
        decode_url("http://hello-world.com/page"),
        "http://hello-world.com/page"
    );
}

#[test]
fn test_unicode_url_still_classifies_after_idna() {
    // The Unicode form is judged through its ASCII-Compatible encoding.
    assert!(is_string_url("http://привет.рф/"));
    assert!(is_string_url("http://привет.рф/hello"));
}

#[test]
fn test_decode_string_best_effort() {
    assert_eq!(decode_string(b"hello").as_deref(), Some("hello"));
    assert_eq!(
        decode_string("привет".as_bytes()).as_deref(),
        Some("привет")
    );
}
