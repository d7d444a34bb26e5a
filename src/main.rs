fn main() {
    tracing_subscriber::fmt::init();

    println!("urlkit demo");
    println!("===========");

    println!("\n1. Classification:");
    let candidates = [
        "http://localhost",
        "https://ru.ru/section/?p=1",
        "http://привет.рф/",
        "chrome://hello.com/",
        "i.ua/",
        "50.22.113.176",
    ];
    for candidate in candidates {
        println!(
            "  {:32} url: {:5}  domain: {:5}  ipv4: {}",
            candidate,
            urlkit::is_string_url(candidate),
            urlkit::is_string_domain(candidate),
            urlkit::is_string_ipv4(candidate),
        );
    }

    println!("\n2. Cleaning and toggles:");
    let raw = "   https://www.atape.net/test/  ";
    println!("  full_clean_url({raw:?}) = {:?}", urlkit::full_clean_url(raw));
    println!(
        "  toggle_url_www(\"http://atape.net/\") = {:?}",
        urlkit::toggle_url_www("http://atape.net/")
    );
    println!(
        "  toggle_last_url_slash(\"http://test.com/page\") = {:?}",
        urlkit::toggle_last_url_slash("http://test.com/page", false)
    );

    println!("\n3. Structure and zones:");
    match urlkit::split_url("https://www.test.com/hello?t=5&r=6#anchor", true) {
        Ok((domain, uri)) => println!("  split_url → domain: {domain:?}, uri: {uri:?}"),
        Err(e) => println!("  split_url ✗ {e}"),
    }
    println!(
        "  decode_url(\"http://привет.рф/hello\") = {:?}",
        urlkit::decode_url("http://привет.рф/hello")
    );
    for sample in ["rada.gov.ua/", "http://www.google.com.ua/", "http://test.museum/"] {
        println!(
            "  {:28} zone: {:8} root: {}",
            sample,
            urlkit::get_domain_zone(sample),
            urlkit::get_root_domain_zone(sample),
        );
    }

    println!("\n4. List parsing:");
    let text = " http://test.com/some-page/ \n\n https://test2.com?q=     \r\n";
    match urlkit::parse_url_list(text) {
        Ok(urls) => println!("  parsed {} urls: {urls:?}", urls.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    match urlkit::parse_url_list(" not-valid-url \n https://test2.com \n") {
        Ok(urls) => println!("  unexpectedly parsed: {urls:?}"),
        Err(e) => println!("  correctly rejected: {e}"),
    }
}
