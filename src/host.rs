/// Extract the hostname a zoom default is keyed by
///
/// The scheme, port, path, query and fragment are all dropped:
/// - https://www.google.com/search?q=rust → www.google.com
/// - http://localhost:3000/app → localhost
/// - https://Docs.RS/url → docs.rs
///
/// Subdomains are kept, so `docs.rs` and `www.docs.rs` have separate defaults.
/// URLs without a host (`about:blank`, `data:` URLs, local files) yield None.
pub fn extract_hostname(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url.trim()).ok()?;

    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_lowercase())
}
