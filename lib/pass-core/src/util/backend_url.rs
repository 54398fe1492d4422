use url::Url;

/// Resolves `path` below the base URL of a pass server, keeping any path
/// prefix the base carries (`http://host/prefix` + `/api/x` is
/// `http://host/prefix/api/x`).
pub fn backend_endpoint(base_url: &str, path: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    let joined = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);

    Ok(url)
}
