
// A BACKEND_URL captured at build time wins over the per-profile defaults.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:3001")  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")  // Same origin in production
}

/// Joins the backend base, the `/api` prefix and `path`.
pub fn api_url(path: &str) -> String {
    join_api_url(get_backend_url(), path)
}

fn join_api_url(base: &str, path: &str) -> String {
    format!(
        "{}/api/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
