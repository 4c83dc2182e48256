use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS policy: every origin is allowed and credentials are enabled
///
/// Browsers reject `Access-Control-Allow-Origin: *` on credentialed requests,
/// so origin, methods and headers are mirrored back from the request instead
/// of sent as wildcards. Preflight `OPTIONS` requests are answered here for
/// every path.
pub fn permissive_with_credentials() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
