pub const BUILD_TIME: &str = "2026-08-30T19:44:50.527177710+00:00";
pub const AXUM_VERSION: &str = "axum 0.8.9";
pub const RUST_VERSION: &str = "rustc 1.95.0 (59807616e 2026-04-14)";
