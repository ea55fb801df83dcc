pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Avatar sizes shown on the avatar page, in points.
pub const AVATAR_SIZES: [f32; 6] = [16.0, 24.0, 32.0, 48.0, 56.0, 64.0];
