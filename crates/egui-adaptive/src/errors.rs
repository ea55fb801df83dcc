#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdaptiveError {
    #[error("invalid fold position: {0:?}")]
    InvalidPosition(String),
    #[error("fold threshold must be positive, got {0}")]
    InvalidThreshold(i32),
    #[error("side width {side_width} must be lower than the fold threshold {threshold}")]
    SideWidthTooLarge { side_width: i32, threshold: i32 },
}
