// Domain layer - Boards, stream parameters and sizing results
pub mod board;
pub mod error;
pub mod sizing;
pub mod stream;
