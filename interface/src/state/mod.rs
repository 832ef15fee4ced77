pub mod post;

pub use post::FeedPost;

/// Length of the discriminator prefixing every program-owned account.
pub const ACCOUNT_DISCRIMINATOR_SIZE: usize = 8;
