//! Wire contract for the post feed program.
//!
//! The program itself runs on-chain; this crate only describes it: the post
//! account layout, the create-post instruction data, the decode error
//! taxonomy, and the program's address. Everything here is fixed at build
//! time, which is what makes it the schema every client component shares.

pub mod discriminator;
pub mod error;
pub mod instructions;
pub mod state;

pub mod program {
    use solana_sdk::pubkey::Pubkey;

    /// The post feed program's on-chain address. All post accounts are owned
    /// by this identity.
    pub const ID: Pubkey = solana_sdk::pubkey!("FeedHGkvJ6v1yMXG3waGGiqjWHMjuUdhokxpzyhntYni");
}
