use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    discriminator::discriminator,
    error::PostAccountError,
    program,
    state::ACCOUNT_DISCRIMINATOR_SIZE,
};

/// One post, as stored in the data of a program-owned account after the
/// 8-byte account discriminator.
///
/// The account's own address is not part of the payload; readers pair it with
/// the decoded record themselves.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct FeedPost {
    /// The wallet that authored the post.
    author: [u8; 32],
    /// Free-form post content.
    pub body: String,
    /// Secondary category/hashtag string.
    pub tag: String,
    /// Client-supplied sort key: the feed length the author observed when
    /// submitting. Not enforced by the program, so duplicates and gaps are
    /// possible under concurrent writers.
    pub position: u64,
    /// Opaque program-side boolean. This client always writes `false` and
    /// never interprets it.
    pub flag: bool,
}

impl FeedPost {
    pub fn new(author: Pubkey, body: String, tag: String, position: u64, flag: bool) -> Self {
        FeedPost {
            author: author.to_bytes(),
            body,
            tag,
            position,
            flag,
        }
    }

    #[inline(always)]
    pub fn author(&self) -> Pubkey {
        Pubkey::from(self.author)
    }

    /// The discriminator marking an account as a post.
    pub fn account_discriminator() -> [u8; 8] {
        discriminator("account", "FeedPost")
    }

    /// Decodes a post from a raw account's owner and data.
    ///
    /// Validates that the account is owned by the post feed program and
    /// carries the post discriminator before touching the payload. Bytes
    /// after the payload are tolerated: the program may allocate more account
    /// space than the record needs, leaving zero padding behind it.
    pub fn try_from_account(owner: &Pubkey, data: &[u8]) -> Result<FeedPost, PostAccountError> {
        if owner != &program::ID {
            return Err(PostAccountError::UnownedAccount);
        }
        if data.len() < ACCOUNT_DISCRIMINATOR_SIZE {
            return Err(PostAccountError::TooShort);
        }
        if data[..ACCOUNT_DISCRIMINATOR_SIZE] != Self::account_discriminator() {
            return Err(PostAccountError::BadDiscriminator);
        }

        FeedPost::deserialize(&mut &data[ACCOUNT_DISCRIMINATOR_SIZE..])
            .map_err(|_| PostAccountError::MalformedPayload)
    }

    /// Packs the post the way the program lays it out on-chain: discriminator
    /// first, Borsh payload after. Used to build account fixtures.
    pub fn pack_account_data(&self) -> Vec<u8> {
        let mut data = Self::account_discriminator().to_vec();
        self.serialize(&mut data)
            .expect("Writing to a Vec can't fail");
        data
    }
}
