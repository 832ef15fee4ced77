use borsh::BorshSerialize;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    discriminator::discriminator,
    program,
};

/// Creates a program-owned account holding one new post.
///
/// The post account is a fresh keypair generated by the submitting client;
/// its address becomes the record's identity for every later read. The author
/// wallet pays rent and fees.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Post account (fresh keypair)
///  1. `[WRITE, SIGNER]` Author wallet
///  2. `[READ]` System program
pub struct CreatePost<'a> {
    /// The account that will hold the post.
    pub post_account: &'a Pubkey,
    /// The wallet authoring and paying for the post.
    pub author: &'a Pubkey,
    /// Free-form post content.
    pub body: &'a str,
    /// Secondary category/hashtag string.
    pub tag: &'a str,
    /// Sort key: the feed length the author observed when submitting.
    pub position: u64,
}

impl CreatePost<'_> {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }

    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(*self.post_account, true),
            AccountMeta::new(*self.author, true),
            AccountMeta::new_readonly(solana_system_interface::program::ID, false),
        ]
    }

    /// Instruction data layout:
    ///   - [0..8]: the `create_post` method discriminator
    ///   - [8..]: Borsh-encoded `(body, tag, position, flag)`
    ///
    /// `flag` is a program-side boolean of unspecified meaning; this client
    /// always writes `false`.
    pub fn pack_instruction_data(&self) -> Vec<u8> {
        let mut data = discriminator("global", "create_post").to_vec();
        (self.body, self.tag, self.position, false)
            .serialize(&mut data)
            .expect("Writing to a Vec can't fail");
        data
    }
}
