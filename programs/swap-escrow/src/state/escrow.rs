use anchor_lang::prelude::*;

/// Terms of one open swap, stored at `["escrow", maker, seed.to_le_bytes()]`:
/// - the maker-chosen seed,
/// - the maker's public key,
/// - the deposited mint (`mint_a`) and the requested mint (`mint_b`),
/// - the amount of `mint_b` the maker expects,
/// - and the PDA bump, so the address can be re-derived without a search.
///
/// Written once by `make` and closed by either `take` or `refund`; never updated.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    pub seed: u64,      // opaque maker-chosen seed
    pub maker: Pubkey,  // maker of the trade
    pub mint_a: Pubkey, // token locked in the vault
    pub mint_b: Pubkey, // token the maker wants in return
    pub receive: u64,   // amount of mint_b owed by the taker
    pub bump: u8,       // bump of the escrow PDA
}

impl Escrow {
    /// A freshly allocated record is zeroed; a live one always has a maker.
    pub fn is_open(&self) -> bool {
        self.maker != Pubkey::default()
    }
}
