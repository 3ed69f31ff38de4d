use anchor_lang::prelude::*;

/// Emitted once `make` has locked the deposit in the vault.
#[event]
pub struct EscrowOpened {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub seed: u64,
    pub deposit: u64,
    pub receive: u64,
}

/// Emitted by `take` after both legs of the swap settled.
#[event]
pub struct EscrowCompleted {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub taker: Pubkey,
    /// Amount of `mint_a` released from the vault to the taker
    pub deposit: u64,
    /// Amount of `mint_b` paid by the taker to the maker
    pub receive: u64,
}

/// Emitted by `refund` once the vault has been drained back to the maker and closed
#[event]
pub struct EscrowCancelled {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    /// Amount of `mint_a` returned to the maker
    pub refunded: u64,
}
