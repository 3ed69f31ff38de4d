use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::{constants::ESCROW_SEED, error::EscrowError};

/// Address and bump of the escrow record opened by `maker` with `seed`.
///
/// The seed is always encoded as 8 little-endian bytes, so clients can reproduce the
/// address without knowing anything else about the escrow.
pub fn escrow_address(maker: &Pubkey, seed: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ESCROW_SEED, maker.as_ref(), seed.to_le_bytes().as_ref()],
        program_id,
    )
}

/// The vault is the associated token account of `mint_a` whose authority is the escrow PDA.
pub fn vault_address(escrow: &Pubkey, mint_a: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(escrow, mint_a, token_program)
}

/// Checks the terms a maker opens an escrow with.
pub fn validate_terms(deposit: u64, receive: u64, mint_a: &Pubkey, mint_b: &Pubkey) -> Result<()> {
    require!(deposit > 0 && receive > 0, EscrowError::InvalidAmount);
    require_keys_neq!(*mint_a, *mint_b, EscrowError::InvalidMintPair);
    Ok(())
}

pub fn ensure_funds(balance: u64, amount: u64) -> Result<()> {
    require_gte!(balance, amount, EscrowError::InsufficientFunds);
    Ok(())
}

/// Balance of a token account after receiving `amount`.
pub fn credit(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_add(amount)
        .ok_or_else(|| error!(EscrowError::ArithmeticOverflow))
}
