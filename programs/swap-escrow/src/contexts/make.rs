use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::ESCROW_SEED,
    error::EscrowError,
    events::EscrowOpened,
    helpers::{ensure_funds, validate_terms},
    Escrow,
};

/// Defines the accounts needed to open an escrow: the maker, both mints, the maker's
/// `mint_a` token account, the escrow record and its vault
#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Make<'info> {
    /// The maker signs, pays rent for the record and the vault, and authorizes the deposit
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Mint of the token the maker locks in the vault
    #[account(
        mint::token_program = token_program
    )]
    pub mint_a: InterfaceAccount<'info, Mint>,

    /// Mint of the token the maker wants in return
    #[account(
        mint::token_program = token_program
    )]
    pub mint_b: InterfaceAccount<'info, Mint>,

    /// Source of the deposit. Any `mint_a` account owned by the maker, not only the ATA
    #[account(
        mut,
        constraint = maker_ata_a.mint == mint_a.key() @ EscrowError::MintMismatch,
        constraint = maker_ata_a.owner == maker.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub maker_ata_a: InterfaceAccount<'info, TokenAccount>,

    /// The escrow record. `init_if_needed` lets an occupied `(maker, seed)` slot reach
    /// `validate`, which rejects it with `SeedCollision` instead of a generic system error
    #[account(
        init_if_needed,
        payer = maker,
        space = 8 + Escrow::INIT_SPACE,
        seeds = [ESCROW_SEED, maker.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump
    )]
    pub escrow: Account<'info, Escrow>,

    /// Vault holding the deposit. Its authority is the escrow PDA, so only this program can
    /// move tokens out of it
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Make<'info> {
    pub fn validate(&self, deposit: u64, receive: u64) -> Result<()> {
        validate_terms(deposit, receive, &self.mint_a.key(), &self.mint_b.key())?;

        require!(!self.escrow.is_open(), EscrowError::SeedCollision);
        require_eq!(self.vault.amount, 0, EscrowError::SeedCollision);

        ensure_funds(self.maker_ata_a.amount, deposit)
    }

    /// Writes the escrow terms. The record is never modified after this
    pub fn save_escrow(&mut self, seed: u64, receive: u64, bumps: &MakeBumps) -> Result<()> {
        self.escrow.set_inner(Escrow {
            seed,
            maker: self.maker.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            receive,
            bump: bumps.escrow,
        });
        Ok(())
    }

    /// Moves `deposit` of `mint_a` from the maker into the vault
    pub fn deposit(&mut self, deposit: u64) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.maker_ata_a.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);
        transfer_checked(cpi_ctx, deposit, self.mint_a.decimals)?;

        // Transfer-fee mints would leave the vault short of the recorded deposit
        self.vault.reload()?;
        require_eq!(self.vault.amount, deposit, EscrowError::DepositMismatch);

        msg!(
            "Escrow {} opened: {} of {} for {} of {}",
            self.escrow.key(),
            deposit,
            self.mint_a.key(),
            self.escrow.receive,
            self.mint_b.key()
        );
        emit!(EscrowOpened {
            escrow: self.escrow.key(),
            maker: self.maker.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            seed: self.escrow.seed,
            deposit,
            receive: self.escrow.receive,
        });
        Ok(())
    }
}
