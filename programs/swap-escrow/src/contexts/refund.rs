use anchor_lang::prelude::*;

use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::{
    constants::ESCROW_SEED,
    error::EscrowError,
    events::EscrowCancelled,
    helpers::{credit, vault_address},
    Escrow,
};

#[derive(Accounts)]
pub struct Refund<'info> {
    /// Must be the maker recorded in the escrow
    #[account(mut)]
    pub maker: Signer<'info>,

    /// The mint that was deposited into the vault
    #[account(
        mint::token_program = token_program
    )]
    pub mint_a: InterfaceAccount<'info, Mint>,

    /// The maker's `mint_a` account, where the deposit is returned
    #[account(
        mut,
        constraint = maker_ata_a.mint == mint_a.key() @ EscrowError::MintMismatch,
        constraint = maker_ata_a.owner == maker.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub maker_ata_a: InterfaceAccount<'info, TokenAccount>,

    /// The escrow record, closed with its rent returned to the maker.
    /// Seeds come from the record itself so that a wrong signer fails on `has_one`.
    /// A closed record fails to load with `AccountNotInitialized` (3012), or with
    /// `AccountOwnedByWrongProgram` (3007) if lamports were sent to the PDA after closing.
    /// Either one means the escrow no longer exists
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::UnauthorizedSigner,
        has_one = mint_a @ EscrowError::MintMismatch,
        seeds = [ESCROW_SEED, escrow.maker.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump
    )]
    pub escrow: Account<'info, Escrow>,

    /// The vault holding the deposit; drained and closed
    #[account(
        mut,
        address = vault_address(&escrow.key(), &mint_a.key(), &token_program.key())
            @ EscrowError::DerivationMismatch,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Refund<'info> {
    pub fn validate(&self) -> Result<()> {
        credit(self.maker_ata_a.amount, self.vault.amount)?;
        Ok(())
    }

    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        // The escrow PDA is the vault authority, so it signs both CPIs
        let seed = self.escrow.seed.to_le_bytes();
        let signer_seeds: [&[&[u8]]; 1] = [&[
            ESCROW_SEED,
            self.escrow.maker.as_ref(),
            &seed[..],
            &[self.escrow.bump],
        ]];

        let refunded = self.vault.amount;

        let xfer_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.maker_ata_a.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            xfer_accounts,
            &signer_seeds,
        );
        transfer_checked(ctx, refunded, self.mint_a.decimals)?;

        let close_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            close_accounts,
            &signer_seeds,
        );
        close_account(ctx)?;

        msg!("Escrow {} cancelled: {} refunded", self.escrow.key(), refunded);
        emit!(EscrowCancelled {
            escrow: self.escrow.key(),
            maker: self.maker.key(),
            refunded,
        });
        Ok(())
    }
}
