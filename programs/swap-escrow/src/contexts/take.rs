use anchor_lang::prelude::*;

use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::{
    constants::ESCROW_SEED,
    error::EscrowError,
    events::EscrowCompleted,
    helpers::{credit, ensure_funds, vault_address},
    Escrow,
};

/// Defines the accounts needed for the `take` instruction, settling both legs of the swap
/// and closing the vault and the escrow record
#[derive(Accounts)]
pub struct Take<'info> {
    /// Any signer may take an open escrow
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The original maker. Receives `mint_b` and the rent of the vault and the record
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Mint of the deposited token; must match `escrow.mint_a`
    #[account(
        mint::token_program = token_program
    )]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,

    /// Mint the maker asked for; must match `escrow.mint_b`
    #[account(
        mint::token_program = token_program
    )]
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    /// The maker's `mint_b` account, credited with `escrow.receive`
    #[account(
        mut,
        constraint = maker_ata_b.mint == mint_b.key() @ EscrowError::MintMismatch,
        constraint = maker_ata_b.owner == maker.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub maker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The taker's `mint_a` account, credited with the whole vault balance
    #[account(
        mut,
        constraint = taker_ata_a.mint == mint_a.key() @ EscrowError::MintMismatch,
        constraint = taker_ata_a.owner == taker.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub taker_ata_a: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The taker's `mint_b` account, debited with `escrow.receive`
    #[account(
        mut,
        constraint = taker_ata_b.mint == mint_b.key() @ EscrowError::MintMismatch,
        constraint = taker_ata_b.owner == taker.key() @ EscrowError::InvalidTokenOwner,
    )]
    pub taker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The escrow record. The PDA is re-derived from the record's own maker and seed, so a
    /// foreign record can never be passed here.
    /// A closed record fails to load with `AccountNotInitialized` (3012), or with
    /// `AccountOwnedByWrongProgram` (3007) if lamports were sent to the PDA after closing.
    /// Either one means the escrow no longer exists
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::MakerMismatch,
        has_one = mint_a @ EscrowError::MintMismatch,
        has_one = mint_b @ EscrowError::MintMismatch,
        seeds = [ESCROW_SEED, escrow.maker.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    /// The escrow's ATA for `mint_a`, drained to the taker and closed to the maker
    #[account(
        mut,
        address = vault_address(&escrow.key(), &mint_a.key(), &token_program.key())
            @ EscrowError::DerivationMismatch,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Take<'info> {
    /// The taker must cover `receive`, and neither credit may overflow
    pub fn validate(&self) -> Result<()> {
        ensure_funds(self.taker_ata_b.amount, self.escrow.receive)?;
        credit(self.maker_ata_b.amount, self.escrow.receive)?;
        credit(self.taker_ata_a.amount, self.vault.amount)?;
        Ok(())
    }

    /// Transfers `escrow.receive` of `mint_b` from the taker to the maker
    pub fn deposit(&mut self) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.taker_ata_b.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: self.maker_ata_b.to_account_info(),
            authority: self.taker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);
        transfer_checked(cpi_ctx, self.escrow.receive, self.mint_b.decimals)
    }

    /// Releases the vault to the taker and closes it. The vault rent goes to the maker,
    /// who paid for it in `make`; the record itself is closed by the `close = maker`
    /// constraint once the instruction returns
    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        let seed = self.escrow.seed.to_le_bytes();
        let signer_seeds: [&[&[u8]]; 1] = [&[
            ESCROW_SEED,
            self.escrow.maker.as_ref(),
            &seed[..],
            &[self.escrow.bump],
        ]];

        let released = self.vault.amount;

        let accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.taker_ata_a.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        transfer_checked(ctx, released, self.mint_a.decimals)?;

        let accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        close_account(ctx)?;

        msg!(
            "Escrow {} taken by {}: {} released, {} paid",
            self.escrow.key(),
            self.taker.key(),
            released,
            self.escrow.receive
        );
        emit!(EscrowCompleted {
            escrow: self.escrow.key(),
            maker: self.maker.key(),
            taker: self.taker.key(),
            deposit: released,
            receive: self.escrow.receive,
        });
        Ok(())
    }
}
