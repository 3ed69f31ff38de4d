use anchor_lang::prelude::*;

declare_id!("HQ6tH24po5iGNeYQXBDeJW9bEpr12NJ6W4ycrnHgZJzo");

pub mod constants;
pub mod contexts;
pub mod error;
pub mod events;
pub mod helpers;
pub mod state;

pub use constants::*;
pub use contexts::*;
pub use error::*;
pub use events::*;
pub use state::*;


#[program]
pub mod swap_escrow {
    use super::*;

    /// Opens an escrow: locks `deposit` units of `mint_a` in a vault owned by the escrow PDA
    /// and records that the maker wants `receive` units of `mint_b` in return.
    /// The `(maker, seed)` pair must not currently hold an open escrow.
    pub fn make(ctx: Context<Make>, seed: u64, deposit: u64, receive: u64) -> Result<()> {
        ctx.accounts.validate(deposit, receive)?;
        ctx.accounts.save_escrow(seed, receive, &ctx.bumps)?;
        ctx.accounts.deposit(deposit)
    }

    /// Cancels an open escrow. Only the maker recorded in the escrow may sign.
    /// The whole vault balance goes back to the maker, and both the vault and the escrow
    /// record are closed with their rent returned to the maker.
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        ctx.accounts.validate()?;
        ctx.accounts.refund_and_close_vault()
    }

    /// Completes an open escrow. Any taker may call this: the taker pays `receive` units of
    /// `mint_b` to the maker and receives the whole vault balance of `mint_a`.
    ///
    /// Rent policy: the vault and the escrow record were funded by the maker, so both rent
    /// deposits are returned to the maker, never to the taker.
    pub fn take(ctx: Context<Take>) -> Result<()> {
        ctx.accounts.validate()?;
        ctx.accounts.deposit()?;
        ctx.accounts.withdraw_and_close_vault()
    }
}
