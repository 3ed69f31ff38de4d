use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Deposit and receive amounts must be greater than zero")]
    InvalidAmount,
    #[msg("Deposited and requested mints must differ")]
    InvalidMintPair,
    #[msg("An escrow is already open for this maker and seed")]
    SeedCollision,
    #[msg("Token account balance is below the required amount")]
    InsufficientFunds,
    #[msg("Token mint does not match the escrow")]
    MintMismatch,
    #[msg("Signer is not the maker of this escrow")]
    UnauthorizedSigner,
    #[msg("Vault address does not match the escrow derivation")]
    DerivationMismatch,
    #[msg("Token amount overflow")]
    ArithmeticOverflow,
    #[msg("Maker account does not match the escrow")]
    MakerMismatch,
    #[msg("Token account is not owned by the expected party")]
    InvalidTokenOwner,
    #[msg("Vault did not receive the full deposit")]
    DepositMismatch,
}
