use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, REENTRANCY_SEED};
use crate::state::{MarketConfig, ReentrancyGuard};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub deployer: Signer<'info>,

    #[account(
        init,
        payer = deployer,
        space = 8 + MarketConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
        init,
        payer = deployer,
        space = 8 + ReentrancyGuard::INIT_SPACE,
        seeds = [REENTRANCY_SEED],
        bump
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub system_program: Program<'info, System>,
}

/// One-time marketplace setup: designates the administrator and creates
/// the reentrancy lock in its unset state.
pub fn initialize(ctx: Context<Initialize>, administrator: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.market_config;
    config.administrator = administrator;
    config.next_id = 1;
    config.bump = ctx.bumps.market_config;

    let guard = &mut ctx.accounts.reentrancy_guard;
    guard.in_progress = false;
    guard.bump = ctx.bumps.reentrancy_guard;

    msg!("Marketplace initialized, administrator: {}", administrator);

    Ok(())
}
