pub const CONFIG_SEED: &[u8] = b"config";
pub const EVENT_SEED: &[u8] = b"event";
pub const TICKET_SEED: &[u8] = b"ticket";
pub const REENTRANCY_SEED: &[u8] = b"reentrancy";

/// Royalty percentages are expressed in basis points (10000 = 100%).
pub const MAX_ROYALTY_BPS: u16 = 10_000;
pub const ROYALTY_BPS_BASE: u64 = 10_000;

/// Resale multipliers are expressed against a base of 100 (100 = 1.0x).
pub const MIN_RESALE_MULTIPLIER: u64 = 100;
pub const RESALE_MULTIPLIER_BASE: u64 = 100;

pub const MAX_TICKET_SUPPLY: u64 = 1_000_000;

pub const MAX_EVENT_NAME_LEN: usize = 64;
pub const MAX_EVENT_LOCATION_LEN: usize = 64;
pub const MAX_EVENT_DESCRIPTION_LEN: usize = 200;

/// Seat number 0 denotes general admission.
pub const GENERAL_ADMISSION: u32 = 0;
