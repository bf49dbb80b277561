use anchor_lang::prelude::*;

#[error_code]
pub enum BoxOfficeError {
    #[msg("Event date must be in the future")]
    EventDateInPast,

    #[msg("Ticket supply must be greater than zero")]
    InvalidTicketSupply,

    #[msg("Ticket supply exceeds maximum allowed")]
    TicketSupplyTooLarge,

    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,

    #[msg("Royalty exceeds 100% (10000 basis points)")]
    RoyaltyTooHigh,

    #[msg("Resale multiplier must be at least 1.0x (100)")]
    ResaleMultiplierTooLow,

    #[msg("Event name cannot be empty")]
    EventNameEmpty,

    #[msg("Event name exceeds maximum length")]
    EventNameTooLong,

    #[msg("Event location exceeds maximum length")]
    EventLocationTooLong,

    #[msg("Event description exceeds maximum length")]
    EventDescriptionTooLong,

    #[msg("Unauthorized: signer is not the marketplace administrator")]
    Unauthorized,

    #[msg("Not the event organizer")]
    NotEventOrganizer,

    #[msg("Not the current ticket holder")]
    NotTicketOwner,

    #[msg("No event exists with this ID")]
    EventNotFound,

    #[msg("Event is not active")]
    EventNotActive,

    #[msg("Event is sold out")]
    SoldOut,

    #[msg("Ticket has already been used")]
    TicketAlreadyUsed,

    #[msg("Buyer already holds this ticket")]
    CannotBuyOwnTicket,

    #[msg("Attached payment is below the required price")]
    InsufficientPayment,

    #[msg("Resale price exceeds the allowed cap")]
    ExceedsResaleCap,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Reentrant call into a guarded operation")]
    ReentrancyLocked,
}
