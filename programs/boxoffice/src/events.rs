use anchor_lang::prelude::*;

#[event]
pub struct EventCreated {
    pub event_id: u64,
    pub organizer: Pubkey,
}

#[event]
pub struct TicketPurchased {
    pub ticket_id: u64,
    pub event_id: u64,
    pub buyer: Pubkey,
}

#[event]
pub struct TicketResold {
    pub ticket_id: u64,
    pub new_price: u64,
    pub seller: Pubkey,
}

#[event]
pub struct TicketTransferred {
    pub ticket_id: u64,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TicketValidated {
    pub ticket_id: u64,
    pub validator: Pubkey,
}
