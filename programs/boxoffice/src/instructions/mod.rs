pub mod event_create;
pub mod initialize;
pub mod queries;
pub mod ticket_purchase;
pub mod ticket_purchase_resold;
pub mod ticket_resell;
pub mod ticket_validate;

pub use event_create::*;
pub use initialize::*;
pub use queries::*;
pub use ticket_purchase::*;
pub use ticket_purchase_resold::*;
pub use ticket_resell::*;
pub use ticket_validate::*;
