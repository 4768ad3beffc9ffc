//! Domain values - ticket references and conventional-commit parts

pub mod conventional;
pub mod ticket;

pub use conventional::ConventionalParts;
pub use ticket::TicketReference;
