pub mod card;
pub mod messages;
