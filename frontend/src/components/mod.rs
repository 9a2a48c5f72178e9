pub mod empty_state;
pub mod link;
pub mod shoe_card;
pub mod spacer;
