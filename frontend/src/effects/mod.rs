pub mod anchor;
pub mod scroll;
pub mod stars;
