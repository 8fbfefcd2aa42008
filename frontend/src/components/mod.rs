pub mod authors;
pub mod badges;
pub mod error;
pub mod layout;
