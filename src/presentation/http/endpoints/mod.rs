pub mod health;
pub mod links;
pub mod location;
pub mod root;
