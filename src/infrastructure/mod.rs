pub mod location;
pub mod opener;
