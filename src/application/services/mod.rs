pub mod link_builder;
pub mod link_opener;
pub mod location;
