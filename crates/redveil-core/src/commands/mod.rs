pub mod embed;
pub mod extract;

pub use embed::embed;
pub use extract::extract;
