pub mod prelude;

pub mod character;
pub mod favorites;
pub mod planet;
pub mod user;
