pub mod cards;
pub mod crud;
pub mod orders;
pub mod products;
pub mod users;
