pub mod rest;
pub mod traits;

pub use rest::RestPropertyApi;
pub use traits::PropertyApi;
