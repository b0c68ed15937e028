pub mod errors;
pub mod marker;
pub mod text;
pub mod websafe;
