pub mod bundle;
pub mod check;
