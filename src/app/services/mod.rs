pub mod fetcher;
pub mod link_checker;
pub mod validator;
