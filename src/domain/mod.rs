pub mod entities;
pub mod ports;
pub mod runtime;
pub mod validator;
