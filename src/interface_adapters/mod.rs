pub mod body;
pub mod handlers;
pub mod protocol;
pub mod respond;
pub mod routes;
pub mod state;
