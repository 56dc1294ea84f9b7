pub mod cache;
pub mod config;
pub mod coordinator;
pub mod criteria;
pub mod effectiveness;
pub mod error;
pub mod evolution;
pub mod filters;
pub mod mapper;
pub mod pokeapi;
pub mod pokemon;
pub mod remote;
pub mod sort;
pub mod state;

pub use cache::*;
pub use config::*;
pub use coordinator::*;
pub use criteria::*;
pub use error::*;
pub use pokemon::*;
pub use remote::*;
pub use sort::*;
pub use state::*;
