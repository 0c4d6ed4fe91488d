mod client;
mod errors;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
