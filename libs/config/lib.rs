mod credentials;
mod load;

pub use credentials::Credentials;
pub use load::{load, load_from, parse_env_file};
