//! TOML recipe storage
//!
//! - [`parser`] - Locate and deserialize flowbuild.toml
//! - [`writer`] - Serialize and write flowbuild.toml

pub mod parser;
pub mod writer;

pub use parser::{find_recipe, load_recipe, parse_recipe};
pub use writer::{format_recipe, write_recipe};
