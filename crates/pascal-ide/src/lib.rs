mod analysis;
mod server;

pub use analysis::{Analysis, Category, FilePosition};
pub use server::Server;

#[cfg(test)]
mod fixture;
