mod problems;

#[cfg(test)]
mod tests;

pub use problems::*;
