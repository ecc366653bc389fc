pub mod errors;
pub mod db;
pub mod member;
pub mod board;
pub mod comment;

#[cfg(test)]
mod tests;
