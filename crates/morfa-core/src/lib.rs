pub mod case;
pub mod error;
pub mod input;
pub mod language;
pub mod output;
pub mod preprocess;
pub mod process;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;
