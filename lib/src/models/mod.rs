pub mod link;

pub use link::{CandidateLink, Category, Link, LinkInput};
