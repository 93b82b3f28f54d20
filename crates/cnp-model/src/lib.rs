pub mod error;
pub mod gender;

pub use error::ModelError;
pub use gender::{Gender, birth_year_from_cnp_digit};
