pub mod checksum;

mod validator;

pub use cnp_model::Gender;
pub use validator::Cnp;
