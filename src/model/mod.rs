pub mod contact;
pub mod issue;
pub mod profile;
