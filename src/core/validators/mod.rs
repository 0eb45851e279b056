// Input validators, one module per format
pub mod card;
pub mod email;
pub mod iban;
pub mod ip;
pub mod json;
pub mod password;
pub mod phone;
pub mod tin;
pub mod url;
pub mod vat;

pub use card::*;
pub use email::*;
pub use iban::*;
pub use ip::*;
pub use json::*;
pub use password::*;
pub use phone::*;
pub use tin::*;
pub use url::*;
pub use vat::*;
