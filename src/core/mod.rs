pub mod address_book;
pub mod birthdays;
pub mod dispatcher;
pub mod repl;

pub use crate::domain::{Birthday, Name, Phone, PhoneEdit, PhoneRemoval, Record};
pub use crate::utils::error::Result;
pub use address_book::{AddressBook, Deletion};
pub use birthdays::UpcomingBirthdays;
pub use dispatcher::{Command, Dispatcher, Reply};
