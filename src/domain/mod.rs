// Domain layer: contact value types and the Record aggregate. No I/O here.

pub mod model;

pub use model::{Birthday, Name, Phone, PhoneEdit, PhoneRemoval, Record};
