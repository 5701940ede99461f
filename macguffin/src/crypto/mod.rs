pub mod f_function;
pub mod key_schedule;
pub mod macguffin;
pub mod sboxes;
