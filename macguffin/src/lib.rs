pub mod crypto;

pub use crypto::macguffin::MacGuffin;
