pub mod error;
pub mod linked_lists;
pub mod prelude;

pub use error::EmptyError;
pub use linked_lists::SinglyLinkedList;
