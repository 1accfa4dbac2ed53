pub mod fields;
pub mod types;

pub use fields::{FieldError, StrategyFlag, TextField};
pub use types::{CaseFacts, DocumentKind, GeneratedDocument, Track};
