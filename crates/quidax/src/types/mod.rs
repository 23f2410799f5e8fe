/*
[INPUT]:  Quidax API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When Quidax's API schema changes or new types are added
*/

pub mod enums;
pub mod requests;
pub mod response;

pub use enums::*;
pub use requests::*;
pub use response::*;
