/*
[INPUT]:  Backend payload schema and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for backend communication
[UPDATE]: When the payload schema changes or new types are added
*/

pub mod payloads;

pub use payloads::*;
