//! # deckcode
//!
//! Core traits for encoding and decoding in the deckcode toolkit.
//!
//! This crate defines the `Decoder` and `Encoder` traits that every step of
//! the deckstring pipeline implements.
//!
//! ## Overview
//!
//! Decoding flows like this:
//! ```text
//! String → Deckstring → Vec<u8> → DeckDefinition
//! ```
//!
//! and encoding walks the same steps backwards:
//! ```text
//! DeckDefinition → Vec<u8> → Deckstring → String
//! ```
//!
//! ## Type Safety
//!
//! The marker traits `DecodableFrom` and `EncodableTo` restrict which pairs
//! of types may be converted, so an invalid conversion is a compile error
//! instead of a runtime one.
//!
//! ## Example
//!
//! The concrete implementations live in the `deckstring` crate:
//!
//! ```ignore
//! use deckcode::decoder::Decoder;
//! use deckstring::{DeckDefinition, Deckstring};
//!
//! let deckstring: Deckstring = "AAECAR8BxwMAAA==".parse().unwrap();
//! let bytes: Vec<u8> = deckstring.decode().unwrap();
//! let deck: DeckDefinition = bytes.decode().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
