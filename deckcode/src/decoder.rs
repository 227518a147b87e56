//! Decoder trait for type-safe conversions.
//!
//! `Decoder<T, D>` converts a source type `T` into a destination type `D`.
//! The destination must opt in through `DecodableFrom<T>`, which keeps the
//! set of valid conversions explicit.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use deckcode::decoder::{Decoder, DecodableFrom};
//!
//! struct Token(String);
//! struct Bytes(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Token> for Bytes {}
//!
//! impl Decoder<Token, Bytes> for Token {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Bytes, Self::Error> {
//!         Ok(Bytes(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type (usually `Self == T`). The destination
/// type must implement `DecodableFrom<T>`.
///
/// ```ignore
/// use deckcode::decoder::Decoder;
/// use deckstring::DeckDefinition;
///
/// let bytes = vec![0x00, 0x01, 0x02, 0x00, 0x00, 0x00, 0x00];
/// let deck: DeckDefinition = bytes.decode().unwrap();
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for each destination type alongside the
/// matching `Decoder` impl:
///
/// ```no_run
/// use deckcode::decoder::DecodableFrom;
///
/// struct Source;
/// struct Dest;
///
/// impl DecodableFrom<Source> for Dest {}
/// ```
pub trait DecodableFrom<T> {}
