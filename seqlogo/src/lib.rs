#![doc = include_str!("../README.md")]

extern crate generic_array;
extern crate typenum;

pub mod abc;
pub mod dense;
pub mod err;
pub mod logo;
pub mod pwm;
pub mod strand;
pub mod window;

pub use abc::Alphabet;
pub use abc::ComplementableAlphabet;
pub use abc::ComplementableSymbol;
pub use abc::Dna;
pub use abc::Nucleotide;
pub use abc::Symbol;
pub use dense::DenseMatrix;
pub use err::InvalidSymbol;
pub use logo::Column;
pub use logo::Glyph;
pub use logo::Logo;
pub use pwm::CountMatrix;
pub use strand::Strand;
pub use window::Window;
