//! Literals are atoms paired with a (boolean) polarity.
//!
//! A literal with polarity `false` is the negation of its atom.
//!
//! ```rust
//! # use mcnf_gen::structures::{atom::Atom, literal::Literal};
//! let literal = Literal::new(Atom::Propositional(79), true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), &Atom::Propositional(79));
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate().to_string(), "¬A79");
//! ```
//!
//! Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.

use crate::structures::atom::Atom;

/// An atom with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }
}
