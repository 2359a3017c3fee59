/*!
Methods for making a literal.

# Overview

A literal at depth 0 is propositional.
The variable is drawn uniformly from 1 to N, and then the polarity is drawn by a fair coin.

A literal at depth *d* > 0 is modal.
The box index is drawn uniformly from 1 to m, then a clause at depth *d* - 1 is [built](crate::procedures::clause) to be the body of the box, and then the polarity is drawn by a fair coin.

```rust,ignore
let index = self.rng.random_range(1..=self.parameters().boxes);
let body = self.make_clause(depth - 1);
let polarity = self.rng.random_bool(0.5);
```

The order of the draws is part of the behaviour of a generator, as a generator is reproducible from a seed.
*/

use rand::Rng;

use crate::{
    generator::GenericGenerator,
    structures::{
        atom::{Atom, Depth},
        literal::Literal,
    },
};

/// Methods related to making literals.
impl<R: Rng> GenericGenerator<R> {
    /// A literal whose atom is a variable drawn uniformly from 1 to N.
    pub fn make_propositional_literal(&mut self) -> Literal {
        let variable = self.rng.random_range(1..=self.parameters().variables);
        let polarity = self.rng.random_bool(0.5);
        Literal::new(Atom::Propositional(variable), polarity)
    }

    /// A literal of the given depth.
    ///
    /// At depth 0 the literal is propositional, otherwise the literal is a box over a clause of one less depth.
    pub fn make_literal(&mut self, depth: Depth) -> Literal {
        match depth {
            0 => self.make_propositional_literal(),

            _ => {
                let index = self.rng.random_range(1..=self.parameters().boxes);
                let body = self.make_clause(depth - 1);
                let polarity = self.rng.random_bool(0.5);
                Literal::new(Atom::Modal { index, body }, polarity)
            }
        }
    }
}
