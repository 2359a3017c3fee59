/*!
Textual renderings of formulas.

The default [Unicode](Notation::Unicode) notation is the one used by [Display](std::fmt::Display):

| Element             | Rendering                      |
|---------------------|--------------------------------|
| propositional atom  | `A3`                           |
| modal atom          | `□1(` *clause* `)`             |
| negation            | `¬` prefix                     |
| disjunction         | ` ∨ `                          |
| conjunction         | ` ∧` at the end of a line      |
| end of formula      | `.` after the final clause     |

Each clause of a formula is written parenthesized on its own line, indented by two spaces.

The remaining notations are those read by solver front ends.
Each writes a formula on a single line, with clauses joined by ` & `, literals joined by ` | `, negation as `~`, and propositional atoms as `p3`.
They differ on boxes:

| Notation                      | Box *b* applied to *clause* |
|-------------------------------|-----------------------------|
| [InToHyLo](Notation::InToHyLo) | `[b] (`*clause*`)`          |
| [S52SAT](Notation::S52SAT)     | `[rb] (`*clause*`)`         |
| [LCKS5](Notation::LCKS5)       | `[b-1] (`*clause*`)`        |
| [CEGAR](Notation::CEGAR)       | `[] (`*clause*`)`           |

And an S52SAT formula is wrapped by `begin` and `end` lines.

In every notation each clause and each box body is parenthesized, so no reader needs precedence rules.

```rust
# use mcnf_gen::notation::Notation;
# use mcnf_gen::structures::{atom::Atom, clause::Clause, formula::Formula, literal::Literal};
let body = Clause::from_literals(vec![Literal::new(Atom::Propositional(1), true)]);
let clause = Clause::from_literals(vec![
    Literal::new(Atom::Propositional(2), true),
    Literal::new(Atom::Modal { index: 2, body }, false),
]);
let formula = Formula::new(vec![clause], 1);

assert_eq!(Notation::Unicode.formula(&formula), "  (A2 ∨ ¬□2(A1)).");
assert_eq!(Notation::InToHyLo.formula(&formula), "(p2 | ~[2] (p1))");
assert_eq!(Notation::LCKS5.formula(&formula), "(p2 | ~[1] (p1))");
assert_eq!(Notation::CEGAR.formula(&formula), "(p2 | ~[] (p1))");
assert_eq!(Notation::S52SAT.formula(&formula), "begin\n(p2 | ~[r2] (p1))\nend");
```
*/

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::structures::{
    atom::Atom, clause::Clause, formula::Formula, literal::Literal,
};

/// A notation for formulas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[allow(clippy::upper_case_acronyms)]
pub enum Notation {
    #[default]
    /// Unicode connectives, one clause per line
    Unicode,

    /// The InToHyLo input language
    #[value(name = "intohylo")]
    InToHyLo,

    /// InToHyLo with `r`-prefixed relations, wrapped in begin/end
    #[value(name = "s52sat")]
    S52SAT,

    /// InToHyLo with relations indexed from zero
    #[value(name = "lcks5")]
    LCKS5,

    /// InToHyLo with unindexed relations
    #[value(name = "cegar")]
    CEGAR,
}

impl Notation {
    fn negation(&self) -> &'static str {
        match self {
            Self::Unicode => "¬",
            _ => "~",
        }
    }

    fn disjunction(&self) -> &'static str {
        match self {
            Self::Unicode => " ∨ ",
            _ => " | ",
        }
    }

    fn write_atom(&self, atom: &Atom, out: &mut String) {
        match (self, atom) {
            (Self::Unicode, Atom::Propositional(variable)) => {
                let _ = write!(out, "A{variable}");
            }

            (_, Atom::Propositional(variable)) => {
                let _ = write!(out, "p{variable}");
            }

            (Self::Unicode, Atom::Modal { index, body }) => {
                let _ = write!(out, "□{index}(");
                self.write_clause(body, out);
                out.push(')');
            }

            (_, Atom::Modal { index, body }) => {
                let _ = match self {
                    Self::S52SAT => write!(out, "[r{index}] ("),
                    Self::LCKS5 => write!(out, "[{}] (", index.saturating_sub(1)),
                    Self::CEGAR => write!(out, "[] ("),
                    _ => write!(out, "[{index}] ("),
                };
                self.write_clause(body, out);
                out.push(')');
            }
        }
    }

    fn write_literal(&self, literal: &Literal, out: &mut String) {
        if !literal.polarity() {
            out.push_str(self.negation());
        }
        self.write_atom(literal.atom(), out);
    }

    fn write_clause(&self, clause: &Clause, out: &mut String) {
        for (index, literal) in clause.literals().iter().enumerate() {
            if index > 0 {
                out.push_str(self.disjunction());
            }
            self.write_literal(literal, out);
        }
    }

    /// The literal, in the notation.
    pub fn literal(&self, literal: &Literal) -> String {
        let mut out = String::new();
        self.write_literal(literal, &mut out);
        out
    }

    /// The literals of the clause joined by disjunction, without enclosing parentheses.
    pub fn clause(&self, clause: &Clause) -> String {
        let mut out = String::new();
        self.write_clause(clause, &mut out);
        out
    }

    /// The formula, without a trailing newline.
    pub fn formula(&self, formula: &Formula) -> String {
        let mut out = String::new();
        let last = formula.len().saturating_sub(1);

        match self {
            Self::Unicode => {
                for (index, clause) in formula.clauses().iter().enumerate() {
                    out.push_str("  (");
                    self.write_clause(clause, &mut out);
                    match index == last {
                        true => out.push_str(")."),
                        false => out.push_str(") ∧\n"),
                    }
                }
            }

            _ => {
                if *self == Self::S52SAT {
                    out.push_str("begin\n");
                }
                for (index, clause) in formula.clauses().iter().enumerate() {
                    if index > 0 {
                        out.push_str(" & ");
                    }
                    out.push('(');
                    self.write_clause(clause, &mut out);
                    out.push(')');
                }
                if *self == Self::S52SAT {
                    out.push_str("\nend");
                }
            }
        }

        out
    }

    /// A sequence of formulas, without a trailing newline.
    ///
    /// - In Unicode notation, when there is more than one formula each is headed by `=== Formula i ===` (from 1), and a blank line separates formulas.
    /// - In S52SAT notation a blank line separates formulas.
    /// - Otherwise, formulas are written one per line.
    pub fn batch(&self, formulas: &[Formula]) -> String {
        match self {
            Self::Unicode if formulas.len() > 1 => formulas
                .iter()
                .enumerate()
                .map(|(index, formula)| {
                    format!("=== Formula {} ===\n{}", index + 1, self.formula(formula))
                })
                .collect::<Vec<_>>()
                .join("\n\n"),

            Self::Unicode | Self::S52SAT => formulas
                .iter()
                .map(|formula| self.formula(formula))
                .collect::<Vec<_>>()
                .join("\n\n"),

            _ => formulas
                .iter()
                .map(|formula| self.formula(formula))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unicode => write!(f, "unicode"),
            Self::InToHyLo => write!(f, "intohylo"),
            Self::S52SAT => write!(f, "s52sat"),
            Self::LCKS5 => write!(f, "lcks5"),
            Self::CEGAR => write!(f, "cegar"),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = String::new();
        Notation::Unicode.write_atom(self, &mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&Notation::Unicode.literal(self))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&Notation::Unicode.clause(self))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&Notation::Unicode.formula(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(variable: u32, polarity: bool) -> Literal {
        Literal::new(Atom::Propositional(variable), polarity)
    }

    fn two_clause_formula() -> Formula {
        let inner = Clause::from_literals(vec![p(3, true), p(4, false)]);
        let first = Clause::from_literals(vec![
            p(1, true),
            p(2, false),
            Literal::new(Atom::Modal { index: 1, body: inner }, true),
        ]);
        let second = Clause::from_literals(vec![p(1, false), p(3, true)]);
        Formula::new(vec![first, second], 2)
    }

    #[test]
    fn unicode_layout() {
        assert_eq!(
            Notation::Unicode.formula(&two_clause_formula()),
            "  (A1 ∨ ¬A2 ∨ □1(A3 ∨ ¬A4)) ∧\n  (¬A1 ∨ A3)."
        );
    }

    #[test]
    fn unicode_batch_headers() {
        let formula = two_clause_formula();
        let single = Notation::Unicode.batch(std::slice::from_ref(&formula));
        assert_eq!(single, formula.to_string());

        let double = Notation::Unicode.batch(&[formula.clone(), formula.clone()]);
        let expected = format!("=== Formula 1 ===\n{formula}\n\n=== Formula 2 ===\n{formula}");
        assert_eq!(double, expected);
    }

    #[test]
    fn intohylo_layout() {
        assert_eq!(
            Notation::InToHyLo.formula(&two_clause_formula()),
            "(p1 | ~p2 | [1] (p3 | ~p4)) & (~p1 | p3)"
        );
    }

    #[test]
    fn dialect_batches() {
        let formula = two_clause_formula();
        let line = Notation::CEGAR.formula(&formula);
        assert_eq!(
            Notation::CEGAR.batch(&[formula.clone(), formula.clone()]),
            format!("{line}\n{line}")
        );

        let block = Notation::S52SAT.formula(&formula);
        assert!(block.starts_with("begin\n") && block.ends_with("\nend"));
        assert_eq!(
            Notation::S52SAT.batch(&[formula.clone(), formula]),
            format!("{block}\n\n{block}")
        );
    }

    #[test]
    fn empty_formula() {
        assert_eq!(Notation::Unicode.formula(&Formula::new(vec![], 1)), "");
    }
}
