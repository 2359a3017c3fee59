use mcnf_gen::{config::Config, generator::Generator, notation::Notation, structures::formula::Formula};

fn formulas(count: i64, seed: u64) -> Vec<Formula> {
    let mut config = Config::default();
    config.count.value = count;
    Generator::from_seed(config, Some(seed)).unwrap().generate()
}

mod unicode {
    use super::*;

    #[test]
    fn one_clause_per_line() {
        let formula = formulas(1, 40).remove(0);
        let text = Notation::Unicode.formula(&formula);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), formula.len());
        for line in &lines[..lines.len() - 1] {
            assert!(line.starts_with("  ("));
            assert!(line.ends_with(") ∧"));
        }
        assert!(lines[lines.len() - 1].ends_with(")."));
    }

    #[test]
    fn single_formula_has_no_header() {
        let text = Notation::Unicode.batch(&formulas(1, 41));
        assert!(!text.contains("==="));
    }

    #[test]
    fn headers_and_separators() {
        let batch = formulas(3, 42);
        let text = Notation::Unicode.batch(&batch);
        let blocks: Vec<&str> = text.split("\n\n").collect();

        assert_eq!(blocks.len(), 3);
        for (index, (block, formula)) in blocks.iter().zip(&batch).enumerate() {
            let expected = format!("=== Formula {} ===\n{}", index + 1, formula);
            assert_eq!(*block, expected);
        }
    }

    #[test]
    fn display_matches_unicode() {
        let formula = formulas(1, 43).remove(0);
        assert_eq!(formula.to_string(), Notation::Unicode.formula(&formula));
    }
}

mod solvers {
    use super::*;

    #[test]
    fn single_line_notations() {
        let batch = formulas(4, 44);
        for notation in [Notation::InToHyLo, Notation::LCKS5, Notation::CEGAR] {
            let text = notation.batch(&batch);
            assert_eq!(text.lines().count(), 4);
            assert!(!text.contains('□'));
            assert!(!text.contains('¬'));
        }
    }

    #[test]
    fn s52sat_wrapped() {
        let batch = formulas(2, 45);
        let text = Notation::S52SAT.batch(&batch);
        for block in text.split("\n\n") {
            assert!(block.starts_with("begin\n"));
            assert!(block.ends_with("\nend"));
        }
    }

    #[test]
    fn boxes_by_notation() {
        let formula = formulas(1, 46).remove(0);
        // The default depth gives at least one box.
        assert!(Notation::InToHyLo.formula(&formula).contains("[1] ("));
        assert!(Notation::LCKS5.formula(&formula).contains("[0] ("));
        assert!(Notation::CEGAR.formula(&formula).contains("[] ("));
        assert!(Notation::S52SAT.formula(&formula).contains("[r1] ("));
    }
}
