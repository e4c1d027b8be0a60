//! Full-cover properties of the Bandha traversals

use bhoovalaya::bandha::{
    verify_full_cover, Bandha, BandhaRegistry, ChakraBandha, DiagonalBandha, Grouping,
    NavamaankBandha, RingOrder, Rotation,
};
use bhoovalaya::{traverse, ChakraGrid, Coordinate, Error, CELL_COUNT};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn all_configurations() -> Vec<Box<dyn Bandha>> {
    vec![
        Box::new(ChakraBandha::new(Rotation::Clockwise, RingOrder::OuterToInner)),
        Box::new(ChakraBandha::new(Rotation::Clockwise, RingOrder::InnerToOuter)),
        Box::new(ChakraBandha::new(
            Rotation::CounterClockwise,
            RingOrder::OuterToInner,
        )),
        Box::new(ChakraBandha::new(
            Rotation::CounterClockwise,
            RingOrder::InnerToOuter,
        )),
        Box::new(NavamaankBandha::new(Grouping::Blocks)),
        Box::new(NavamaankBandha::new(Grouping::Bands)),
        Box::new(DiagonalBandha),
    ]
}

#[test]
fn every_builtin_configuration_is_a_permutation() {
    for bandha in all_configurations() {
        let order = bandha.generate();
        assert_eq!(order.len(), CELL_COUNT, "{} length", bandha.name());

        let distinct: HashSet<Coordinate> = order.iter().copied().collect();
        assert_eq!(distinct.len(), CELL_COUNT, "{} repeats a cell", bandha.name());

        assert!(order.iter().all(|coord| coord.in_bounds()));
        assert!(verify_full_cover(bandha.name(), &order).is_ok());
    }
}

#[test]
fn generation_is_deterministic() {
    for bandha in all_configurations() {
        assert_eq!(bandha.generate(), bandha.generate(), "{}", bandha.name());
    }
}

#[test]
fn traversal_reads_the_cell_at_each_ordered_coordinate() {
    let grid = ChakraGrid::repeating();
    for bandha in all_configurations() {
        let order = bandha.generate();
        let sequence = traverse(&grid, bandha.as_ref()).unwrap();

        assert_eq!(sequence.pattern, bandha.name());
        assert_eq!(sequence.codes.len(), CELL_COUNT);
        for (code, coord) in sequence.codes.iter().zip(&order) {
            assert_eq!(*code, grid.get(*coord).unwrap());
        }
    }
}

#[test]
fn chakra_rotations_share_each_ring_start() {
    // Both rotations leave ring k from its corner (k, k); the outermost
    // ring therefore starts at the origin either way.
    let clockwise = ChakraBandha::new(Rotation::Clockwise, RingOrder::OuterToInner).generate();
    let counter =
        ChakraBandha::new(Rotation::CounterClockwise, RingOrder::OuterToInner).generate();

    assert_eq!(clockwise[0], Coordinate::new(0, 0));
    assert_eq!(counter[0], Coordinate::new(0, 0));
    assert_eq!(clockwise[1], Coordinate::new(0, 1));
    assert_eq!(counter[1], Coordinate::new(1, 0));
}

#[test]
fn inner_to_outer_chakra_starts_at_the_center() {
    let order = ChakraBandha::new(Rotation::Clockwise, RingOrder::InnerToOuter).generate();
    assert_eq!(order[0], Coordinate::new(13, 13));
    assert_eq!(order[CELL_COUNT - 1], Coordinate::new(1, 0));
}

struct TruncatedBandha;

impl Bandha for TruncatedBandha {
    fn name(&self) -> &str {
        "truncated"
    }

    fn generate(&self) -> Vec<Coordinate> {
        ChakraBandha::default()
            .generate()
            .into_iter()
            .take(700)
            .collect()
    }
}

struct StutteringBandha;

impl Bandha for StutteringBandha {
    fn name(&self) -> &str {
        "stuttering"
    }

    fn generate(&self) -> Vec<Coordinate> {
        let mut order = ChakraBandha::default().generate();
        order[728] = order[0];
        order
    }
}

struct EscapingBandha;

impl Bandha for EscapingBandha {
    fn name(&self) -> &str {
        "escaping"
    }

    fn generate(&self) -> Vec<Coordinate> {
        let mut order = ChakraBandha::default().generate();
        order[100] = Coordinate::new(27, 3);
        order
    }
}

#[test]
fn truncated_pattern_fails_integrity_check() {
    let grid = ChakraGrid::repeating();
    let err = traverse(&grid, &TruncatedBandha).unwrap_err();
    assert!(matches!(err, Error::PatternIntegrity { .. }));
    assert!(err.to_string().contains("700"));
}

#[test]
fn duplicate_cell_fails_integrity_check() {
    let grid = ChakraGrid::repeating();
    let err = traverse(&grid, &StutteringBandha).unwrap_err();
    assert!(matches!(err, Error::PatternIntegrity { .. }));
    assert!(err.to_string().contains("visited twice"));
}

#[test]
fn out_of_range_coordinate_fails_as_out_of_bounds() {
    let grid = ChakraGrid::repeating();
    let err = traverse(&grid, &EscapingBandha).unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { row: 27, col: 3 }));
}

#[test]
fn registry_serves_builtin_patterns_by_name() {
    let registry = BandhaRegistry::with_builtin();
    assert_eq!(
        registry.names(),
        vec!["chakra-bandh", "diagonal-bandh", "navamaank-bandh"]
    );
    assert!(registry.get("unheard-of-bandh").is_none());

    let grid = ChakraGrid::repeating();
    for name in registry.names() {
        let bandha = registry.get(name).unwrap();
        let sequence = traverse(&grid, bandha.as_ref()).unwrap();
        assert_eq!(sequence.pattern, name);
    }
}

#[test]
fn registry_accepts_external_patterns() {
    struct ReverseDiagonal;

    impl Bandha for ReverseDiagonal {
        fn name(&self) -> &str {
            "reverse-diagonal-bandh"
        }

        fn generate(&self) -> Vec<Coordinate> {
            let mut order = DiagonalBandha.generate();
            order.reverse();
            order
        }
    }

    let mut registry = BandhaRegistry::with_builtin();
    registry.register(Arc::new(ReverseDiagonal));

    let bandha = registry.get("reverse-diagonal-bandh").unwrap();
    let sequence = traverse(&ChakraGrid::repeating(), bandha.as_ref()).unwrap();
    assert_eq!(sequence.codes.len(), CELL_COUNT);
}

proptest! {
    #[test]
    fn any_valid_grid_traverses_completely(
        cells in prop::collection::vec(1u8..=64, CELL_COUNT)
    ) {
        let grid = ChakraGrid::from_row_major(&cells).unwrap();
        for bandha in all_configurations() {
            let sequence = traverse(&grid, bandha.as_ref()).unwrap();
            prop_assert_eq!(sequence.codes.len(), CELL_COUNT);
        }
    }

    #[test]
    fn traversal_permutes_the_cell_multiset(
        cells in prop::collection::vec(1u8..=64, CELL_COUNT)
    ) {
        let grid = ChakraGrid::from_row_major(&cells).unwrap();
        let mut expected = cells.clone();
        expected.sort_unstable();

        for bandha in all_configurations() {
            let mut codes = traverse(&grid, bandha.as_ref()).unwrap().codes;
            codes.sort_unstable();
            prop_assert_eq!(&codes, &expected, "{}", bandha.name());
        }
    }
}
