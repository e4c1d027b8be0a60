//! Round-trip encoding and multi-pattern extraction

use bhoovalaya::bandha::{ChakraBandha, DiagonalBandha, RingOrder, Rotation};
use bhoovalaya::script::tables;
use bhoovalaya::{
    decode, decode_grid, decode_hidden, traverse, ChakraGrid, Error, GridComposer,
    NumericSequence, CELL_COUNT,
};

fn sequence(codes: &[u8]) -> NumericSequence {
    NumericSequence {
        pattern: "test".to_string(),
        codes: codes.to_vec(),
    }
}

#[test]
fn full_placement_round_trips_exactly() {
    let bandha = ChakraBandha::default();
    let codes: Vec<u8> = (0..CELL_COUNT).map(|i| (i % 64) as u8 + 1).collect();

    let mut composer = GridComposer::new();
    composer.place(&codes, &bandha).unwrap();
    assert_eq!(composer.remaining(), 0);
    let grid = composer.build().unwrap();

    let readback = traverse(&grid, &bandha).unwrap();
    assert_eq!(readback.codes, codes);
}

#[test]
fn encoded_text_round_trips_through_grid_and_table() {
    let kannada = tables::kannada();
    let bandha = ChakraBandha::default();

    let message = kannada.encode("ಕಅರನ").unwrap();
    let mut composer = GridComposer::new();
    composer.place(&message, &bandha).unwrap();
    composer.fill(64).unwrap();
    let grid = composer.build().unwrap();

    let reading = decode_grid(&grid, &bandha, &kannada).unwrap();
    assert_eq!(reading.graphemes[..4].concat(), "ಕಅರನ");
    assert!(reading.is_clean());
}

#[test]
fn two_patterns_carry_two_independent_messages() {
    let kannada = tables::kannada();
    let sanskrit = tables::sanskrit_devanagari();

    // Outer spiral writes from the grid edge, inner spiral from the
    // center; short messages never meet.
    let outer = ChakraBandha::new(Rotation::Clockwise, RingOrder::OuterToInner);
    let inner = ChakraBandha::new(Rotation::Clockwise, RingOrder::InnerToOuter);

    let primary_message: Vec<u8> = vec![14, 1, 40, 33, 1, 46];
    let hidden_message: Vec<u8> = vec![15, 2, 41, 34];

    let mut composer = GridComposer::new();
    composer.place(&primary_message, &outer).unwrap();
    composer.place(&hidden_message, &inner).unwrap();
    composer.fill(51).unwrap();
    let grid = composer.build().unwrap();

    let (primary, hidden) = decode_hidden(&grid, &outer, &kannada, &inner, &sanskrit).unwrap();

    let expected_primary = decode(&sequence(&primary_message), &kannada);
    let expected_hidden = decode(&sequence(&hidden_message), &sanskrit);
    assert_eq!(
        primary.graphemes[..expected_primary.len()],
        expected_primary.graphemes[..]
    );
    assert_eq!(
        hidden.graphemes[..expected_hidden.len()],
        expected_hidden.graphemes[..]
    );
}

#[test]
fn pipeline_order_does_not_affect_results() {
    let kannada = tables::kannada();
    let prakrit = tables::prakrit_devanagari();
    let grid = ChakraGrid::repeating();
    let chakra = ChakraBandha::default();
    let diagonal = DiagonalBandha;

    let (a_first, b_first) = decode_hidden(&grid, &chakra, &kannada, &diagonal, &prakrit).unwrap();
    let (b_second, a_second) =
        decode_hidden(&grid, &diagonal, &prakrit, &chakra, &kannada).unwrap();

    assert_eq!(a_first, a_second);
    assert_eq!(b_first, b_second);

    // Each joint result matches the standalone pipeline.
    assert_eq!(a_first, decode_grid(&grid, &chakra, &kannada).unwrap());
    assert_eq!(b_first, decode_grid(&grid, &diagonal, &prakrit).unwrap());
}

#[test]
fn conflicting_placements_are_rejected() {
    let chakra = ChakraBandha::default();
    let diagonal = DiagonalBandha;

    // Both walks start at the origin cell, so differing first codes clash.
    let mut composer = GridComposer::new();
    composer.place(&[1], &chakra).unwrap();
    let err = composer.place(&[2], &diagonal).unwrap_err();
    assert!(matches!(
        err,
        Error::EncodeConflict {
            row: 0,
            col: 0,
            existing: 1,
            proposed: 2
        }
    ));

    // Agreeing overlap is fine.
    composer.place(&[1], &diagonal).unwrap();
}

#[test]
fn failed_placement_leaves_the_composer_untouched() {
    let chakra = ChakraBandha::default();
    let mut composer = GridComposer::new();
    composer.place(&[7, 7, 7], &chakra).unwrap();

    // Third code conflicts; the first two must not be rewritten.
    assert!(composer.place(&[7, 7, 9, 33], &chakra).is_err());
    assert_eq!(composer.remaining(), CELL_COUNT - 3);

    composer.fill(7).unwrap();
    let grid = composer.build().unwrap();
    let readback = traverse(&grid, &chakra).unwrap();
    assert!(readback.codes.iter().all(|&code| code == 7));
}

#[test]
fn placements_validate_codes_and_capacity() {
    let chakra = ChakraBandha::default();

    let mut composer = GridComposer::new();
    let err = composer.place(&[1, 0], &chakra).unwrap_err();
    assert!(matches!(err, Error::ValueRange { value: 0, .. }));

    let oversized = vec![1u8; CELL_COUNT + 1];
    assert!(matches!(
        composer.place(&oversized, &chakra),
        Err(Error::Shape(_))
    ));

    let mut composer = GridComposer::new();
    assert!(matches!(
        composer.fill(99),
        Err(Error::ValueRange { value: 99, .. })
    ));
}

#[test]
fn unfinished_composition_cannot_build() {
    let mut composer = GridComposer::new();
    composer.place(&[5], &ChakraBandha::default()).unwrap();
    assert_eq!(composer.remaining(), CELL_COUNT - 1);

    let err = composer.build().unwrap_err();
    // The origin holds code 5; the first unfilled cell is its neighbor.
    assert!(matches!(err, Error::UnfilledCell { row: 0, col: 1 }));
}
