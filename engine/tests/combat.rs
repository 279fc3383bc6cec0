use engine::{
    contest, resolve, resolve_round, round_limit, ContestOutcome, DiceCounts, EngineError,
    RollSequences, Side, Tally,
};

fn sample_rolls() -> RollSequences {
    RollSequences::from_parts(vec![3, 1, 5, 2, 6, 4], vec![2, 2, 1, 6, 3, 5]).unwrap()
}

#[test]
fn two_versus_two_sample_tally() {
    let counts = DiceCounts::new(2, 2).unwrap();
    let rolls = sample_rolls();
    assert_eq!(round_limit(rolls.len(), counts), 3);
    assert_eq!(resolve(&rolls, counts), Tally::new(4, 2));
}

#[test]
fn sample_rounds_resolve_individually() {
    assert_eq!(resolve_round(&[3, 1], &[2, 2]), Tally::new(1, 1));
    assert_eq!(resolve_round(&[5, 2], &[1, 6]), Tally::new(1, 1));
    assert_eq!(resolve_round(&[6, 4], &[3, 5]), Tally::new(2, 0));
}

#[test]
fn ties_go_to_defender() {
    assert_eq!(contest(4, 4), ContestOutcome::TieDefender);
    assert_eq!(contest(4, 4).winner(), Side::Defender);
    assert_eq!(contest(5, 4), ContestOutcome::AttackerWins);
    assert_eq!(contest(3, 4), ContestOutcome::DefenderWins);
    assert_eq!(resolve_round(&[6, 6, 6], &[6, 6]), Tally::new(0, 2));
}

#[test]
fn unmatched_dice_are_discarded() {
    // Only the top attacker die meets the single defender die.
    assert_eq!(resolve_round(&[1, 6, 1], &[5]), Tally::new(1, 0));
    assert_eq!(resolve_round(&[2], &[1, 1, 1]), Tally::new(1, 0));
}

#[test]
fn zero_dice_are_rejected() {
    assert_eq!(
        DiceCounts::new(0, 2),
        Err(EngineError::InvalidDiceCount { side: Side::Attacker, count: 0 })
    );
    assert_eq!(
        DiceCounts::new(3, 0),
        Err(EngineError::InvalidDiceCount { side: Side::Defender, count: 0 })
    );
}

#[test]
fn single_dice_compare_every_position() {
    let rolls = sample_rolls();
    let counts = DiceCounts::new(1, 1).unwrap();
    assert_eq!(round_limit(rolls.len(), counts), rolls.len());
    // 3>2, 1<2, 5>1, 2<6, 6>3, 4<5
    assert_eq!(resolve(&rolls, counts), Tally::new(3, 3));
}

#[test]
fn round_limit_uses_larger_side() {
    let counts = DiceCounts::new(3, 1).unwrap();
    assert_eq!(round_limit(10, counts), 3);
    assert_eq!(counts.matched(), 1);

    // Three attacker dice per round over six positions: [3,1,5] and [2,6,4]
    // against single defender dice 2 and 2.
    assert_eq!(resolve(&sample_rolls(), counts), Tally::new(2, 0));
}

#[test]
fn more_dice_than_rolls_yields_no_rounds() {
    let rolls = RollSequences::from_parts(vec![6, 6], vec![1, 1]).unwrap();
    let counts = DiceCounts::new(3, 2).unwrap();
    assert_eq!(round_limit(rolls.len(), counts), 0);
    assert_eq!(resolve(&rolls, counts), Tally::default());
}
