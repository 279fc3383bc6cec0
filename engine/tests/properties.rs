use engine::{resolve, resolve_round, round_limit, DiceCounts, RollSequences};
use proptest::prelude::*;

fn faces(len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, len)
}

fn roll_pairs(max_len: usize) -> impl Strategy<Value = RollSequences> {
    (0..=max_len).prop_flat_map(|len| {
        (faces(len), faces(len))
            .prop_map(|(a, d)| RollSequences::from_parts(a, d).unwrap())
    })
}

proptest! {
    #[test]
    fn comparisons_match_round_count(rolls in roll_pairs(200), a in 1u8..=4, d in 1u8..=4) {
        let counts = DiceCounts::new(a, d).unwrap();
        let tally = resolve(&rolls, counts);
        let expected = (rolls.len() / usize::from(a.max(d))) * usize::from(a.min(d));
        prop_assert_eq!(tally.comparisons(), expected as u64);
        prop_assert_eq!(round_limit(rolls.len(), counts), rolls.len() / usize::from(a.max(d)));
    }

    #[test]
    fn resolve_is_pure(rolls in roll_pairs(120), a in 1u8..=3, d in 1u8..=3) {
        let counts = DiceCounts::new(a, d).unwrap();
        prop_assert_eq!(resolve(&rolls, counts), resolve(&rolls, counts));
    }

    #[test]
    fn equal_top_dice_never_score_for_attacker(top in 1u8..=6) {
        let tally = resolve_round(&[top], &[top]);
        prop_assert_eq!(tally.attacker_wins, 0);
        prop_assert_eq!(tally.defender_wins, 1);
    }

    #[test]
    fn single_dice_is_pairwise_comparison(rolls in roll_pairs(150)) {
        let tally = resolve(&rolls, DiceCounts::new(1, 1).unwrap());
        let defender_wins = rolls
            .attacker()
            .iter()
            .zip(rolls.defender())
            .filter(|(a, d)| d >= a)
            .count() as u64;
        prop_assert_eq!(tally.defender_wins, defender_wins);
        prop_assert_eq!(tally.comparisons(), rolls.len() as u64);
    }

    #[test]
    fn extra_defender_die_never_costs_defender(att in faces(3), def in faces(3), a in 1usize..=3, d in 1usize..=2) {
        let fewer = resolve_round(&att[..a], &def[..d]);
        let more = resolve_round(&att[..a], &def[..d + 1]);
        prop_assert!(more.defender_wins >= fewer.defender_wins);
    }

    #[test]
    fn round_input_order_does_not_matter(mut att in faces(3), mut def in faces(2)) {
        let before = resolve_round(&att, &def);
        att.reverse();
        def.reverse();
        prop_assert_eq!(resolve_round(&att, &def), before);
    }
}
