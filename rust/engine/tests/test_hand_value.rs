use qjack_engine::cards::{all_ranks, Rank};
use qjack_engine::hand::Hand;

fn value(cards: &[Rank]) -> u32 {
    Hand::from_cards(cards).value()
}

#[test]
fn non_ace_hands_sum_their_points() {
    let non_aces: Vec<Rank> = all_ranks().into_iter().filter(|r| !r.is_ace()).collect();
    for &a in &non_aces {
        for &b in &non_aces {
            for &c in &non_aces {
                assert_eq!(
                    value(&[a, b, c]),
                    u32::from(a.points() + b.points() + c.points()),
                    "{} {} {}",
                    a,
                    b,
                    c
                );
            }
        }
    }
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(value(&[Rank::Jack, Rank::Queen]), 20);
    assert_eq!(value(&[Rank::King, Rank::Five]), 15);
}

#[test]
fn two_aces_make_twelve() {
    assert_eq!(value(&[Rank::Ace, Rank::Ace]), 12);
}

#[test]
fn ace_and_ten_value_make_twenty_one() {
    for ten in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(value(&[Rank::Ace, ten]), 21);
        assert_eq!(value(&[ten, Rank::Ace]), 21);
    }
}

#[test]
fn only_as_many_aces_are_demoted_as_needed() {
    assert_eq!(value(&[Rank::Ace, Rank::Ace, Rank::Nine]), 21);
    assert_eq!(value(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]), 14);
    assert_eq!(value(&[Rank::Ace, Rank::Six, Rank::Ten]), 17);
    assert_eq!(value(&[Rank::Ace, Rank::Ace, Rank::Ten, Rank::Nine]), 21);
}

#[test]
fn hard_bust_stays_bust() {
    let hand = Hand::from_cards(&[Rank::Ten, Rank::Ten, Rank::Five]);
    assert_eq!(hand.value(), 25);
    assert!(hand.is_bust());

    let hand = Hand::from_cards(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Two]);
    assert_eq!(hand.value(), 23);
    assert!(hand.is_bust());
}
