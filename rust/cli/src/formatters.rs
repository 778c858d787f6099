//! Text formatters for cards, hands and learned policies.
//!
//! ## Example
//!
//! ```rust
//! use qjack_cli::formatters::format_hand;
//! use qjack_engine::cards::Rank;
//! use qjack_engine::hand::Hand;
//!
//! let hand = Hand::from_cards(&[Rank::Ace, Rank::King]);
//! assert_eq!(format_hand(&hand), "A K (21, soft)");
//! ```

use qjack_ai::qtable::QTable;
use qjack_engine::count::CountBin;
use qjack_engine::engine::State;
use qjack_engine::hand::Hand;
use qjack_engine::player::PlayerAction;

/// Player totals shown in the policy grid.
pub const POLICY_PLAYER_VALUES: std::ops::RangeInclusive<u8> = 4..=21;
/// Dealer upcards shown in the policy grid; 11 is the ace.
pub const POLICY_DEALER_UPCARDS: std::ops::RangeInclusive<u8> = 2..=11;

/// Cards in deal order followed by the total, e.g. `10 6 5 (21)`.
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(|c| c.to_string()).collect();
    let soft = if hand.is_soft() { ", soft" } else { "" };
    format!("{} ({}{})", cards.join(" "), hand.value(), soft)
}

fn upcard_label(upcard: u8) -> String {
    if upcard == 11 {
        "A".to_string()
    } else {
        upcard.to_string()
    }
}

/// Greedy hit/stand grid for one count bin.
///
/// Rows are player totals, columns dealer upcards. `H` is hit, `S` is stand,
/// `.` marks a state the table never updated.
pub fn format_policy(table: &QTable, count_bin: CountBin) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "POLICY (H = hit, S = stand, . = unseen; count bin {})\n",
        count_bin
    ));
    s.push_str("     ");
    for up in POLICY_DEALER_UPCARDS {
        s.push_str(&format!("{:>3}", upcard_label(up)));
    }
    s.push('\n');
    for pv in POLICY_PLAYER_VALUES {
        s.push_str(&format!("{:>4} ", pv));
        for up in POLICY_DEALER_UPCARDS {
            let state = State {
                player_value: pv,
                dealer_upcard: up,
                count_bin,
            };
            let cell = if !table.contains_state(&state) {
                "."
            } else {
                match table.best_action(&state) {
                    PlayerAction::Hit => "H",
                    PlayerAction::Stand => "S",
                }
            };
            s.push_str(&format!("{:>3}", cell));
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use qjack_engine::cards::Rank;

    #[test]
    fn hand_shows_cards_and_total() {
        let hand = Hand::from_cards(&[Rank::Ten, Rank::Six, Rank::Five]);
        assert_eq!(format_hand(&hand), "10 6 5 (21)");
    }

    #[test]
    fn policy_grid_has_a_row_per_player_total() {
        let table = QTable::new();
        let grid = format_policy(&table, CountBin::Zero);
        let lines: Vec<&str> = grid.lines().collect();
        // title + header + 18 rows
        assert_eq!(lines.len(), 20);
        assert!(lines[1].trim_end().ends_with('A'));
        assert!(lines[2].trim_start().starts_with('4'));
        assert!(lines[19].trim_start().starts_with("21"));
        assert!(lines[2..].iter().all(|l| !l.contains('H')));
    }

    #[test]
    fn policy_grid_marks_learned_actions() {
        let mut table = QTable::new();
        let hit = State {
            player_value: 12,
            dealer_upcard: 10,
            count_bin: CountBin::Zero,
        };
        let stand = State {
            player_value: 20,
            dealer_upcard: 11,
            count_bin: CountBin::Zero,
        };
        table.set(hit, PlayerAction::Hit, 0.1);
        table.set(stand, PlayerAction::Stand, 0.6);
        let grid = format_policy(&table, CountBin::Zero);
        let row12 = grid.lines().find(|l| l.trim_start().starts_with("12 ")).unwrap();
        let row20 = grid.lines().find(|l| l.trim_start().starts_with("20 ")).unwrap();
        // the 10 column is the ninth cell, the ace column the tenth
        assert_eq!(row12.split_whitespace().nth(9), Some("H"));
        assert_eq!(row20.split_whitespace().nth(10), Some("S"));
    }
}
