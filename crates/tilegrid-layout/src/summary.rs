//! Summaries of the participants a navigation button hides.

use tilegrid_core::{Badge, NavButton, NavDirection, Tile};

/// Hidden participants that get their own initials badge.
pub const MAX_BADGES: usize = 2;

/// First letter of each word, uppercased. Blank names give `"?"`.
#[must_use]
pub fn initials(name: &str) -> String {
    let out: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if out.is_empty() { "?".to_owned() } else { out }
}

/// Up to [`MAX_BADGES`] initials badges, then `+N` for the rest.
#[must_use]
pub fn badges(hidden: &[Tile]) -> Vec<Badge> {
    let mut out: Vec<Badge> = hidden
        .iter()
        .take(MAX_BADGES)
        .map(|t| Badge::Initials(initials(&t.display_name)))
        .collect();
    if hidden.len() > MAX_BADGES {
        out.push(Badge::Overflow(hidden.len() - MAX_BADGES));
    }
    out
}

fn shown_name(tile: &Tile) -> &str {
    let name = tile.display_name.trim();
    if name.is_empty() { tile.id.as_str() } else { name }
}

/// Full-name listing: `"A"`, `"A and B"`, or `"A, B and N+ others"`.
#[must_use]
pub fn label(hidden: &[Tile]) -> String {
    match hidden {
        [] => String::new(),
        [a] => shown_name(a).to_owned(),
        [a, b] => format!("{} and {}", shown_name(a), shown_name(b)),
        [a, b, rest @ ..] => format!(
            "{}, {} and {}+ others",
            shown_name(a),
            shown_name(b),
            rest.len()
        ),
    }
}

/// Build a navigation button standing for `hidden`.
#[must_use]
pub fn nav_button(direction: NavDirection, target_page: usize, hidden: &[Tile]) -> NavButton {
    NavButton {
        direction,
        target_page,
        hidden_count: hidden.len(),
        badges: badges(hidden),
        label: label(hidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(names: &[&str]) -> Vec<Tile> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Tile::new(format!("p{i}"), *n))
            .collect()
    }

    #[test]
    fn initials_of_each_word() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("  Grace   Brewster Hopper "), "GBH");
        assert_eq!(initials("émile"), "É");
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn badges_cap_at_two_plus_overflow() {
        assert!(badges(&[]).is_empty());
        assert_eq!(
            badges(&tiles(&["Ann Lee", "Bo"])),
            vec![Badge::Initials("AL".into()), Badge::Initials("B".into())]
        );
        assert_eq!(
            badges(&tiles(&["Ann", "Bo", "Cy", "Di", "Ed"])),
            vec![
                Badge::Initials("A".into()),
                Badge::Initials("B".into()),
                Badge::Overflow(3),
            ]
        );
    }

    #[test]
    fn label_forms() {
        assert_eq!(label(&[]), "");
        assert_eq!(label(&tiles(&["Ann"])), "Ann");
        assert_eq!(label(&tiles(&["Ann", "Bo"])), "Ann and Bo");
        assert_eq!(label(&tiles(&["Ann", "Bo", "Cy", "Di"])), "Ann, Bo and 2+ others");
    }

    #[test]
    fn label_uses_id_for_blank_names() {
        assert_eq!(label(&tiles(&[" ", "Bo"])), "p0 and Bo");
    }

    #[test]
    fn nav_button_carries_counts() {
        let hidden = tiles(&["Ann", "Bo", "Cy"]);
        let nav = nav_button(NavDirection::Previous, 1, &hidden);
        assert_eq!(nav.direction, NavDirection::Previous);
        assert_eq!(nav.target_page, 1);
        assert_eq!(nav.hidden_count, 3);
        assert_eq!(nav.badges.len(), 3);
        assert_eq!(nav.label, "Ann, Bo and 1+ others");
    }
}
