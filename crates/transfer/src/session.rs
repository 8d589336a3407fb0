//! The mask/corner pairing session, decoupled from any dialog UI.
//!
//! The host's dialogs are modeled as one synchronous capability the driver
//! supplies: present a list of labels, get back an index or a cancel. The
//! session logic — which labels to offer, when to stop, what a cancel
//! aborts — lives here so it is testable without a UI harness.

use tp_timeline::Corner;

use crate::registry::ChoiceRegistry;

/// Synchronous choice capability supplied by the driver.
pub trait OptionPicker {
    /// Present labeled options; returns the index *into `options`* of the
    /// chosen entry, or `None` if the user cancelled.
    fn pick(&mut self, title: &str, options: &[String]) -> Option<usize>;

    /// Ask whether to keep going. `None` means cancel, aborting the session.
    fn another(&mut self, question: &str) -> Option<bool>;
}

/// Offer the still-available mask channels and consume the chosen one.
///
/// Returns `None` when nothing is on offer or the picker cancels. Labels are
/// 1-based ("Mask 1".."Mask 5") over 0-based channel indices.
pub fn choose_mask(masks: &mut ChoiceRegistry, picker: &mut dyn OptionPicker) -> Option<usize> {
    let offer = masks.available();
    if offer.is_empty() {
        return None;
    }
    let labels: Vec<String> = offer.iter().map(|i| format!("Mask {}", i + 1)).collect();
    let chosen = picker.pick("Choose a mask to copy from", &labels)?;
    let channel = *offer.get(chosen)?;
    masks.consume(channel).ok()?;
    Some(channel)
}

/// Offer the still-available corners and consume the chosen one.
pub fn choose_corner(corners: &mut ChoiceRegistry, picker: &mut dyn OptionPicker) -> Option<Corner> {
    let offer = corners.available();
    if offer.is_empty() {
        return None;
    }
    let labels: Vec<String> = offer
        .iter()
        .filter_map(|&i| Corner::from_index(i))
        .map(|c| c.label().to_string())
        .collect();
    let chosen = picker.pick("Choose a corner to copy to", &labels)?;
    let corner = Corner::from_index(*offer.get(chosen)?)?;
    corners.consume(corner.index()).ok()?;
    Some(corner)
}

/// Run the multi-pair selection loop for the picture-in-picture flow.
///
/// Each round pairs one mask channel with one corner; the loop ends when
/// either registry runs dry or the picker declines another round. A cancel
/// at any point aborts the whole session (`None`) — nothing should be
/// transferred in that case.
pub fn pair_session(
    masks: &mut ChoiceRegistry,
    corners: &mut ChoiceRegistry,
    picker: &mut dyn OptionPicker,
) -> Option<Vec<(usize, Corner)>> {
    let mut pairs = Vec::new();
    loop {
        let channel = choose_mask(masks, picker)?;
        let corner = choose_corner(corners, picker)?;
        pairs.push((channel, corner));

        if masks.is_exhausted() || corners.is_exhausted() {
            break;
        }
        match picker.another("Choose another mask-corner pair?") {
            None => return None,
            Some(false) => break,
            Some(true) => {}
        }
    }
    Some(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Picker that replays a fixed script of answers.
    struct Scripted {
        picks: Vec<Option<usize>>,
        continues: Vec<Option<bool>>,
    }

    impl Scripted {
        fn new(picks: &[Option<usize>], continues: &[Option<bool>]) -> Self {
            Self {
                picks: picks.to_vec(),
                continues: continues.to_vec(),
            }
        }
    }

    impl OptionPicker for Scripted {
        fn pick(&mut self, _title: &str, options: &[String]) -> Option<usize> {
            let choice = self.picks.remove(0);
            if let Some(idx) = choice {
                assert!(idx < options.len(), "scripted pick out of range");
            }
            choice
        }

        fn another(&mut self, _question: &str) -> Option<bool> {
            self.continues.remove(0)
        }
    }

    #[test]
    fn choose_mask_maps_offer_position_to_channel() {
        // Channels 1 and 3 enabled; picking the second offer entry = channel 3.
        let mut masks = ChoiceRegistry::masks([false, true, false, true, false]);
        let mut picker = Scripted::new(&[Some(1)], &[]);
        assert_eq!(choose_mask(&mut masks, &mut picker), Some(3));
        assert_eq!(masks.available(), vec![1]);
    }

    #[test]
    fn choose_mask_cancel_consumes_nothing() {
        let mut masks = ChoiceRegistry::masks([true, true, false, false, false]);
        let mut picker = Scripted::new(&[None], &[]);
        assert_eq!(choose_mask(&mut masks, &mut picker), None);
        assert_eq!(masks.available(), vec![0, 1]);
    }

    #[test]
    fn session_pairs_until_declined() {
        let mut masks = ChoiceRegistry::masks([true, true, true, false, false]);
        let mut corners = ChoiceRegistry::corners();
        // Two rounds: (mask 0, Top Left), (mask 1, Top Right), then "no".
        let mut picker = Scripted::new(
            &[Some(0), Some(0), Some(0), Some(0)],
            &[Some(true), Some(false)],
        );
        let pairs = pair_session(&mut masks, &mut corners, &mut picker).unwrap();
        assert_eq!(pairs, vec![(0, Corner::TopLeft), (1, Corner::TopRight)]);
    }

    #[test]
    fn session_stops_when_masks_run_dry() {
        let mut masks = ChoiceRegistry::masks([true, false, false, false, false]);
        let mut corners = ChoiceRegistry::corners();
        // Single enabled mask: no continuation question is ever asked.
        let mut picker = Scripted::new(&[Some(0), Some(2)], &[]);
        let pairs = pair_session(&mut masks, &mut corners, &mut picker).unwrap();
        assert_eq!(pairs, vec![(0, Corner::BottomLeft)]);
    }

    #[test]
    fn session_stops_when_corners_run_dry() {
        let mut masks = ChoiceRegistry::masks([true; 5]);
        let mut corners = ChoiceRegistry::corners();
        let mut picker = Scripted::new(
            &[
                Some(0),
                Some(0),
                Some(0),
                Some(0),
                Some(0),
                Some(0),
                Some(0),
                Some(0),
            ],
            &[Some(true), Some(true), Some(true)],
        );
        let pairs = pair_session(&mut masks, &mut corners, &mut picker).unwrap();
        assert_eq!(pairs.len(), 4);
        // All four corners assigned exactly once.
        let mut seen: Vec<Corner> = pairs.iter().map(|&(_, c)| c).collect();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn cancel_mid_session_aborts_everything() {
        let mut masks = ChoiceRegistry::masks([true, true, false, false, false]);
        let mut corners = ChoiceRegistry::corners();
        let mut picker = Scripted::new(&[Some(0), Some(0), None], &[Some(true)]);
        assert_eq!(pair_session(&mut masks, &mut corners, &mut picker), None);
    }
}
