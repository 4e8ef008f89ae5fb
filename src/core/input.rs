use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// The four drum zones, inner pair on the centre skin, outer pair on the rim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DrumAction {
    LeftRim = 0,
    LeftCentre = 1,
    RightCentre = 2,
    RightRim = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl DrumAction {
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn side(self) -> Side {
        match self {
            DrumAction::LeftRim | DrumAction::LeftCentre => Side::Left,
            DrumAction::RightCentre | DrumAction::RightRim => Side::Right,
        }
    }
}

/// A single press or release crossing the input boundary.
#[derive(Clone, Copy, Debug)]
pub struct InputEdge {
    pub action: DrumAction,
    pub pressed: bool,
}

#[inline(always)]
pub fn action_from_keycode(code: KeyCode) -> Option<DrumAction> {
    match code {
        KeyCode::KeyD => Some(DrumAction::LeftRim),
        KeyCode::KeyF => Some(DrumAction::LeftCentre),
        KeyCode::KeyJ => Some(DrumAction::RightCentre),
        KeyCode::KeyK => Some(DrumAction::RightRim),
        _ => None,
    }
}

/// Maps a raw keyboard event to a drum edge. OS key repeat is dropped: a
/// held key is one press, not a stream of them.
pub fn edge_from_key_event(event: &KeyEvent) -> Option<InputEdge> {
    if event.repeat {
        return None;
    }
    if let PhysicalKey::Code(code) = event.physical_key {
        let action = action_from_keycode(code)?;
        return Some(InputEdge {
            action,
            pressed: event.state == ElementState::Pressed,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_split_two_and_two() {
        assert_eq!(DrumAction::LeftRim.side(), Side::Left);
        assert_eq!(DrumAction::LeftCentre.side(), Side::Left);
        assert_eq!(DrumAction::RightCentre.side(), Side::Right);
        assert_eq!(DrumAction::RightRim.side(), Side::Right);
    }

    #[test]
    fn keyboard_mapping_covers_home_row() {
        assert_eq!(action_from_keycode(KeyCode::KeyD), Some(DrumAction::LeftRim));
        assert_eq!(action_from_keycode(KeyCode::KeyF), Some(DrumAction::LeftCentre));
        assert_eq!(action_from_keycode(KeyCode::KeyJ), Some(DrumAction::RightCentre));
        assert_eq!(action_from_keycode(KeyCode::KeyK), Some(DrumAction::RightRim));
        assert_eq!(action_from_keycode(KeyCode::Space), None);
    }
}
