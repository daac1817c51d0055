//! Input modality is fixed once per session; the strategy picked from it is
//! the only place hover and tap semantics are told apart.

/// Media query whose match means the primary input cannot hover.
pub const HOVER_NONE_QUERY: &str = "(hover: none)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputModality {
    Pointer,
    Touch,
}

impl InputModality {
    pub fn from_hover_none(hover_none: bool) -> Self {
        if hover_none {
            Self::Touch
        } else {
            Self::Pointer
        }
    }
}

/// Raw interaction events forwarded from the clip's wrapper element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    PointerEnter,
    PointerLeave,
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundIntent {
    Unmute,
    Mute,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionStrategy {
    /// Hover unmutes, leaving mutes, taps do nothing.
    Hover,
    /// Each tap toggles the sound, hover events do nothing.
    TapToggle,
}

impl From<InputModality> for InteractionStrategy {
    fn from(modality: InputModality) -> Self {
        match modality {
            InputModality::Pointer => Self::Hover,
            InputModality::Touch => Self::TapToggle,
        }
    }
}

impl InteractionStrategy {
    pub fn intent(self, interaction: Interaction, muted: bool) -> SoundIntent {
        match (self, interaction) {
            (Self::Hover, Interaction::PointerEnter) => SoundIntent::Unmute,
            (Self::Hover, Interaction::PointerLeave) => SoundIntent::Mute,
            (Self::TapToggle, Interaction::Tap) if muted => SoundIntent::Unmute,
            (Self::TapToggle, Interaction::Tap) => SoundIntent::Mute,
            _ => SoundIntent::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_none_means_touch() {
        assert_eq!(InputModality::from_hover_none(true), InputModality::Touch);
        assert_eq!(InputModality::from_hover_none(false), InputModality::Pointer);
    }

    #[test]
    fn hover_strategy_ignores_taps() {
        let strategy = InteractionStrategy::from(InputModality::Pointer);
        assert_eq!(strategy.intent(Interaction::PointerEnter, true), SoundIntent::Unmute);
        assert_eq!(strategy.intent(Interaction::PointerLeave, false), SoundIntent::Mute);
        assert_eq!(strategy.intent(Interaction::Tap, true), SoundIntent::Ignore);
        assert_eq!(strategy.intent(Interaction::Tap, false), SoundIntent::Ignore);
    }

    #[test]
    fn tap_strategy_toggles_and_ignores_hover() {
        let strategy = InteractionStrategy::from(InputModality::Touch);
        assert_eq!(strategy.intent(Interaction::Tap, true), SoundIntent::Unmute);
        assert_eq!(strategy.intent(Interaction::Tap, false), SoundIntent::Mute);
        assert_eq!(strategy.intent(Interaction::PointerEnter, true), SoundIntent::Ignore);
        assert_eq!(strategy.intent(Interaction::PointerLeave, false), SoundIntent::Ignore);
    }
}
