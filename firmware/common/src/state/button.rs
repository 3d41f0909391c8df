//! Logical buttons, decoupled from the pins that raise them.

/// One of the two debounced inputs on the panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalButton {
    /// Push switch under the joystick. Toggles the border style and the green LED.
    Joystick,
    /// Button A. Toggles the intensity-driven blue/red LEDs.
    ActionA,
}

impl LogicalButton {
    /// Number of logical buttons.
    pub const COUNT: usize = 2;

    /// All buttons, in index order.
    #[cfg(test)]
    pub const ALL: [Self; Self::COUNT] = [Self::Joystick, Self::ActionA];

    /// Dense index used for per-button storage.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Joystick => 0,
            Self::ActionA => 1,
        }
    }

    /// Short label for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Joystick => "Joystick",
            Self::ActionA => "Button A",
        }
    }
}
