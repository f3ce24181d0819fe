//! Message semantics of the scalar readings channel.
//!
//! Next to the orientation stream, the device exposes a plain-text
//! socket for simple scalar telemetry: a bare numeric message is a
//! distance reading in centimeters, any other text is the LED state to
//! display verbatim. The UI answers with `ON`/`OFF` commands to toggle
//! the LED. The socket itself is the caller's concern; this module only
//! covers the message grammar.

use crate::num_traits::IsFinite;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// A decoded message from the scalar readings channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarMessage<'a, T> {
    /// A distance reading, in centimeters.
    Distance(T),
    /// The LED state display text, passed through verbatim.
    LedState(&'a str),
}

impl<'a, T> ScalarMessage<'a, T>
where
    T: FromStr + IsFinite,
{
    /// Decodes a raw channel message.
    ///
    /// Messages that parse as a finite number are distance readings;
    /// everything else is LED state text.
    pub fn parse(raw: &'a str) -> Self {
        match raw.trim().parse::<T>() {
            Ok(value) if value.is_finite() => Self::Distance(value),
            _ => Self::LedState(raw),
        }
    }
}

/// A command sent back to the device to toggle its LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    On,
    Off,
}

impl LedCommand {
    /// The wire representation of the command.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }

    /// Parses a command, ignoring case. Returns `None` for anything
    /// that is not a recognized command.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("on") {
            Some(Self::On)
        } else if raw.eq_ignore_ascii_case("off") {
            Some(Self::Off)
        } else {
            None
        }
    }
}

impl Display for LedCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distance() {
        assert_eq!(
            ScalarMessage::<f32>::parse("23.5"),
            ScalarMessage::Distance(23.5)
        );
        assert_eq!(
            ScalarMessage::<f64>::parse(" 120 "),
            ScalarMessage::Distance(120.0)
        );
    }

    #[test]
    fn test_parse_led_state() {
        assert_eq!(
            ScalarMessage::<f32>::parse("LED encendido"),
            ScalarMessage::LedState("LED encendido")
        );
        assert_eq!(ScalarMessage::<f32>::parse(""), ScalarMessage::LedState(""));
    }

    #[test]
    fn test_non_finite_text_is_not_a_distance() {
        // "nan" parses as a float but is not a usable reading.
        assert_eq!(
            ScalarMessage::<f32>::parse("nan"),
            ScalarMessage::LedState("nan")
        );
        assert_eq!(
            ScalarMessage::<f64>::parse("inf"),
            ScalarMessage::LedState("inf")
        );
    }

    #[test]
    fn test_led_command_wire_format() {
        assert_eq!(LedCommand::On.as_str(), "ON");
        assert_eq!(LedCommand::Off.as_str(), "OFF");
        assert_eq!(LedCommand::On.to_string(), "ON");
    }

    #[test]
    fn test_led_command_parse() {
        assert_eq!(LedCommand::parse("ON"), Some(LedCommand::On));
        assert_eq!(LedCommand::parse("off"), Some(LedCommand::Off));
        assert_eq!(LedCommand::parse(" On "), Some(LedCommand::On));
        assert_eq!(LedCommand::parse("toggle"), None);
    }
}
