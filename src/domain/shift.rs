use std::fmt;

/// Label used by [`Shift::default`].
pub const DEFAULT_SHIFT_TIME: &str = "1234";

/// A labelled time slot, e.g. `"Saturday morning"`.
///
/// Shifts never change after creation. Jobs and volunteers share them through
/// `Arc<Shift>`, so two shifts with the same label are still different slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shift {
    time: String,
}

impl Shift {
    pub fn new(time: impl Into<String>) -> Self {
        Shift { time: time.into() }
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}

impl Default for Shift {
    fn default() -> Self {
        Shift::new(DEFAULT_SHIFT_TIME)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.time)
    }
}

/// Joins shift labels with `", "` for the human readable summaries.
pub(crate) fn join_labels<'a, I>(shifts: I) -> String
where
    I: IntoIterator<Item = &'a std::sync::Arc<Shift>>,
{
    shifts.into_iter().map(|shift| shift.time()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_display_is_the_label() {
        let shift = Shift::new("Sunday night");

        assert_eq!(shift.time(), "Sunday night");
        assert_eq!(shift.to_string(), "Sunday night");
    }

    #[test]
    fn test_default_label() {
        assert_eq!(Shift::default().time(), "1234");
    }

    #[test]
    fn test_join_labels_keeps_order() {
        let shifts = vec![Arc::new(Shift::new("b")), Arc::new(Shift::new("a")), Arc::new(Shift::new("c"))];

        assert_eq!(join_labels(&shifts), "b, a, c");
        assert_eq!(join_labels(&Vec::<Arc<Shift>>::new()), "");
    }
}
