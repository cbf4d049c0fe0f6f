use std::fmt;
use std::str::FromStr;

/// `1 - (1 - x)^3`: fast start, decelerating finish.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Number a stat counter animates towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTarget {
    Value(i64),
    /// Target text that is not an integer; displayed as `NaN`.
    Invalid,
}

impl FromStr for CounterTarget {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(parse_leading_int(raw).map_or(CounterTarget::Invalid, CounterTarget::Value))
    }
}

impl fmt::Display for CounterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterTarget::Value(v) => write!(f, "{}", v),
            CounterTarget::Invalid => f.write_str("NaN"),
        }
    }
}

/// Integer parsing that accepts a numeric prefix ("120+" -> 120) after
/// leading whitespace, the way attribute values are read on the page.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        if c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')) {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].parse().ok()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// One counter's animation: started at `start` (ms timestamp) and running
/// for `duration` ms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub start: f64,
    pub duration: f64,
    pub target: CounterTarget,
}

impl CounterAnimation {
    pub fn new(start: f64, duration: f64, target: CounterTarget) -> Self {
        Self { start, duration, target }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Text to display at timestamp `now`. The final frame writes the exact
    /// target rather than the eased value.
    pub fn frame(&self, now: f64) -> CounterFrame {
        let progress = self.progress(now);
        let done = progress >= 1.0;
        let text = match self.target {
            CounterTarget::Invalid => "NaN".to_string(),
            CounterTarget::Value(target) if done => target.to_string(),
            CounterTarget::Value(target) => {
                ((ease_out_cubic(progress) * target as f64).floor() as i64).to_string()
            }
        };
        CounterFrame { text, done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn parses_targets_like_attribute_values() {
        assert_eq!("120".parse::<CounterTarget>().unwrap(), CounterTarget::Value(120));
        assert_eq!(" 15+".parse::<CounterTarget>().unwrap(), CounterTarget::Value(15));
        assert_eq!("abc".parse::<CounterTarget>().unwrap(), CounterTarget::Invalid);
        assert_eq!("".parse::<CounterTarget>().unwrap(), CounterTarget::Invalid);
    }

    #[test]
    fn counter_lands_exactly_on_target_at_duration() {
        let anim = CounterAnimation::new(1000.0, 1800.0, CounterTarget::Value(97));
        assert_eq!(anim.frame(1000.0), CounterFrame { text: "0".into(), done: false });
        let last = anim.frame(2800.0);
        assert_eq!(last, CounterFrame { text: "97".into(), done: true });
        assert!(!anim.frame(2799.0).done);
    }

    #[test]
    fn displayed_values_never_decrease() {
        let anim = CounterAnimation::new(0.0, 1800.0, CounterTarget::Value(2500));
        let mut previous = 0;
        let mut t = 0.0;
        while t <= 1900.0 {
            let value: i64 = anim.frame(t).text.parse().unwrap();
            assert!(value >= previous, "value dropped at t={}", t);
            previous = value;
            t += 16.7;
        }
        assert_eq!(previous, 2500);
    }

    #[test]
    fn invalid_target_shows_nan_until_done() {
        let anim = CounterAnimation::new(0.0, 1800.0, CounterTarget::Invalid);
        assert_eq!(anim.frame(900.0).text, "NaN");
        assert_eq!(anim.frame(1800.0), CounterFrame { text: "NaN".into(), done: true });
    }
}
