//! Loosely-typed year entries.

use serde_json::Value;

/// A value that may or may not hold an integer.
pub trait YearEntry {
    /// The integer this entry holds, if any.
    fn as_year(&self) -> Option<i64>;

    /// How the entry is shown in an error.
    fn describe(&self) -> String;
}

impl YearEntry for i64 {
    fn as_year(&self) -> Option<i64> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl YearEntry for i32 {
    fn as_year(&self) -> Option<i64> {
        Some(i64::from(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl YearEntry for f64 {
    fn as_year(&self) -> Option<i64> {
        // Whole floats such as 2019.0 are accepted
        if self.is_finite() && self.fract() == 0.0 && *self >= i64::MIN as f64 && *self < i64::MAX as f64 {
            Some(*self as i64)
        } else {
            None
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl YearEntry for str {
    fn as_year(&self) -> Option<i64> {
        self.trim().parse().ok()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl YearEntry for String {
    fn as_year(&self) -> Option<i64> {
        self.as_str().as_year()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl YearEntry for Value {
    fn as_year(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(|f| f.as_year())),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T: YearEntry + ?Sized> YearEntry for &T {
    fn as_year(&self) -> Option<i64> {
        (**self).as_year()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
