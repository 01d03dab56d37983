//! Space-joining of loose class values.

use crate::value::Value;

/// Join the truthy values with single spaces, in order.
///
/// Values are rendered as given; no modifier normalization applies.
///
/// ```
/// use abem_core::{Value, join};
///
/// let classes = join([Value::from("foo"), Value::from(false), Value::from("bar")]);
/// assert_eq!(classes, "foo bar");
/// assert_eq!(join(Vec::<Value>::new()), "");
/// ```
pub fn join<I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    values
        .into_iter()
        .map(Into::into)
        .filter(Value::is_truthy)
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`join`] over arguments of mixed types.
///
/// ```
/// use abem_core::join;
///
/// assert_eq!(join!("foo", false, "bar", None::<&str>, "", "baz"), "foo bar baz");
/// assert_eq!(join!(), "");
/// ```
#[macro_export]
macro_rules! join {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($value)),*];
        $crate::join::join(values)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_falsy_and_keeps_order() {
        assert_eq!(
            join!("foo", false, "bar", (), "", "baz"),
            "foo bar baz"
        );
    }

    #[test]
    fn renders_truthy_non_strings() {
        assert_eq!(join!("a", 0, 2, true, f64::NAN, "b"), "a 2 true b");
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(join!(), "");
        assert_eq!(join([false, false]), "");
    }

    #[test]
    fn no_normalization() {
        assert_eq!(join(["Foo-Bar", "--x"]), "Foo-Bar --x");
    }
}
