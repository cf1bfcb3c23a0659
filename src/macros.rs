/// Builds a [`Value`](crate::Value) from an SNBT-like literal.
///
/// Compound keys must be string literals and pass the key check; an invalid
/// key panics at runtime, the construction-time analogue of
/// [`Error::InvalidKey`](crate::Error::InvalidKey).
///
/// ```rust
/// use snbt::{nbt, to_string};
///
/// let tree = nbt!({
///     "id": "minecraft:zombie",
///     "Health": 20,
///     "Pos": [0.5, 64.0, 0.5],
///     "CustomNameVisible": true
/// });
/// assert_eq!(
///     to_string(&tree),
///     "{CustomNameVisible: true, Health: 20, \
///      id: \"minecraft:zombie\", Pos: [0.5f, 64.0f, 0.5f]}"
/// );
/// ```
#[macro_export]
macro_rules! nbt {
    // List elements are munched one at a time into the accumulator so that
    // expressions with a unary minus (two token trees) parse as one element.
    (@list [$($out:expr,)*]) => {
        vec![$($out),*]
    };
    (@list [$($out:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::nbt!(@list [$($out,)* $crate::Value::Null,] $($($rest)*)?)
    };
    (@list [$($out:expr,)*] [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $crate::nbt!(@list [$($out,)* $crate::nbt!([ $($inner)* ]),] $($($rest)*)?)
    };
    (@list [$($out:expr,)*] { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $crate::nbt!(@list [$($out,)* $crate::nbt!({ $($inner)* }),] $($($rest)*)?)
    };
    (@list [$($out:expr,)*] $elem:expr $(, $($rest:tt)*)?) => {
        $crate::nbt!(@list [$($out,)* $crate::Value::from($elem),] $($($rest)*)?)
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt)+ ]) => {
        $crate::Value::List($crate::nbt!(@list [] $($elem)+))
    };

    ({}) => {
        $crate::Value::Compound($crate::Compound::new())
    };

    ({ $($entry:tt)+ }) => {
        $crate::Value::Compound($crate::nbt_compound!({ $($entry)+ }))
    };

    // Fallback for any other expression.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Builds a [`Compound`](crate::Compound) from an SNBT-like literal.
///
/// Like [`nbt!`] but yields the compound itself rather than wrapping it in a
/// [`Value`](crate::Value). Panics on an invalid key.
///
/// ```rust
/// use snbt::nbt_compound;
///
/// let nbt = nbt_compound!({"Health": 20, "OnGround": true});
/// assert_eq!(nbt.len(), 2);
/// ```
#[macro_export]
macro_rules! nbt_compound {
    // Entry munching mirrors the list rules in `nbt!`: values are matched as
    // expressions so negative numbers work, with nested braces and brackets
    // dispatched back through `nbt!`.
    (@entries $nbt:ident) => {};
    (@entries $nbt:ident $key:literal : null $(, $($rest:tt)*)?) => {
        $crate::nbt_compound!(@entry $nbt $key ($crate::Value::Null));
        $crate::nbt_compound!(@entries $nbt $($($rest)*)?);
    };
    (@entries $nbt:ident $key:literal : [ $($value:tt)* ] $(, $($rest:tt)*)?) => {
        $crate::nbt_compound!(@entry $nbt $key ($crate::nbt!([ $($value)* ])));
        $crate::nbt_compound!(@entries $nbt $($($rest)*)?);
    };
    (@entries $nbt:ident $key:literal : { $($value:tt)* } $(, $($rest:tt)*)?) => {
        $crate::nbt_compound!(@entry $nbt $key ($crate::nbt!({ $($value)* })));
        $crate::nbt_compound!(@entries $nbt $($($rest)*)?);
    };
    (@entries $nbt:ident $key:literal : $value:expr $(, $($rest:tt)*)?) => {
        $crate::nbt_compound!(@entry $nbt $key ($crate::Value::from($value)));
        $crate::nbt_compound!(@entries $nbt $($($rest)*)?);
    };
    (@entry $nbt:ident $key:literal ($value:expr)) => {
        if let Err(err) = $nbt.insert($key, $value) {
            panic!("{err}");
        }
    };

    ({}) => {
        $crate::Compound::new()
    };

    ({ $($entry:tt)+ }) => {{
        let mut nbt = $crate::Compound::new();
        $crate::nbt_compound!(@entries nbt $($entry)+);
        nbt
    }};
}
